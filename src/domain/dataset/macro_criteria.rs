//! Macro-criteria and the sub-criterion columns each one summarizes.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::ahp::{AhpError, CriteriaSet};

/// Convenience macro-criterion of the venue dataset.
pub const COMODITA: &str = "Comodità";
/// Food and drinks macro-criterion of the venue dataset.
pub const CIBO_E_BEVANDE: &str = "Cibo e bevande";
/// Value-for-money macro-criterion of the venue dataset.
pub const RAPPORTO_QUALITA_PREZZO: &str = "Rapporto qualità/prezzo";

static DEFAULT_MACRO_MAP: Lazy<MacroCriteriaMap> = Lazy::new(|| MacroCriteriaMap {
    criteria: CriteriaSet::from_trusted(vec![
        COMODITA.to_string(),
        CIBO_E_BEVANDE.to_string(),
        RAPPORTO_QUALITA_PREZZO.to_string(),
    ]),
    columns: vec![
        to_strings(&["Location", "Parcheggio", "Pubblic Relation"]),
        to_strings(&[
            "Primi", "Carne", "Pesce", "Panini", "Pizza", "Birra", "Vino", "Veg",
        ]),
        to_strings(&["Qualità/Prezzo"]),
    ],
});

fn to_strings(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

/// Ordered mapping macro-criterion → member sub-criterion columns.
///
/// The macro-criterion order is the criteria order voters compare in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroCriteriaMap {
    criteria: CriteriaSet,
    columns: Vec<Vec<String>>,
}

impl MacroCriteriaMap {
    /// Creates a mapping from `(macro name, member columns)` entries.
    ///
    /// # Errors
    /// - `EmptyCriteria` / `DuplicateCriterion` for bad macro names
    pub fn new<N, C>(entries: Vec<(N, Vec<C>)>) -> Result<Self, AhpError>
    where
        N: Into<String>,
        C: Into<String>,
    {
        let mut names = Vec::with_capacity(entries.len());
        let mut columns = Vec::with_capacity(entries.len());
        for (name, members) in entries {
            names.push(name.into());
            columns.push(members.into_iter().map(Into::into).collect());
        }

        Ok(Self {
            criteria: CriteriaSet::new(names)?,
            columns,
        })
    }

    /// Macro-criteria in order.
    pub fn criteria(&self) -> &CriteriaSet {
        &self.criteria
    }

    /// Member columns of a macro-criterion.
    pub fn columns_for(&self, criterion: &str) -> Option<&[String]> {
        self.criteria
            .index_of(criterion)
            .and_then(|i| self.columns.get(i))
            .map(Vec::as_slice)
    }

    /// Iterates `(macro name, member columns)` in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.criteria
            .names()
            .iter()
            .zip(self.columns.iter())
            .map(|(name, cols)| (name.as_str(), cols.as_slice()))
    }

    /// Every sub-criterion column, in macro order.
    pub fn all_columns(&self) -> Vec<&str> {
        self.columns
            .iter()
            .flat_map(|cols| cols.iter().map(String::as_str))
            .collect()
    }
}

impl Default for MacroCriteriaMap {
    /// The venue dataset's three macro-criteria.
    fn default() -> Self {
        DEFAULT_MACRO_MAP.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_map_has_three_ordered_criteria() {
        let map = MacroCriteriaMap::default();
        assert_eq!(
            map.criteria().names(),
            &[COMODITA, CIBO_E_BEVANDE, RAPPORTO_QUALITA_PREZZO]
        );
        assert_eq!(map.columns_for(CIBO_E_BEVANDE).unwrap().len(), 8);
        assert_eq!(
            map.columns_for(RAPPORTO_QUALITA_PREZZO).unwrap(),
            &["Qualità/Prezzo".to_string()]
        );
        assert_eq!(map.all_columns().len(), 12);
    }

    #[test]
    fn custom_map_rejects_duplicate_names() {
        let result = MacroCriteriaMap::new(vec![("X", vec!["a"]), ("X", vec!["b"])]);
        assert_eq!(result, Err(AhpError::DuplicateCriterion("X".to_string())));
    }

    #[test]
    fn unknown_macro_has_no_columns() {
        assert!(MacroCriteriaMap::default().columns_for("Nope").is_none());
    }
}
