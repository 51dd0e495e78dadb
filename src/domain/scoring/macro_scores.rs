//! Macro-score aggregation: many sub-criterion ratings → one score per macro-criterion.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ahp::CriteriaSet;
use crate::domain::dataset::{AlternativeRow, MacroCriteriaMap, RatingsTable};

/// Macro-scores of one alternative, aligned with the table's criteria.
///
/// `None` marks an undefined score (every member rating missing).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroScoreRow {
    pub alternative: String,
    pub scores: Vec<Option<f64>>,
}

impl MacroScoreRow {
    /// True when every macro-score is defined.
    pub fn is_complete(&self) -> bool {
        self.scores.iter().all(Option::is_some)
    }
}

/// Alternatives × macro-criteria score table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroScoreTable {
    pub criteria: CriteriaSet,
    pub rows: Vec<MacroScoreRow>,
}

impl MacroScoreTable {
    /// Score of an alternative on a macro-criterion, if both exist and it is defined.
    pub fn get(&self, alternative: &str, criterion: &str) -> Option<f64> {
        let index = self.criteria.index_of(criterion)?;
        self.rows
            .iter()
            .find(|row| row.alternative == alternative)
            .and_then(|row| row.scores.get(index).copied().flatten())
    }

    /// Number of alternatives.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if there are no alternatives.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Collapses raw ratings into macro-criterion scores.
pub struct MacroScoreAggregator;

impl MacroScoreAggregator {
    /// Computes per-alternative macro-scores.
    ///
    /// # Algorithm
    /// 1. Rows sharing an alternative name are grouped; each column is
    ///    averaged over the group's present ratings.
    /// 2. Each macro-score is the mean of its member columns' group means,
    ///    again skipping missing ones.
    ///
    /// # Edge Cases
    /// - Empty table: Returns an empty score table
    /// - Member column absent from the table: Skipped
    /// - All members missing: Score is `None`, never 0
    ///
    /// Alternatives appear in first-appearance order.
    pub fn compute(table: &RatingsTable, map: &MacroCriteriaMap) -> MacroScoreTable {
        let rows = Self::group_rows(table)
            .into_iter()
            .map(|(alternative, group)| {
                let scores = map
                    .iter()
                    .map(|(_, members)| {
                        mean(
                            members
                                .iter()
                                .filter(|column| table.has_column(column))
                                .filter_map(|column| {
                                    mean(group.iter().filter_map(|row| row.rating(column)))
                                }),
                        )
                    })
                    .collect();

                MacroScoreRow {
                    alternative: alternative.to_string(),
                    scores,
                }
            })
            .collect();

        MacroScoreTable {
            criteria: map.criteria().clone(),
            rows,
        }
    }

    fn group_rows(table: &RatingsTable) -> Vec<(&str, Vec<&AlternativeRow>)> {
        let mut groups: HashMap<&str, Vec<&AlternativeRow>> = HashMap::new();
        for row in &table.rows {
            groups.entry(row.alternative.as_str()).or_default().push(row);
        }

        table
            .alternatives()
            .into_iter()
            .map(|name| (name, groups.remove(name).unwrap_or_default()))
            .collect()
    }
}

/// Arithmetic mean, `None` for an empty input.
fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, count) = values.fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
