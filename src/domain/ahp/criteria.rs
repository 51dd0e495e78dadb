//! Ordered criteria set.
//!
//! The position of a criterion in the set is its row/column index in every
//! pairwise matrix and weight vector built against it.

use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

use super::{AhpError, WeightVector};

/// An ordered list of distinct criterion names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct CriteriaSet(Vec<String>);

impl CriteriaSet {
    /// Creates a criteria set, rejecting empty or duplicate names.
    pub fn new<I, S>(names: I) -> Result<Self, AhpError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if names.is_empty() {
            return Err(AhpError::EmptyCriteria);
        }

        let mut seen = HashSet::with_capacity(names.len());
        for name in &names {
            if !seen.insert(name.as_str()) {
                return Err(AhpError::DuplicateCriterion(name.clone()));
            }
        }

        Ok(Self(names))
    }

    /// Wraps names already known to be distinct and non-empty.
    pub(crate) fn from_trusted(names: Vec<String>) -> Self {
        Self(names)
    }

    /// Number of criteria.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for a constructed set; present for API symmetry.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Criterion names in order.
    pub fn names(&self) -> &[String] {
        &self.0
    }

    /// Index of a criterion, if present.
    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|c| c == name)
    }

    /// All unordered pairs `(a, b)` with index(a) < index(b), in row-major order.
    ///
    /// These are the C(n,2) judgments a voter is asked for.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        let mut pairs = Vec::with_capacity(self.0.len() * self.0.len().saturating_sub(1) / 2);
        for (i, a) in self.0.iter().enumerate() {
            for b in &self.0[i + 1..] {
                pairs.push((a.as_str(), b.as_str()));
            }
        }
        pairs
    }

    /// Equal weight 1/n for every criterion.
    pub fn equal_weights(&self) -> WeightVector {
        let n = self.0.len();
        WeightVector::from_values(vec![1.0 / n as f64; n])
    }

    /// Keys a positional weight vector by criterion name.
    pub fn label(&self, weights: &WeightVector) -> HashMap<String, f64> {
        self.0
            .iter()
            .cloned()
            .zip(weights.iter().copied())
            .collect()
    }
}

impl TryFrom<Vec<String>> for CriteriaSet {
    type Error = AhpError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CriteriaSet> for Vec<String> {
    fn from(set: CriteriaSet) -> Self {
        set.0
    }
}
