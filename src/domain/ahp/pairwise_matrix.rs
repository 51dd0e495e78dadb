//! Pairwise comparison matrix and the judgments it is built from.

use nalgebra::DMatrix;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{AhpError, CriteriaSet, Preference, WeightSolver, WeightVector};

/// Relative tolerance used when checking reciprocity of externally supplied matrices.
pub const RECIPROCAL_TOLERANCE: f64 = 1e-9;

/// A single directed judgment: `first` is `intensity` times as important as `second`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Judgment {
    pub first: String,
    pub second: String,
    pub intensity: f64,
}

/// Sparse set of comparison judgments keyed by criterion pair.
///
/// Supplying the same unordered pair twice keeps the latest judgment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Judgments {
    entries: Vec<Judgment>,
}

impl Judgments {
    /// Creates an empty judgment set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a raw intensity judgment (builder style).
    pub fn compare(
        mut self,
        first: impl Into<String>,
        second: impl Into<String>,
        intensity: f64,
    ) -> Self {
        self.insert(first, second, intensity);
        self
    }

    /// Adds a Saaty-scale preference judgment (builder style).
    pub fn prefer(
        self,
        first: impl Into<String>,
        second: impl Into<String>,
        preference: Preference,
    ) -> Self {
        self.compare(first, second, preference.value())
    }

    /// Inserts or replaces the judgment for a pair.
    pub fn insert(&mut self, first: impl Into<String>, second: impl Into<String>, intensity: f64) {
        let first = first.into();
        let second = second.into();
        self.entries.retain(|j| {
            !((j.first == first && j.second == second) || (j.first == second && j.second == first))
        });
        self.entries.push(Judgment {
            first,
            second,
            intensity,
        });
    }

    /// Returns true if the pair has been judged in either direction.
    pub fn contains_pair(&self, a: &str, b: &str) -> bool {
        self.entries
            .iter()
            .any(|j| (j.first == a && j.second == b) || (j.first == b && j.second == a))
    }

    /// Number of judgments.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no judgments were supplied.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates judgments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Judgment> {
        self.entries.iter()
    }
}

/// An n×n positive reciprocal matrix: unit diagonal, M[i][j] = 1/M[j][i].
///
/// The invariant holds for every constructed value, so downstream solvers
/// never re-check it. Serializes as a row-major nested array.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct PairwiseMatrix {
    values: DMatrix<f64>,
}

impl PairwiseMatrix {
    /// Builds a matrix from judgments, defaulting any unjudged pair to 1.0.
    ///
    /// Defaulted pairs are logged at `warn` level. Use [`Self::build_strict`]
    /// to reject incomplete judgment sets instead.
    pub fn build(criteria: &CriteriaSet, judgments: &Judgments) -> Result<Self, AhpError> {
        let matrix = Self::fill(criteria, judgments)?;

        let missing = Self::missing_pairs(criteria, judgments);
        if !missing.is_empty() {
            warn!(
                missing = missing.len(),
                pairs = ?missing,
                "Unjudged criteria pairs defaulted to equal importance"
            );
        }

        Ok(matrix)
    }

    /// Builds a matrix, failing if any of the C(n,2) pairs lacks a judgment.
    pub fn build_strict(criteria: &CriteriaSet, judgments: &Judgments) -> Result<Self, AhpError> {
        let missing = Self::missing_pairs(criteria, judgments);
        if !missing.is_empty() {
            return Err(AhpError::IncompleteJudgments { missing });
        }
        Self::fill(criteria, judgments)
    }

    /// Pairs `(a, b)` with index(a) < index(b) that have no judgment.
    pub fn missing_pairs(criteria: &CriteriaSet, judgments: &Judgments) -> Vec<(String, String)> {
        criteria
            .pairs()
            .into_iter()
            .filter(|(a, b)| !judgments.contains_pair(a, b))
            .map(|(a, b)| (a.to_string(), b.to_string()))
            .collect()
    }

    fn fill(criteria: &CriteriaSet, judgments: &Judgments) -> Result<Self, AhpError> {
        let n = criteria.len();
        let mut values = DMatrix::from_element(n, n, 1.0);

        for judgment in judgments.iter() {
            let i = criteria
                .index_of(&judgment.first)
                .ok_or_else(|| AhpError::UnknownCriterion(judgment.first.clone()))?;
            let j = criteria
                .index_of(&judgment.second)
                .ok_or_else(|| AhpError::UnknownCriterion(judgment.second.clone()))?;
            if i == j {
                return Err(AhpError::SelfComparison(judgment.first.clone()));
            }
            if !(judgment.intensity.is_finite() && judgment.intensity > 0.0) {
                return Err(AhpError::NonPositiveEntry {
                    row: i,
                    col: j,
                    value: judgment.intensity,
                });
            }

            values[(i, j)] = judgment.intensity;
            values[(j, i)] = 1.0 / judgment.intensity;
        }

        Ok(Self { values })
    }

    /// Builds a matrix by evaluating `upper(i, j)` for every i < j and
    /// mirroring reciprocals below the diagonal.
    pub(crate) fn from_upper(n: usize, upper: impl Fn(usize, usize) -> f64) -> Self {
        let mut values = DMatrix::from_element(n, n, 1.0);
        for i in 0..n {
            for j in (i + 1)..n {
                let v = upper(i, j);
                values[(i, j)] = v;
                values[(j, i)] = 1.0 / v;
            }
        }
        Self { values }
    }

    /// Validates and wraps externally supplied rows (e.g. a persisted matrix).
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, AhpError> {
        let n = rows.len();
        for row in &rows {
            if row.len() != n {
                return Err(AhpError::Shape {
                    rows: n,
                    cols: row.len(),
                });
            }
        }

        for (i, row) in rows.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                if !(value.is_finite() && value > 0.0) {
                    return Err(AhpError::NonPositiveEntry { row: i, col: j, value });
                }
            }
            if (row[i] - 1.0).abs() > RECIPROCAL_TOLERANCE {
                return Err(AhpError::NonUnitDiagonal {
                    index: i,
                    value: row[i],
                });
            }
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let product = rows[i][j] * rows[j][i];
                if (product - 1.0).abs() > RECIPROCAL_TOLERANCE {
                    return Err(AhpError::NotReciprocal { row: i, col: j });
                }
            }
        }

        let values = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Ok(Self { values })
    }

    /// Matrix dimension n.
    pub fn dimension(&self) -> usize {
        self.values.nrows()
    }

    /// Entry at row `i`, column `j`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    /// The underlying dense matrix.
    pub fn as_matrix(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// Row-major nested representation.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values
            .row_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }

    /// Priority vector by the geometric-mean method.
    pub fn weights(&self) -> WeightVector {
        WeightSolver::geometric_mean(&self.values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for PairwiseMatrix {
    type Error = AhpError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<PairwiseMatrix> for Vec<Vec<f64>> {
    fn from(matrix: PairwiseMatrix) -> Self {
        matrix.to_rows()
    }
}
