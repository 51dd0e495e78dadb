//! Priority derivation by the geometric-mean method.

use nalgebra::{DMatrix, DVector};
use serde::{Deserialize, Serialize};

use super::AhpError;

/// Ordered, non-negative weights aligned with a criteria set.
///
/// Weights derived by [`WeightSolver`] sum to 1.0 up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightVector(Vec<f64>);

impl WeightVector {
    /// Wraps raw positional weights.
    pub fn from_values(values: Vec<f64>) -> Self {
        Self(values)
    }

    /// Number of weights.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no weights.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Weight at position `i`.
    pub fn get(&self, i: usize) -> Option<f64> {
        self.0.get(i).copied()
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }

    /// Iterates weights in criteria order.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.0.iter()
    }

    /// Weights as a slice.
    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub(crate) fn to_dvector(&self) -> DVector<f64> {
        DVector::from_column_slice(&self.0)
    }
}

/// Geometric-mean weight derivation.
pub struct WeightSolver;

impl WeightSolver {
    /// Derives normalized weights from a square positive matrix.
    ///
    /// # Algorithm
    /// w[i] = (Π_j M[i][j])^(1/n), then w is divided by its sum.
    ///
    /// # Errors
    /// - `AhpError::Shape` if the matrix is not square
    pub fn solve(matrix: &DMatrix<f64>) -> Result<WeightVector, AhpError> {
        if !matrix.is_square() {
            return Err(AhpError::Shape {
                rows: matrix.nrows(),
                cols: matrix.ncols(),
            });
        }
        Ok(Self::geometric_mean(matrix))
    }

    /// Same as [`Self::solve`] for a nested row representation.
    ///
    /// Ragged rows count as non-square.
    pub fn solve_rows(rows: &[Vec<f64>]) -> Result<WeightVector, AhpError> {
        let n = rows.len();
        if let Some(bad) = rows.iter().find(|row| row.len() != n) {
            return Err(AhpError::Shape {
                rows: n,
                cols: bad.len(),
            });
        }
        let matrix = DMatrix::from_fn(n, n, |i, j| rows[i][j]);
        Ok(Self::geometric_mean(&matrix))
    }

    pub(crate) fn geometric_mean(matrix: &DMatrix<f64>) -> WeightVector {
        let n = matrix.nrows();
        if n == 0 {
            return WeightVector(Vec::new());
        }

        let exponent = 1.0 / n as f64;
        let row_means: Vec<f64> = matrix
            .row_iter()
            .map(|row| row.iter().product::<f64>().powf(exponent))
            .collect();
        let total: f64 = row_means.iter().sum();

        WeightVector(row_means.into_iter().map(|g| g / total).collect())
    }
}
