//! Group aggregation of individual judgments.

use super::{AhpError, PairwiseMatrix};

/// Combines several voters' matrices into one consensus matrix.
pub struct JudgmentAggregator;

impl JudgmentAggregator {
    /// Element-wise geometric mean of the matrices.
    ///
    /// The result does not depend on the order of `matrices`. The geometric
    /// mean of reciprocals is the reciprocal of the geometric mean, so only
    /// the upper triangle is computed and mirrored.
    ///
    /// # Errors
    /// - `AhpError::EmptyInput` if `matrices` is empty
    /// - `AhpError::ShapeMismatch` if dimensions differ
    pub fn aggregate(matrices: &[PairwiseMatrix]) -> Result<PairwiseMatrix, AhpError> {
        let first = matrices.first().ok_or(AhpError::EmptyInput)?;
        let n = first.dimension();

        if let Some(other) = matrices.iter().find(|m| m.dimension() != n) {
            return Err(AhpError::ShapeMismatch {
                expected: n,
                got: other.dimension(),
            });
        }

        if matrices.len() == 1 {
            return Ok(first.clone());
        }

        let exponent = 1.0 / matrices.len() as f64;
        Ok(PairwiseMatrix::from_upper(n, |i, j| {
            matrices
                .iter()
                .map(|m| m.get(i, j))
                .product::<f64>()
                .powf(exponent)
        }))
    }
}
