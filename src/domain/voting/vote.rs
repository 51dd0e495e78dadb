//! Vote entity - one voter's judgments against one dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::ahp::{AhpError, ConsistencyEvaluator, CriteriaSet, PairwiseMatrix};
use crate::domain::foundation::{DatasetId, Timestamp, VoteId, VoterName};

/// A submitted set of pairwise judgments and what was derived from them.
///
/// # Invariants
///
/// - At most one vote per `(voter, dataset)`; a resubmission replaces it
/// - `weights` and `consistency_ratio` were derived from `matrix`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    /// Unique identifier for this submission.
    pub id: VoteId,

    /// Who voted.
    pub voter: VoterName,

    /// Dataset the vote applies to.
    pub dataset: DatasetId,

    /// Full reciprocal comparison matrix in criteria order.
    pub matrix: PairwiseMatrix,

    /// Criterion name → priority weight.
    pub weights: HashMap<String, f64>,

    /// Consistency ratio of `matrix`.
    pub consistency_ratio: f64,

    /// When the vote was cast.
    pub submitted_at: Timestamp,
}

impl Vote {
    /// Derives weights and CR from `matrix` and stamps a new vote.
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if the matrix is not sized for `criteria`
    pub fn cast(
        voter: VoterName,
        dataset: DatasetId,
        criteria: &CriteriaSet,
        matrix: PairwiseMatrix,
    ) -> Result<Self, AhpError> {
        if matrix.dimension() != criteria.len() {
            return Err(AhpError::ShapeMismatch {
                expected: criteria.len(),
                got: matrix.dimension(),
            });
        }

        let weights = matrix.weights();
        let consistency_ratio = ConsistencyEvaluator::ratio(&matrix, &weights);

        Ok(Self {
            id: VoteId::new(),
            voter,
            dataset,
            weights: criteria.label(&weights),
            consistency_ratio,
            matrix,
            submitted_at: Timestamp::now(),
        })
    }

    /// True when the consistency ratio is below `threshold`.
    pub fn is_consistent(&self, threshold: f64) -> bool {
        self.consistency_ratio < threshold
    }
}
