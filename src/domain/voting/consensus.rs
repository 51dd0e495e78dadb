//! Group consensus across all votes on a dataset.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Vote;
use crate::domain::ahp::{
    AhpError, ConsistencyEvaluator, CriteriaSet, JudgmentAggregator, PairwiseMatrix, WeightVector,
};

/// Weights derived from the aggregated judgments of every voter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupConsensus {
    pub criteria: CriteriaSet,
    pub weights: WeightVector,
    pub consistency_ratio: f64,
    pub vote_count: usize,
    /// Aggregated matrix; `None` when nobody has voted yet.
    pub matrix: Option<PairwiseMatrix>,
}

impl GroupConsensus {
    /// Aggregates the votes' matrices by element-wise geometric mean.
    ///
    /// # Edge Cases
    /// - No votes: Equal weights 1/n, CR 0, no matrix
    ///
    /// # Errors
    /// - `ShapeMismatch` if any vote's matrix is not sized for `criteria`
    pub fn from_votes(criteria: &CriteriaSet, votes: &[Vote]) -> Result<Self, AhpError> {
        if votes.is_empty() {
            return Ok(Self::equal(criteria));
        }

        let matrices: Vec<PairwiseMatrix> = votes.iter().map(|v| v.matrix.clone()).collect();
        if let Some(m) = matrices.iter().find(|m| m.dimension() != criteria.len()) {
            return Err(AhpError::ShapeMismatch {
                expected: criteria.len(),
                got: m.dimension(),
            });
        }

        let matrix = JudgmentAggregator::aggregate(&matrices)?;
        let weights = matrix.weights();
        let consistency_ratio = ConsistencyEvaluator::ratio(&matrix, &weights);

        Ok(Self {
            criteria: criteria.clone(),
            weights,
            consistency_ratio,
            vote_count: votes.len(),
            matrix: Some(matrix),
        })
    }

    /// Fallback consensus before any vote is cast.
    pub fn equal(criteria: &CriteriaSet) -> Self {
        Self {
            criteria: criteria.clone(),
            weights: criteria.equal_weights(),
            consistency_ratio: 0.0,
            vote_count: 0,
            matrix: None,
        }
    }

    /// Criterion name → group weight.
    pub fn weight_map(&self) -> HashMap<String, f64> {
        self.criteria.label(&self.weights)
    }
}
