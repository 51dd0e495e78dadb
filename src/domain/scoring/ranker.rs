//! Weighted ranking of alternatives over normalized macro-scores.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

use super::{MacroScoreAggregator, MacroScoreTable, Normalizer};
use crate::domain::dataset::{MacroCriteriaMap, RatingsTable};

/// One alternative and its weighted score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedAlternative {
    pub alternative: String,
    pub score: f64,
}

/// Alternatives ordered by descending score.
///
/// Equal scores keep the order in which alternatives first appear in the
/// dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ranking {
    pub entries: Vec<RankedAlternative>,
}

impl Ranking {
    /// The top-ranked alternative, if any.
    pub fn recommended(&self) -> Option<&RankedAlternative> {
        self.entries.first()
    }

    /// The first `k` entries (fewer if the ranking is shorter).
    pub fn top(&self, k: usize) -> &[RankedAlternative] {
        &self.entries[..k.min(self.entries.len())]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RankedAlternative> {
        self.entries.iter()
    }
}

/// Combines macro-scores with criterion weights into a ranking.
pub struct Ranker;

impl Ranker {
    /// Scores and ranks every alternative in `table`.
    ///
    /// Weights are keyed by macro-criterion name and need not sum to 1;
    /// criteria without a weight count as 0 and unknown keys are ignored.
    ///
    /// # Edge Cases
    /// - Empty dataset: Empty ranking
    /// - Any undefined normalized macro-score: Alternative is excluded
    /// - Ties: First-appearance order is kept
    pub fn rank(
        table: &RatingsTable,
        map: &MacroCriteriaMap,
        weights: &HashMap<String, f64>,
    ) -> Ranking {
        let scores = MacroScoreAggregator::compute(table, map);
        Self::rank_normalized(&Normalizer::min_max(&scores), weights)
    }

    /// Ranks an already normalized macro-score table.
    pub fn rank_normalized(normalized: &MacroScoreTable, weights: &HashMap<String, f64>) -> Ranking {
        let aligned: Vec<f64> = normalized
            .criteria
            .names()
            .iter()
            .map(|name| weights.get(name).copied().unwrap_or(0.0))
            .collect();

        let mut entries: Vec<RankedAlternative> = normalized
            .rows
            .iter()
            .filter(|row| row.is_complete())
            .map(|row| RankedAlternative {
                alternative: row.alternative.clone(),
                score: row.scores.iter().flatten().zip(&aligned).map(|(s, w)| s * w).sum(),
            })
            .collect();

        let excluded = normalized.rows.len() - entries.len();
        if excluded > 0 {
            tracing::debug!(excluded, "alternatives with incomplete macro-scores left out of ranking");
        }

        // sort_by is stable, so ties keep dataset order.
        entries.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));

        Ranking { entries }
    }
}
