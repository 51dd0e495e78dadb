//! Tunables shared by the application handlers.

use crate::domain::ahp::CONSISTENCY_THRESHOLD;
use crate::domain::dataset::{DEFAULT_RATING_MAX, DEFAULT_RATING_MIN};

/// Analysis settings for the handlers.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisSettings {
    /// CR at or above this value is flagged as inconsistent.
    pub consistency_threshold: f64,
    /// Reject votes that leave a criteria pair unjudged.
    pub require_complete_judgments: bool,
    /// Lowest valid raw rating.
    pub rating_min: f64,
    /// Highest valid raw rating.
    pub rating_max: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            consistency_threshold: CONSISTENCY_THRESHOLD,
            require_complete_judgments: true,
            rating_min: DEFAULT_RATING_MIN,
            rating_max: DEFAULT_RATING_MAX,
        }
    }
}
