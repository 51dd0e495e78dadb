//! Analysis configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::application::AnalysisSettings;
use crate::domain::ahp::CONSISTENCY_THRESHOLD;
use crate::domain::dataset::{DEFAULT_RATING_MAX, DEFAULT_RATING_MIN};

/// Thresholds and policies of the decision math
#[derive(Debug, Clone, Deserialize)]
pub struct AnalysisConfig {
    /// CR at or above this is reported as inconsistent
    #[serde(default = "default_consistency_threshold")]
    pub consistency_threshold: f64,

    /// Lowest valid raw rating
    #[serde(default = "default_rating_min")]
    pub rating_min: f64,

    /// Highest valid raw rating
    #[serde(default = "default_rating_max")]
    pub rating_max: f64,

    /// Reject votes with unjudged pairs instead of defaulting them to 1
    #[serde(default = "default_require_complete_judgments")]
    pub require_complete_judgments: bool,
}

impl AnalysisConfig {
    /// Settings handed to the application handlers
    pub fn settings(&self) -> AnalysisSettings {
        AnalysisSettings {
            consistency_threshold: self.consistency_threshold,
            require_complete_judgments: self.require_complete_judgments,
            rating_min: self.rating_min,
            rating_max: self.rating_max,
        }
    }

    /// Validate analysis configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !(self.consistency_threshold > 0.0 && self.consistency_threshold <= 1.0) {
            return Err(ValidationError::InvalidConsistencyThreshold);
        }
        if !(self.rating_min < self.rating_max) {
            return Err(ValidationError::InvalidRatingRange);
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            consistency_threshold: default_consistency_threshold(),
            rating_min: default_rating_min(),
            rating_max: default_rating_max(),
            require_complete_judgments: default_require_complete_judgments(),
        }
    }
}

fn default_consistency_threshold() -> f64 {
    CONSISTENCY_THRESHOLD
}

fn default_rating_min() -> f64 {
    DEFAULT_RATING_MIN
}

fn default_rating_max() -> f64 {
    DEFAULT_RATING_MAX
}

fn default_require_complete_judgments() -> bool {
    true
}
