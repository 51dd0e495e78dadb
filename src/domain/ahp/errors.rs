//! Errors raised by the pairwise-comparison math.

use thiserror::Error;

use crate::domain::foundation::{DomainError, ErrorCode};

/// Precondition failures of matrix construction, weight derivation and aggregation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AhpError {
    #[error("pairwise matrix must be square, got {rows}x{cols}")]
    Shape { rows: usize, cols: usize },

    #[error("no matrices to aggregate")]
    EmptyInput,

    #[error("matrix dimension mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: usize, got: usize },

    #[error("entry ({row}, {col}) must be positive and finite, got {value}")]
    NonPositiveEntry { row: usize, col: usize, value: f64 },

    #[error("diagonal entry {index} must be 1, got {value}")]
    NonUnitDiagonal { index: usize, value: f64 },

    #[error("entry ({row}, {col}) is not the reciprocal of entry ({col}, {row})")]
    NotReciprocal { row: usize, col: usize },

    #[error("criteria list is empty")]
    EmptyCriteria,

    #[error("duplicate criterion: {0}")]
    DuplicateCriterion(String),

    #[error("unknown criterion: {0}")]
    UnknownCriterion(String),

    #[error("criterion compared with itself: {0}")]
    SelfComparison(String),

    #[error("missing judgments for pairs: {}", format_pairs(.missing))]
    IncompleteJudgments { missing: Vec<(String, String)> },
}

fn format_pairs(pairs: &[(String, String)]) -> String {
    pairs
        .iter()
        .map(|(a, b)| format!("{} vs {}", a, b))
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<AhpError> for DomainError {
    fn from(err: AhpError) -> Self {
        let code = match &err {
            AhpError::EmptyInput => ErrorCode::EmptyInput,
            AhpError::IncompleteJudgments { .. } => ErrorCode::IncompleteJudgments,
            AhpError::EmptyCriteria
            | AhpError::DuplicateCriterion(_)
            | AhpError::UnknownCriterion(_)
            | AhpError::SelfComparison(_) => ErrorCode::ValidationFailed,
            _ => ErrorCode::InvalidMatrix,
        };
        DomainError::new(code, err.to_string())
    }
}
