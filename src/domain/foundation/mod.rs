//! Foundation module - Shared domain primitives.
//!
//! Contains value objects, identifiers and error types
//! that form the vocabulary of the AHP advisor domain.

mod errors;
mod ids;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use ids::{DatasetId, VoteId, VoterName, VOTER_NAME_MAX_LEN};
pub use timestamp::Timestamp;
