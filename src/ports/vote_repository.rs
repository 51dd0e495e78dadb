//! Vote repository port.
//!
//! Persists one vote per (voter, dataset). Resubmitting replaces the earlier
//! vote; there is no history.
//!
//! # Example
//!
//! ```ignore
//! async fn group_weights(
//!     repo: &dyn VoteRepository,
//!     criteria: &CriteriaSet,
//!     dataset: &DatasetId,
//! ) -> Result<GroupConsensus, DomainError> {
//!     let votes = repo.find_by_dataset(dataset).await?;
//!     Ok(GroupConsensus::from_votes(criteria, &votes)?)
//! }
//! ```

use crate::domain::foundation::{DatasetId, DomainError, VoterName};
use crate::domain::voting::Vote;
use async_trait::async_trait;

/// Repository port for vote persistence.
///
/// Implementations must make `upsert` a replace on the (voter, dataset) key
/// so concurrent resubmissions leave exactly one vote.
#[async_trait]
pub trait VoteRepository: Send + Sync {
    /// Insert the vote, replacing any vote by the same voter on the same dataset.
    ///
    /// # Errors
    ///
    /// - `StorageError` / `DatabaseError` on persistence failure
    async fn upsert(&self, vote: &Vote) -> Result<(), DomainError>;

    /// Find one voter's vote on a dataset.
    async fn find(&self, voter: &VoterName, dataset: &DatasetId)
        -> Result<Option<Vote>, DomainError>;

    /// All votes on a dataset, oldest submission first.
    async fn find_by_dataset(&self, dataset: &DatasetId) -> Result<Vec<Vote>, DomainError>;

    /// Number of votes on a dataset.
    async fn count_by_dataset(&self, dataset: &DatasetId) -> Result<usize, DomainError>;

    /// Remove a voter's vote.
    ///
    /// # Errors
    ///
    /// - `VoteNotFound` if the voter has no vote on the dataset
    async fn delete(&self, voter: &VoterName, dataset: &DatasetId) -> Result<(), DomainError>;
}
