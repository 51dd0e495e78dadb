//! In-Memory Vote Repository Adapter
//!
//! Keeps votes in a map keyed by (voter, dataset).
//! Useful for testing and development.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::foundation::{DatasetId, DomainError, ErrorCode, VoterName};
use crate::domain::voting::Vote;
use crate::ports::VoteRepository;

type VoteKey = (VoterName, DatasetId);

/// In-memory storage for votes
#[derive(Debug, Clone, Default)]
pub struct InMemoryVoteRepository {
    votes: Arc<RwLock<HashMap<VoteKey, Vote>>>,
}

impl InMemoryVoteRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored votes across datasets
    pub async fn len(&self) -> usize {
        self.votes.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.votes.read().await.is_empty()
    }
}

#[async_trait]
impl VoteRepository for InMemoryVoteRepository {
    async fn upsert(&self, vote: &Vote) -> Result<(), DomainError> {
        let key = (vote.voter.clone(), vote.dataset.clone());
        self.votes.write().await.insert(key, vote.clone());
        Ok(())
    }

    async fn find(
        &self,
        voter: &VoterName,
        dataset: &DatasetId,
    ) -> Result<Option<Vote>, DomainError> {
        let votes = self.votes.read().await;
        Ok(votes.get(&(voter.clone(), dataset.clone())).cloned())
    }

    async fn find_by_dataset(&self, dataset: &DatasetId) -> Result<Vec<Vote>, DomainError> {
        let votes = self.votes.read().await;
        let mut found: Vec<Vote> = votes
            .values()
            .filter(|v| &v.dataset == dataset)
            .cloned()
            .collect();
        found.sort_by_key(|v| v.submitted_at);
        Ok(found)
    }

    async fn count_by_dataset(&self, dataset: &DatasetId) -> Result<usize, DomainError> {
        let votes = self.votes.read().await;
        Ok(votes.keys().filter(|(_, d)| d == dataset).count())
    }

    async fn delete(&self, voter: &VoterName, dataset: &DatasetId) -> Result<(), DomainError> {
        let mut votes = self.votes.write().await;
        votes
            .remove(&(voter.clone(), dataset.clone()))
            .map(|_| ())
            .ok_or_else(|| {
                DomainError::new(ErrorCode::VoteNotFound, "Vote not found")
                    .with_detail("voter", voter.as_str())
                    .with_detail("dataset", dataset.as_str())
            })
    }
}
