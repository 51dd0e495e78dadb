//! File-based Vote Repository Adapter
//!
//! Stores each dataset's votes as one JSON file, `<base>/<dataset>.json`,
//! holding an object keyed by voter name.

use async_trait::async_trait;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::domain::foundation::{DatasetId, DomainError, ErrorCode, VoterName};
use crate::domain::voting::Vote;
use crate::ports::VoteRepository;

type VoteFile = BTreeMap<String, Vote>;

/// Write locks shared by every repository rooted at the same directory.
static DIRECTORY_LOCKS: Lazy<std::sync::Mutex<HashMap<PathBuf, Arc<Mutex<()>>>>> =
    Lazy::new(Default::default);

fn directory_lock(base_path: &Path) -> Arc<Mutex<()>> {
    let key = std::path::absolute(base_path).unwrap_or_else(|_| base_path.to_path_buf());
    let mut locks = DIRECTORY_LOCKS
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    locks.entry(key).or_default().clone()
}

/// File-based storage for votes
#[derive(Debug, Clone)]
pub struct FileVoteRepository {
    base_path: PathBuf,
    // Serializes read-modify-write cycles on this directory within the process.
    write_lock: Arc<Mutex<()>>,
}

impl FileVoteRepository {
    /// Create a repository rooted at `base_path`
    ///
    /// The directory is created on first write. Instances rooted at the
    /// same directory share one write lock.
    pub fn new<P: AsRef<Path>>(base_path: P) -> Self {
        let base_path = base_path.as_ref().to_path_buf();
        Self {
            write_lock: directory_lock(&base_path),
            base_path,
        }
    }

    fn dataset_file(&self, dataset: &DatasetId) -> PathBuf {
        self.base_path.join(format!("{}.json", dataset.as_str()))
    }

    async fn load(&self, dataset: &DatasetId) -> Result<VoteFile, DomainError> {
        let path = self.dataset_file(dataset);
        let json = match fs::read_to_string(&path).await {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(VoteFile::new()),
            Err(e) => return Err(io_error("read", &path, e)),
        };

        serde_json::from_str(&json).map_err(|e| {
            DomainError::storage(format!("Corrupt vote file: {}", e))
                .with_detail("path", path.display().to_string())
        })
    }

    async fn store(&self, dataset: &DatasetId, votes: &VoteFile) -> Result<(), DomainError> {
        fs::create_dir_all(&self.base_path)
            .await
            .map_err(|e| io_error("create", &self.base_path, e))?;

        let json = serde_json::to_string_pretty(votes)
            .map_err(|e| DomainError::storage(format!("Failed to serialize votes: {}", e)))?;

        // Write-then-rename so readers never see a half-written file.
        let path = self.dataset_file(dataset);
        let tmp = path.with_extension(format!("{}.tmp", Uuid::new_v4().simple()));
        fs::write(&tmp, json)
            .await
            .map_err(|e| io_error("write", &tmp, e))?;
        fs::rename(&tmp, &path)
            .await
            .map_err(|e| io_error("rename", &path, e))
    }
}

fn io_error(action: &str, path: &Path, err: std::io::Error) -> DomainError {
    DomainError::storage(format!("Failed to {} vote file: {}", action, err))
        .with_detail("path", path.display().to_string())
}

#[async_trait]
impl VoteRepository for FileVoteRepository {
    async fn upsert(&self, vote: &Vote) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut votes = self.load(&vote.dataset).await?;
        votes.insert(vote.voter.as_str().to_string(), vote.clone());
        self.store(&vote.dataset, &votes).await?;

        tracing::debug!(
            voter = %vote.voter,
            dataset = %vote.dataset,
            total = votes.len(),
            "Vote written to file"
        );
        Ok(())
    }

    async fn find(
        &self,
        voter: &VoterName,
        dataset: &DatasetId,
    ) -> Result<Option<Vote>, DomainError> {
        let mut votes = self.load(dataset).await?;
        Ok(votes.remove(voter.as_str()))
    }

    async fn find_by_dataset(&self, dataset: &DatasetId) -> Result<Vec<Vote>, DomainError> {
        let mut votes: Vec<Vote> = self.load(dataset).await?.into_values().collect();
        votes.sort_by_key(|v| v.submitted_at);
        Ok(votes)
    }

    async fn count_by_dataset(&self, dataset: &DatasetId) -> Result<usize, DomainError> {
        Ok(self.load(dataset).await?.len())
    }

    async fn delete(&self, voter: &VoterName, dataset: &DatasetId) -> Result<(), DomainError> {
        let _guard = self.write_lock.lock().await;

        let mut votes = self.load(dataset).await?;
        if votes.remove(voter.as_str()).is_none() {
            return Err(DomainError::new(ErrorCode::VoteNotFound, "Vote not found")
                .with_detail("voter", voter.as_str())
                .with_detail("dataset", dataset.as_str()));
        }
        self.store(dataset, &votes).await
    }
}
