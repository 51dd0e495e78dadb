//! PostgreSQL implementation of VoteRepository.
//!
//! One row per (voter, dataset). The matrix and weight map are stored as
//! JSON text so the table stays readable from any SQL client.

use crate::domain::ahp::PairwiseMatrix;
use crate::domain::foundation::{
    DatasetId, DomainError, ErrorCode, Timestamp, VoteId, VoterName,
};
use crate::domain::voting::Vote;
use crate::ports::VoteRepository;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::collections::HashMap;
use uuid::Uuid;

/// PostgreSQL implementation of the VoteRepository port.
pub struct PostgresVoteRepository {
    pool: PgPool,
}

impl PostgresVoteRepository {
    /// Creates a new PostgresVoteRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Creates the `votes` table if it does not exist yet.
    pub async fn init_schema(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS votes (
                id UUID PRIMARY KEY,
                user_name TEXT NOT NULL,
                dataset_hash TEXT NOT NULL,
                matrix_json TEXT NOT NULL,
                weights_json TEXT NOT NULL,
                consistency_ratio DOUBLE PRECISION NOT NULL,
                submitted_at TIMESTAMPTZ NOT NULL,
                UNIQUE (user_name, dataset_hash)
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("create votes table", e))?;

        Ok(())
    }
}

/// Database row representation of a vote.
#[derive(Debug, sqlx::FromRow)]
struct VoteRow {
    id: Uuid,
    user_name: String,
    dataset_hash: String,
    matrix_json: String,
    weights_json: String,
    consistency_ratio: f64,
    submitted_at: DateTime<Utc>,
}

impl TryFrom<VoteRow> for Vote {
    type Error = DomainError;

    fn try_from(row: VoteRow) -> Result<Self, Self::Error> {
        let matrix: PairwiseMatrix = serde_json::from_str(&row.matrix_json).map_err(|e| {
            DomainError::new(ErrorCode::DatabaseError, format!("Invalid matrix_json: {}", e))
        })?;
        let weights: HashMap<String, f64> =
            serde_json::from_str(&row.weights_json).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid weights_json: {}", e))
            })?;

        Ok(Vote {
            id: VoteId::from_uuid(row.id),
            voter: VoterName::new(row.user_name).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid user_name: {}", e))
            })?,
            dataset: DatasetId::new(row.dataset_hash).map_err(|e| {
                DomainError::new(ErrorCode::DatabaseError, format!("Invalid dataset_hash: {}", e))
            })?,
            matrix,
            weights,
            consistency_ratio: row.consistency_ratio,
            submitted_at: Timestamp::from_datetime(row.submitted_at),
        })
    }
}

fn db_error(action: &str, e: sqlx::Error) -> DomainError {
    DomainError::new(ErrorCode::DatabaseError, format!("Failed to {}: {}", action, e))
}

fn to_json<T: serde::Serialize>(value: &T, field: &str) -> Result<String, DomainError> {
    serde_json::to_string(value).map_err(|e| {
        DomainError::new(ErrorCode::InternalError, format!("Failed to encode {}: {}", field, e))
    })
}

#[async_trait]
impl VoteRepository for PostgresVoteRepository {
    async fn upsert(&self, vote: &Vote) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            INSERT INTO votes (
                id, user_name, dataset_hash, matrix_json, weights_json,
                consistency_ratio, submitted_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (user_name, dataset_hash) DO UPDATE SET
                id = EXCLUDED.id,
                matrix_json = EXCLUDED.matrix_json,
                weights_json = EXCLUDED.weights_json,
                consistency_ratio = EXCLUDED.consistency_ratio,
                submitted_at = EXCLUDED.submitted_at
            "#,
        )
        .bind(vote.id.as_uuid())
        .bind(vote.voter.as_str())
        .bind(vote.dataset.as_str())
        .bind(to_json(&vote.matrix, "matrix")?)
        .bind(to_json(&vote.weights, "weights")?)
        .bind(vote.consistency_ratio)
        .bind(vote.submitted_at.as_datetime())
        .execute(&self.pool)
        .await
        .map_err(|e| db_error("save vote", e))?;

        Ok(())
    }

    async fn find(
        &self,
        voter: &VoterName,
        dataset: &DatasetId,
    ) -> Result<Option<Vote>, DomainError> {
        let row: Option<VoteRow> = sqlx::query_as(
            r#"
            SELECT id, user_name, dataset_hash, matrix_json, weights_json,
                   consistency_ratio, submitted_at
            FROM votes
            WHERE user_name = $1 AND dataset_hash = $2
            "#,
        )
        .bind(voter.as_str())
        .bind(dataset.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| db_error("fetch vote", e))?;

        row.map(Vote::try_from).transpose()
    }

    async fn find_by_dataset(&self, dataset: &DatasetId) -> Result<Vec<Vote>, DomainError> {
        let rows: Vec<VoteRow> = sqlx::query_as(
            r#"
            SELECT id, user_name, dataset_hash, matrix_json, weights_json,
                   consistency_ratio, submitted_at
            FROM votes
            WHERE dataset_hash = $1
            ORDER BY submitted_at ASC
            "#,
        )
        .bind(dataset.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| db_error("fetch votes", e))?;

        rows.into_iter().map(Vote::try_from).collect()
    }

    async fn count_by_dataset(&self, dataset: &DatasetId) -> Result<usize, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM votes WHERE dataset_hash = $1")
            .bind(dataset.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| db_error("count votes", e))?;

        Ok(count.max(0) as usize)
    }

    async fn delete(&self, voter: &VoterName, dataset: &DatasetId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM votes WHERE user_name = $1 AND dataset_hash = $2")
            .bind(voter.as_str())
            .bind(dataset.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| db_error("delete vote", e))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::new(ErrorCode::VoteNotFound, "Vote not found")
                .with_detail("voter", voter.as_str())
                .with_detail("dataset", dataset.as_str()));
        }

        Ok(())
    }
}
