//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresVoteRepository` - Votes table with (voter, dataset) upsert

mod vote_repository;

pub use vote_repository::PostgresVoteRepository;
