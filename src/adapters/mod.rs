//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - In-memory and JSON file vote repositories
//! - `postgres` - PostgreSQL vote repository

pub mod postgres;
pub mod storage;

pub use postgres::PostgresVoteRepository;
pub use storage::{FileVoteRepository, InMemoryVoteRepository};
