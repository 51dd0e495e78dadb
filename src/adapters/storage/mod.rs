//! Storage Adapters
//!
//! Implementations of the VoteRepository port that need no database.
//!
//! ## Available Adapters
//!
//! - **FileVoteRepository** - One JSON file per dataset on disk
//! - **InMemoryVoteRepository** - Votes in memory (testing/development)

mod file_vote_repository;
mod in_memory_vote_repository;

pub use file_vote_repository::FileVoteRepository;
pub use in_memory_vote_repository::InMemoryVoteRepository;
