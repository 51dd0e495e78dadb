//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! ## Persistence Ports
//!
//! - `VoteRepository` - Upsert and lookup of votes per dataset

mod vote_repository;

pub use vote_repository::VoteRepository;
