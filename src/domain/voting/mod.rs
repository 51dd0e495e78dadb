//! Voting Module - Individual votes and the group consensus built from them.
//!
//! # Components
//!
//! - `Vote` - A voter's matrix, weights and CR for one dataset
//! - `GroupConsensus` - Aggregated weights across every vote

mod consensus;
mod vote;

pub use consensus::GroupConsensus;
pub use vote::Vote;
