//! Domain layer containing the decision math and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (IDs, timestamps, errors)
//! - `ahp` - Pairwise matrices, weights, consistency and aggregation
//! - `dataset` - Ratings table, macro-criteria mapping, schema checks
//! - `scoring` - Macro-scores, normalization and ranking
//! - `voting` - Votes and group consensus

pub mod ahp;
pub mod dataset;
pub mod foundation;
pub mod scoring;
pub mod voting;
