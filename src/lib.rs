//! AHP Advisor - Group decision support with the Analytic Hierarchy Process
//!
//! Voters compare macro-criteria pairwise; their judgments become weight
//! vectors, are checked for consistency, aggregated into a group consensus
//! and used to rank the alternatives of a ratings dataset.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
