//! AHP Module - Pairwise comparisons, priority weights and consistency.
//!
//! # Components
//!
//! - `CriteriaSet` - Ordered criteria defining matrix indices
//! - `SaatyIntensity` / `Preference` - Fundamental scale judgments
//! - `PairwiseMatrix` - Positive reciprocal comparison matrix
//! - `WeightSolver` - Geometric-mean priority derivation
//! - `ConsistencyEvaluator` - Consistency ratio (CR)
//! - `JudgmentAggregator` - Element-wise geometric mean across voters
//!
//! # Design Philosophy
//!
//! Like the scoring services, everything here is pure and synchronous: values
//! in, new values out, no shared state.

mod consistency;
mod criteria;
mod errors;
mod judgment_aggregator;
mod pairwise_matrix;
mod saaty;
mod weight_solver;

pub use consistency::{
    random_index, ConsistencyEvaluator, ConsistencyReport, CONSISTENCY_THRESHOLD, RANDOM_INDEX,
};
pub use criteria::CriteriaSet;
pub use errors::AhpError;
pub use judgment_aggregator::JudgmentAggregator;
pub use pairwise_matrix::{Judgment, Judgments, PairwiseMatrix, RECIPROCAL_TOLERANCE};
pub use saaty::{Favored, Preference, SaatyIntensity};
pub use weight_solver::{WeightSolver, WeightVector};
