//! Scoring Module - From raw ratings to a ranked list of alternatives.
//!
//! # Components
//!
//! - `MacroScoreAggregator` - Sub-criterion ratings → macro-criterion scores
//! - `Normalizer` - Per-column min-max rescale to `[0, 1]`
//! - `Ranker` - Weighted sum and descending sort
//!
//! Undefined scores are `None` end to end. An alternative with any undefined
//! macro-score is left out of the ranking, never imputed.

mod macro_scores;
mod normalizer;
mod ranker;

pub use macro_scores::{MacroScoreAggregator, MacroScoreRow, MacroScoreTable};
pub use normalizer::{Normalizer, DEGENERATE_COLUMN_VALUE};
pub use ranker::{RankedAlternative, Ranker, Ranking};
