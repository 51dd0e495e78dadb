//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod dataset;
pub mod voting;

pub use dataset::{DatasetSource, PrepareDatasetCommand, PrepareDatasetHandler, PreparedDataset};
pub use voting::{
    GetResultsHandler, GetResultsQuery, PairJudgment, ResultsView, SubmitVoteCommand,
    SubmitVoteHandler, VoteReceipt,
};
