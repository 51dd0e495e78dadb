//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers (write) from query handlers (read).

pub mod handlers;
mod settings;

pub use handlers::{
    // Dataset intake
    DatasetSource, PrepareDatasetCommand, PrepareDatasetHandler, PreparedDataset,
    // Voting
    GetResultsHandler, GetResultsQuery, PairJudgment, ResultsView, SubmitVoteCommand,
    SubmitVoteHandler, VoteReceipt,
};
pub use settings::AnalysisSettings;
