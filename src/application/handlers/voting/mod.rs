//! Voting handlers - submit judgments, read group results.

mod get_results;
mod submit_vote;

pub use get_results::{GetResultsHandler, GetResultsQuery, ResultsView};
pub use submit_vote::{PairJudgment, SubmitVoteCommand, SubmitVoteHandler, VoteReceipt};
