//! SubmitVoteHandler - Command handler turning slider judgments into a stored vote.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::application::AnalysisSettings;
use crate::domain::ahp::{
    ConsistencyEvaluator, ConsistencyReport, CriteriaSet, Judgments, PairwiseMatrix, Preference,
};
use crate::domain::foundation::{DatasetId, DomainError, VoteId, VoterName};
use crate::domain::voting::Vote;
use crate::ports::VoteRepository;

/// One slider answer: `first` vs `second` at a position in -4..=4.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairJudgment {
    pub first: String,
    pub second: String,
    pub slider: i8,
}

impl PairJudgment {
    pub fn new(first: impl Into<String>, second: impl Into<String>, slider: i8) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            slider,
        }
    }
}

/// Command to submit (or resubmit) a voter's judgments on a dataset.
#[derive(Debug, Clone)]
pub struct SubmitVoteCommand {
    pub voter: String,
    pub dataset: DatasetId,
    pub judgments: Vec<PairJudgment>,
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct VoteReceipt {
    pub vote_id: VoteId,
    pub weights: HashMap<String, f64>,
    pub consistency: ConsistencyReport,
    /// False when the CR reached the configured threshold.
    pub consistent: bool,
}

/// Handler for vote submission.
pub struct SubmitVoteHandler {
    repository: Arc<dyn VoteRepository>,
    criteria: CriteriaSet,
    settings: AnalysisSettings,
}

impl SubmitVoteHandler {
    pub fn new(repository: Arc<dyn VoteRepository>, criteria: CriteriaSet) -> Self {
        Self::with_settings(repository, criteria, AnalysisSettings::default())
    }

    pub fn with_settings(
        repository: Arc<dyn VoteRepository>,
        criteria: CriteriaSet,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            repository,
            criteria,
            settings,
        }
    }

    /// Pairs the voter must judge, in presentation order.
    pub fn pairs(&self) -> Vec<(&str, &str)> {
        self.criteria.pairs()
    }

    pub async fn handle(&self, cmd: SubmitVoteCommand) -> Result<VoteReceipt, DomainError> {
        // 1. Validate voter
        let voter = VoterName::new(cmd.voter)?;

        // 2. Slider positions to judgments
        let mut judgments = Judgments::new();
        for pair in &cmd.judgments {
            let preference = Preference::from_slider(pair.slider)?;
            judgments.insert(pair.first.clone(), pair.second.clone(), preference.value());
        }

        // 3. Build matrix under the configured completeness policy
        let matrix = if self.settings.require_complete_judgments {
            PairwiseMatrix::build_strict(&self.criteria, &judgments)?
        } else {
            PairwiseMatrix::build(&self.criteria, &judgments)?
        };

        // 4. Derive weights and consistency
        let vote = Vote::cast(voter, cmd.dataset, &self.criteria, matrix)?;
        let consistency = ConsistencyEvaluator::evaluate(&vote.matrix, &vote.matrix.weights());
        let consistent = vote.is_consistent(self.settings.consistency_threshold);

        if !consistent {
            warn!(
                voter = %vote.voter,
                dataset = %vote.dataset,
                cr = consistency.ratio,
                threshold = self.settings.consistency_threshold,
                "Inconsistent judgments; vote stored anyway"
            );
        }

        // 5. Persist, replacing any earlier vote by this voter
        self.repository.upsert(&vote).await?;

        info!(
            vote_id = %vote.id,
            voter = %vote.voter,
            dataset = %vote.dataset,
            cr = consistency.ratio,
            "Vote recorded"
        );

        Ok(VoteReceipt {
            vote_id: vote.id,
            weights: vote.weights,
            consistency,
            consistent,
        })
    }
}
