//! GetResultsHandler - Query handler for group weights and the ranking.

use std::collections::HashMap;
use std::sync::Arc;

use serde::Serialize;
use tracing::debug;

use crate::application::AnalysisSettings;
use crate::domain::dataset::{MacroCriteriaMap, RatingsTable};
use crate::domain::foundation::{DatasetId, DomainError};
use crate::domain::scoring::{MacroScoreAggregator, MacroScoreTable, Normalizer, Ranker, Ranking};
use crate::domain::voting::GroupConsensus;
use crate::ports::VoteRepository;

/// Query for the current results on a dataset.
#[derive(Debug, Clone)]
pub struct GetResultsQuery {
    pub dataset: DatasetId,
    pub table: RatingsTable,
}

/// Group weights, consistency and ranking for a dataset.
#[derive(Debug, Clone, Serialize)]
pub struct ResultsView {
    pub dataset: DatasetId,
    pub vote_count: usize,
    pub group_weights: HashMap<String, f64>,
    pub group_consistency_ratio: f64,
    pub group_consistent: bool,
    pub ranking: Ranking,
    pub normalized_scores: MacroScoreTable,
}

/// Handler computing results from every stored vote.
pub struct GetResultsHandler {
    repository: Arc<dyn VoteRepository>,
    macro_map: MacroCriteriaMap,
    settings: AnalysisSettings,
}

impl GetResultsHandler {
    pub fn new(repository: Arc<dyn VoteRepository>, macro_map: MacroCriteriaMap) -> Self {
        Self::with_settings(repository, macro_map, AnalysisSettings::default())
    }

    pub fn with_settings(
        repository: Arc<dyn VoteRepository>,
        macro_map: MacroCriteriaMap,
        settings: AnalysisSettings,
    ) -> Self {
        Self {
            repository,
            macro_map,
            settings,
        }
    }

    /// Aggregates all votes and ranks the table's alternatives.
    ///
    /// With no votes the group weights are equal.
    pub async fn handle(&self, query: GetResultsQuery) -> Result<ResultsView, DomainError> {
        let votes = self.repository.find_by_dataset(&query.dataset).await?;
        let consensus = GroupConsensus::from_votes(self.macro_map.criteria(), &votes)?;
        let group_weights = consensus.weight_map();

        let scores = MacroScoreAggregator::compute(&query.table, &self.macro_map);
        let normalized_scores = Normalizer::min_max(&scores);
        let ranking = Ranker::rank_normalized(&normalized_scores, &group_weights);

        debug!(
            dataset = %query.dataset,
            votes = consensus.vote_count,
            cr = consensus.consistency_ratio,
            ranked = ranking.len(),
            "Results computed"
        );

        Ok(ResultsView {
            dataset: query.dataset,
            vote_count: consensus.vote_count,
            group_consistent: consensus.consistency_ratio < self.settings.consistency_threshold,
            group_consistency_ratio: consensus.consistency_ratio,
            group_weights,
            ranking,
            normalized_scores,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryVoteRepository;
    use crate::application::handlers::voting::{PairJudgment, SubmitVoteCommand, SubmitVoteHandler};
    use crate::domain::dataset::demo_dataset;

    fn dataset() -> DatasetId {
        DatasetId::new("demo").unwrap()
    }

    fn query() -> GetResultsQuery {
        GetResultsQuery {
            dataset: dataset(),
            table: demo_dataset(),
        }
    }

    async fn vote(repo: Arc<InMemoryVoteRepository>, voter: &str, sliders: [i8; 3]) {
        let map = MacroCriteriaMap::default();
        let names = map.criteria().names().to_vec();
        let submit = SubmitVoteHandler::new(repo, map.criteria().clone());
        submit
            .handle(SubmitVoteCommand {
                voter: voter.to_string(),
                dataset: dataset(),
                judgments: vec![
                    PairJudgment::new(&names[0], &names[1], sliders[0]),
                    PairJudgment::new(&names[0], &names[2], sliders[1]),
                    PairJudgment::new(&names[1], &names[2], sliders[2]),
                ],
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn no_votes_ranks_with_equal_weights() {
        let repo = Arc::new(InMemoryVoteRepository::new());
        let handler = GetResultsHandler::new(repo, MacroCriteriaMap::default());

        let view = handler.handle(query()).await.unwrap();
        assert_eq!(view.vote_count, 0);
        assert_eq!(view.group_consistency_ratio, 0.0);
        assert!(view.group_consistent);
        for w in view.group_weights.values() {
            assert!((w - 1.0 / 3.0).abs() < 1e-12);
        }
        assert_eq!(view.ranking.len(), 4);
    }

    #[tokio::test]
    async fn ranking_follows_group_weights() {
        let repo = Arc::new(InMemoryVoteRepository::new());
        // Both voters: value for money dominates.
        vote(repo.clone(), "Ada", [0, -4, -4]).await;
        vote(repo.clone(), "Bo", [0, -3, -3]).await;

        let handler = GetResultsHandler::new(repo, MacroCriteriaMap::default());
        let view = handler.handle(query()).await.unwrap();

        assert_eq!(view.vote_count, 2);
        // Enoteca Centro has the best value-for-money rating in the demo data.
        assert_eq!(view.ranking.recommended().unwrap().alternative, "Enoteca Centro");
        let sum: f64 = view.group_weights.values().sum();
        assert!((sum - 1.0).abs() < 1e-9);
    }

    #[tokio::test]
    async fn other_datasets_do_not_leak_into_results() {
        let repo = Arc::new(InMemoryVoteRepository::new());
        vote(repo.clone(), "Ada", [4, 4, 0]).await;

        let handler = GetResultsHandler::new(repo, MacroCriteriaMap::default());
        let view = handler
            .handle(GetResultsQuery {
                dataset: DatasetId::new("other").unwrap(),
                table: demo_dataset(),
            })
            .await
            .unwrap();
        assert_eq!(view.vote_count, 0);
    }

    #[tokio::test]
    async fn normalized_scores_cover_every_alternative() {
        let repo = Arc::new(InMemoryVoteRepository::new());
        let handler = GetResultsHandler::new(repo, MacroCriteriaMap::default());

        let view = handler.handle(query()).await.unwrap();
        assert_eq!(view.normalized_scores.len(), 4);
        for row in &view.normalized_scores.rows {
            for score in row.scores.iter().flatten() {
                assert!((0.0..=1.0).contains(score));
            }
        }
    }
}
