//! Integration tests for the vote → consensus → ranking flow.
//!
//! Runs the application handlers against the in-memory and file adapters.

use serde_json::{json, Map, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tempfile::TempDir;

use ahp_advisor::adapters::{FileVoteRepository, InMemoryVoteRepository};
use ahp_advisor::application::{
    DatasetSource, GetResultsHandler, GetResultsQuery, PairJudgment, PrepareDatasetCommand,
    PrepareDatasetHandler, SubmitVoteCommand, SubmitVoteHandler,
};
use ahp_advisor::domain::ahp::{
    ConsistencyEvaluator, CriteriaSet, Judgments, PairwiseMatrix, Preference, SaatyIntensity,
};
use ahp_advisor::domain::dataset::{
    demo_dataset, DatasetSchema, MacroCriteriaMap, RatingsTable, CIBO_E_BEVANDE, COMODITA,
    RAPPORTO_QUALITA_PREZZO,
};
use ahp_advisor::domain::foundation::DatasetId;
use ahp_advisor::domain::scoring::Ranker;
use ahp_advisor::ports::VoteRepository;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn judgments(sliders: [i8; 3]) -> Vec<PairJudgment> {
    vec![
        PairJudgment::new(COMODITA, CIBO_E_BEVANDE, sliders[0]),
        PairJudgment::new(COMODITA, RAPPORTO_QUALITA_PREZZO, sliders[1]),
        PairJudgment::new(CIBO_E_BEVANDE, RAPPORTO_QUALITA_PREZZO, sliders[2]),
    ]
}

async fn submit(
    handler: &SubmitVoteHandler,
    voter: &str,
    dataset: &DatasetId,
    sliders: [i8; 3],
) {
    handler
        .handle(SubmitVoteCommand {
            voter: voter.to_string(),
            dataset: dataset.clone(),
            judgments: judgments(sliders),
        })
        .await
        .unwrap();
}

fn demo_records() -> Vec<Map<String, Value>> {
    demo_dataset()
        .rows
        .iter()
        .map(|row| {
            let mut record = Map::new();
            record.insert("LOCALI".to_string(), json!(row.alternative));
            for (column, rating) in &row.ratings {
                // Ratings arrive as text from spreadsheets.
                record.insert(column.clone(), json!(rating.map(|r| r.to_string())));
            }
            record
        })
        .collect()
}

// =============================================================================
// Scenarios
// =============================================================================

#[test]
fn worked_example_matrix_and_weights() {
    let criteria = CriteriaSet::new(["A", "B", "C"]).unwrap();
    let judgments = Judgments::new()
        .compare("A", "B", 3.0)
        .compare("A", "C", 5.0)
        .compare("B", "C", 2.0);

    let m = PairwiseMatrix::build(&criteria, &judgments).unwrap();
    assert_eq!(m.to_rows()[0], vec![1.0, 3.0, 5.0]);
    assert!((m.get(1, 0) - 1.0 / 3.0).abs() < 1e-12);
    assert!((m.get(2, 1) - 0.5).abs() < 1e-12);

    let weights = m.weights();
    assert!((weights.sum() - 1.0).abs() < 1e-9);
    assert!(ConsistencyEvaluator::ratio(&m, &weights) >= 0.0);
}

#[test]
fn preferences_build_the_same_matrix_as_raw_intensities() {
    let criteria = CriteriaSet::new(["A", "B", "C"]).unwrap();
    let from_preferences = Judgments::new()
        .prefer("A", "B", Preference::first(SaatyIntensity::Moderate))
        .prefer("A", "C", Preference::second(SaatyIntensity::Strong))
        .prefer("B", "C", Preference::equal());
    let raw = Judgments::new()
        .compare("A", "B", 3.0)
        .compare("A", "C", 0.2)
        .compare("B", "C", 1.0);

    assert_eq!(
        PairwiseMatrix::build_strict(&criteria, &from_preferences).unwrap(),
        PairwiseMatrix::build_strict(&criteria, &raw).unwrap()
    );
}

#[test]
fn equal_weights_rank_all_four_demo_venues() {
    let map = MacroCriteriaMap::default();
    let weights: HashMap<String, f64> = map
        .criteria()
        .names()
        .iter()
        .map(|name| (name.clone(), 1.0 / 3.0))
        .collect();

    let ranking = Ranker::rank(&demo_dataset(), &map, &weights);
    assert_eq!(ranking.len(), 4);
    for pair in ranking.entries.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    // Best food and near-best comfort outweigh Enoteca's value for money.
    assert_eq!(ranking.recommended().unwrap().alternative, "Trattoria Luna");
    assert_eq!(ranking.entries[1].alternative, "Enoteca Centro");
    assert_eq!(ranking.entries[3].alternative, "Pub 9");
}

#[test]
fn alternative_with_a_missing_macro_group_is_not_ranked() {
    let mut table = demo_dataset();
    table.rows[1].ratings.insert("Qualità/Prezzo".to_string(), None);

    let map = MacroCriteriaMap::default();
    let weights: HashMap<String, f64> = map
        .criteria()
        .names()
        .iter()
        .map(|name| (name.clone(), 1.0))
        .collect();

    let ranking = Ranker::rank(&table, &map, &weights);
    assert_eq!(ranking.len(), 3);
    assert!(ranking.iter().all(|r| r.alternative != "Pub 9"));
}

#[test]
fn empty_dataset_ranks_nothing() {
    let ranking = Ranker::rank(
        &RatingsTable::empty(),
        &MacroCriteriaMap::default(),
        &HashMap::new(),
    );
    assert!(ranking.is_empty());
}

#[tokio::test]
async fn full_flow_with_in_memory_storage() {
    let repo = Arc::new(InMemoryVoteRepository::new());
    let map = MacroCriteriaMap::default();

    let prepared = PrepareDatasetHandler::new(DatasetSchema::default())
        .handle(PrepareDatasetCommand {
            source: DatasetSource::Records(demo_records()),
        })
        .await
        .unwrap();

    let voting = SubmitVoteHandler::new(repo.clone(), map.criteria().clone());
    submit(&voting, "Ada", &prepared.id, [2, 1, 0]).await;
    submit(&voting, "Bo", &prepared.id, [-1, 0, 1]).await;
    submit(&voting, "Cy", &prepared.id, [0, -2, -2]).await;
    // Resubmission replaces Ada's first vote.
    submit(&voting, "Ada", &prepared.id, [3, 2, 0]).await;

    let results = GetResultsHandler::new(repo.clone(), map)
        .handle(GetResultsQuery {
            dataset: prepared.id.clone(),
            table: prepared.table,
        })
        .await
        .unwrap();

    assert_eq!(results.vote_count, 3);
    assert_eq!(repo.count_by_dataset(&prepared.id).await.unwrap(), 3);
    let sum: f64 = results.group_weights.values().sum();
    assert!((sum - 1.0).abs() < 1e-9);
    assert_eq!(results.ranking.len(), 4);
    assert!(results.group_consistency_ratio >= 0.0);
}

#[tokio::test]
async fn file_storage_keeps_votes_between_runs() {
    let dir = TempDir::new().unwrap();
    let map = MacroCriteriaMap::default();
    let dataset = DatasetId::new("venues").unwrap();

    {
        let repo = Arc::new(FileVoteRepository::new(dir.path()));
        let voting = SubmitVoteHandler::new(repo, map.criteria().clone());
        submit(&voting, "Ada", &dataset, [0, -4, -4]).await;
        submit(&voting, "Bo", &dataset, [0, -3, -3]).await;
    }

    let repo = Arc::new(FileVoteRepository::new(dir.path()));
    let results = GetResultsHandler::new(repo, map)
        .handle(GetResultsQuery {
            dataset: dataset.clone(),
            table: demo_dataset(),
        })
        .await
        .unwrap();

    assert_eq!(results.vote_count, 2);
    assert!(results.group_weights[RAPPORTO_QUALITA_PREZZO] > 0.7);
    assert_eq!(
        results.ranking.recommended().unwrap().alternative,
        "Enoteca Centro"
    );
    assert!(dir.path().join("venues.json").exists());
}

#[tokio::test]
async fn concurrent_submissions_each_land_once() {
    let repo = Arc::new(InMemoryVoteRepository::new());
    let criteria = MacroCriteriaMap::default().criteria().clone();
    let handler = Arc::new(SubmitVoteHandler::new(repo.clone(), criteria));
    let dataset = DatasetId::new("venues").unwrap();

    let tasks: Vec<_> = (0..8)
        .map(|i| {
            let handler = handler.clone();
            let dataset = dataset.clone();
            tokio::spawn(async move {
                // Two submissions per voter name.
                submit(&handler, &format!("voter{}", i % 4), &dataset, [1, 1, 1]).await;
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    assert_eq!(repo.count_by_dataset(&dataset).await.unwrap(), 4);
}
