//! Demo entry point: ranks the sample venues with whatever votes the
//! configured storage holds.

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*};

use ahp_advisor::adapters::{FileVoteRepository, InMemoryVoteRepository, PostgresVoteRepository};
use ahp_advisor::application::{
    DatasetSource, GetResultsHandler, GetResultsQuery, PrepareDatasetCommand, PrepareDatasetHandler,
};
use ahp_advisor::config::{AppConfig, LoggingConfig, StorageBackend, StorageConfig, ValidationError};
use ahp_advisor::domain::dataset::{demo_dataset, DatasetSchema, MacroCriteriaMap};
use ahp_advisor::domain::foundation::{DomainError, ErrorCode};
use ahp_advisor::ports::VoteRepository;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load_validated()?;
    init_tracing(&config.logging)?;

    let repository = build_repository(&config.storage).await?;
    let settings = config.analysis.settings();

    let prepared = PrepareDatasetHandler::with_settings(DatasetSchema::default(), settings.clone())
        .handle(PrepareDatasetCommand {
            source: DatasetSource::Table(demo_dataset()),
        })
        .await?;

    let results = GetResultsHandler::with_settings(repository, MacroCriteriaMap::default(), settings)
        .handle(GetResultsQuery {
            dataset: prepared.id,
            table: prepared.table,
        })
        .await?;

    info!(
        dataset = %results.dataset,
        votes = results.vote_count,
        cr = results.group_consistency_ratio,
        consistent = results.group_consistent,
        weights = ?results.group_weights,
        "Group consensus"
    );
    for (rank, entry) in results.ranking.iter().enumerate() {
        info!(
            rank = rank + 1,
            alternative = %entry.alternative,
            score = entry.score,
            "Ranking"
        );
    }
    if results.ranking.is_empty() {
        info!("No alternative has complete data for ranking");
    }

    Ok(())
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), ValidationError> {
    let filter = logging.env_filter()?;
    let registry = tracing_subscriber::registry().with(filter);

    if logging.json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer().with_target(true)).init();
    }
    Ok(())
}

async fn build_repository(storage: &StorageConfig) -> Result<Arc<dyn VoteRepository>, DomainError> {
    match storage.backend {
        StorageBackend::Memory => Ok(Arc::new(InMemoryVoteRepository::new())),
        StorageBackend::File => Ok(Arc::new(FileVoteRepository::new(&storage.path))),
        StorageBackend::Postgres => {
            let pool = PgPoolOptions::new()
                .max_connections(storage.max_connections)
                .acquire_timeout(storage.acquire_timeout())
                .connect(&storage.database_url)
                .await
                .map_err(|e| {
                    DomainError::new(ErrorCode::DatabaseError, format!("Failed to connect: {}", e))
                })?;

            let repository = PostgresVoteRepository::new(pool);
            repository.init_schema().await?;
            Ok(Arc::new(repository))
        }
    }
}
