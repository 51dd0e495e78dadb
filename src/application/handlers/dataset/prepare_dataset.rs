//! PrepareDatasetHandler - Validates an uploaded ratings table and derives its id.

use std::path::PathBuf;

use serde_json::{Map, Value};
use tokio::fs;
use tracing::{info, warn};

use crate::application::AnalysisSettings;
use crate::domain::dataset::{fingerprint, DatasetSchema, RatingsTable};
use crate::domain::foundation::{DatasetId, DomainError, ErrorCode};

/// Where the ratings come from.
#[derive(Debug, Clone)]
pub enum DatasetSource {
    /// An already built table.
    Table(RatingsTable),
    /// Loosely typed records, one object per row.
    Records(Vec<Map<String, Value>>),
    /// A JSON file holding an array of such records.
    JsonFile(PathBuf),
}

/// Command to validate and register a dataset.
#[derive(Debug, Clone)]
pub struct PrepareDatasetCommand {
    pub source: DatasetSource,
}

/// A dataset ready for voting and ranking.
#[derive(Debug, Clone)]
pub struct PreparedDataset {
    pub id: DatasetId,
    pub table: RatingsTable,
    /// Columns holding ratings outside the configured range.
    pub range_issues: Vec<String>,
}

/// Handler for dataset intake.
pub struct PrepareDatasetHandler {
    schema: DatasetSchema,
    settings: AnalysisSettings,
}

impl PrepareDatasetHandler {
    pub fn new(schema: DatasetSchema) -> Self {
        Self::with_settings(schema, AnalysisSettings::default())
    }

    pub fn with_settings(schema: DatasetSchema, settings: AnalysisSettings) -> Self {
        Self { schema, settings }
    }

    /// Loads the source, checks required columns and rating ranges, and
    /// fingerprints the content.
    ///
    /// # Errors
    ///
    /// - `ValidationFailed` if required columns are missing (listed in the
    ///   `missing` detail)
    /// - `StorageError` if a source file cannot be read
    /// - `InvalidFormat` if a source file is not a JSON array of objects
    pub async fn handle(&self, cmd: PrepareDatasetCommand) -> Result<PreparedDataset, DomainError> {
        let table = self.load(cmd.source).await?;

        let missing = self.schema.missing_columns(&table);
        if !missing.is_empty() {
            return Err(DomainError::new(
                ErrorCode::ValidationFailed,
                format!("Missing columns: {}", missing.join(", ")),
            )
            .with_detail("missing", missing.join(",")));
        }

        let range_issues = self.schema.out_of_range_columns(
            &table,
            self.settings.rating_min,
            self.settings.rating_max,
        );
        if !range_issues.is_empty() {
            warn!(
                columns = ?range_issues,
                min = self.settings.rating_min,
                max = self.settings.rating_max,
                "Ratings outside the expected range"
            );
        }

        let id = fingerprint(&table, &self.schema);
        info!(dataset = %id, rows = table.row_count(), "Dataset prepared");

        Ok(PreparedDataset {
            id,
            table,
            range_issues,
        })
    }

    async fn load(&self, source: DatasetSource) -> Result<RatingsTable, DomainError> {
        match source {
            DatasetSource::Table(table) => Ok(table),
            DatasetSource::Records(records) => {
                Ok(RatingsTable::from_records(&self.schema.identity_column, &records)?)
            }
            DatasetSource::JsonFile(path) => {
                let json = fs::read_to_string(&path).await.map_err(|e| {
                    DomainError::storage(format!("Failed to read dataset: {}", e))
                        .with_detail("path", path.display().to_string())
                })?;
                let records: Vec<Map<String, Value>> =
                    serde_json::from_str(&json).map_err(|e| {
                        DomainError::new(
                            ErrorCode::InvalidFormat,
                            format!("Dataset is not an array of records: {}", e),
                        )
                    })?;
                Ok(RatingsTable::from_records(&self.schema.identity_column, &records)?)
            }
        }
    }
}
