//! Dataset schema checks: required columns and rating range.

use serde::{Deserialize, Serialize};

use super::{MacroCriteriaMap, RatingsTable};

/// Default lower bound of the rating scale.
pub const DEFAULT_RATING_MIN: f64 = 1.0;
/// Default upper bound of the rating scale.
pub const DEFAULT_RATING_MAX: f64 = 5.0;

/// Columns a ratings table must carry to be ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSchema {
    pub identity_column: String,
    pub rating_columns: Vec<String>,
}

impl DatasetSchema {
    /// Schema requiring every column named by a macro-criteria map.
    pub fn for_macro_map(identity_column: impl Into<String>, map: &MacroCriteriaMap) -> Self {
        Self {
            identity_column: identity_column.into(),
            rating_columns: map.all_columns().into_iter().map(String::from).collect(),
        }
    }

    /// Identity column followed by rating columns.
    pub fn required_columns(&self) -> Vec<&str> {
        std::iter::once(self.identity_column.as_str())
            .chain(self.rating_columns.iter().map(String::as_str))
            .collect()
    }

    /// Required columns absent from the table (empty when valid).
    pub fn missing_columns(&self, table: &RatingsTable) -> Vec<String> {
        self.required_columns()
            .into_iter()
            .enumerate()
            .filter(|(i, column)| match i {
                0 => table.identity_column != *column,
                _ => !table.has_column(column),
            })
            .map(|(_, column)| column.to_string())
            .collect()
    }

    /// Required rating columns holding any value outside `[min, max]`.
    ///
    /// Missing ratings are ignored.
    pub fn out_of_range_columns(&self, table: &RatingsTable, min: f64, max: f64) -> Vec<String> {
        self.rating_columns
            .iter()
            .filter(|column| {
                table
                    .rows
                    .iter()
                    .filter_map(|row| row.rating(column))
                    .any(|v| v < min || v > max)
            })
            .cloned()
            .collect()
    }
}

impl Default for DatasetSchema {
    fn default() -> Self {
        Self::for_macro_map(super::DEFAULT_IDENTITY_COLUMN, &MacroCriteriaMap::default())
    }
}
