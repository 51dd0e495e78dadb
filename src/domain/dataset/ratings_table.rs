//! Ratings table - alternatives × sub-criterion ratings, missing values allowed.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

use crate::domain::foundation::ValidationError;

/// Name of the identity column in the default venue dataset.
pub const DEFAULT_IDENTITY_COLUMN: &str = "LOCALI";

/// One dataset row: an alternative and its (possibly missing) ratings.
///
/// Several rows may share an alternative name; they are averaged when
/// macro-scores are computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternativeRow {
    pub alternative: String,
    pub ratings: HashMap<String, Option<f64>>,
}

impl AlternativeRow {
    /// Creates a row with no ratings.
    pub fn new(alternative: impl Into<String>) -> Self {
        Self {
            alternative: alternative.into(),
            ratings: HashMap::new(),
        }
    }

    /// Rating in `column`; absent columns and NaN read as missing.
    pub fn rating(&self, column: &str) -> Option<f64> {
        self.ratings
            .get(column)
            .copied()
            .flatten()
            .filter(|v| !v.is_nan())
    }
}

/// Tabular dataset of alternatives and their sub-criterion ratings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingsTable {
    /// Name of the column holding alternative identity.
    pub identity_column: String,
    /// Rating columns in first-seen order.
    pub columns: Vec<String>,
    /// Rows in dataset order.
    pub rows: Vec<AlternativeRow>,
}

impl Default for RatingsTable {
    fn default() -> Self {
        Self {
            identity_column: DEFAULT_IDENTITY_COLUMN.to_string(),
            columns: Vec::new(),
            rows: Vec::new(),
        }
    }
}

impl RatingsTable {
    /// Creates an empty table with the default identity column.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a builder for constructing a ratings table.
    pub fn builder() -> RatingsTableBuilder {
        RatingsTableBuilder::new()
    }

    /// Builds a table from loosely-typed records, coercing ratings to numbers.
    ///
    /// Numbers are kept, numeric strings are parsed, anything else (null,
    /// booleans, free text) becomes a missing rating.
    ///
    /// # Errors
    /// - `EmptyField` if a record has no usable identity value
    pub fn from_records(
        identity_column: impl Into<String>,
        records: &[Map<String, Value>],
    ) -> Result<Self, ValidationError> {
        let identity_column = identity_column.into();
        let mut builder = RatingsTableBuilder::new().identity_column(identity_column.clone());

        for record in records {
            let alternative = match record.get(&identity_column) {
                Some(Value::String(s)) if !s.trim().is_empty() => s.trim().to_string(),
                Some(Value::Number(n)) => n.to_string(),
                _ => return Err(ValidationError::empty_field(identity_column)),
            };

            let ratings: Vec<(String, Option<f64>)> = record
                .iter()
                .filter(|(key, _)| **key != identity_column)
                .map(|(key, value)| (key.clone(), coerce_numeric(value)))
                .collect();

            builder = builder.row(alternative, ratings);
        }

        Ok(builder.build())
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has a rating column with this name.
    pub fn has_column(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    /// Distinct alternative names in first-appearance order.
    pub fn alternatives(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for row in &self.rows {
            if !seen.contains(&row.alternative.as_str()) {
                seen.push(row.alternative.as_str());
            }
        }
        seen
    }
}

/// Coerces a JSON value to a rating.
fn coerce_numeric(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|v| v.is_finite())
}

/// Builder for constructing RatingsTable instances.
#[derive(Debug, Default)]
pub struct RatingsTableBuilder {
    identity_column: Option<String>,
    columns: Vec<String>,
    rows: Vec<AlternativeRow>,
}

impl RatingsTableBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the identity column name.
    pub fn identity_column(mut self, name: impl Into<String>) -> Self {
        self.identity_column = Some(name.into());
        self
    }

    /// Adds a row with possibly-missing ratings.
    pub fn row<K: Into<String>>(
        mut self,
        alternative: impl Into<String>,
        ratings: impl IntoIterator<Item = (K, Option<f64>)>,
    ) -> Self {
        let mut row = AlternativeRow::new(alternative);
        for (column, rating) in ratings {
            let column = column.into();
            self.add_column(column.clone());
            row.ratings.insert(column, rating);
        }
        self.rows.push(row);
        self
    }

    /// Adds a fully rated row.
    pub fn rated<K: Into<String>>(
        self,
        alternative: impl Into<String>,
        ratings: impl IntoIterator<Item = (K, f64)>,
    ) -> Self {
        self.row(alternative, ratings.into_iter().map(|(k, v)| (k, Some(v))))
    }

    fn add_column(&mut self, column: String) {
        if !self.columns.contains(&column) {
            self.columns.push(column);
        }
    }

    /// Builds the ratings table.
    pub fn build(self) -> RatingsTable {
        RatingsTable {
            identity_column: self
                .identity_column
                .unwrap_or_else(|| DEFAULT_IDENTITY_COLUMN.to_string()),
            columns: self.columns,
            rows: self.rows,
        }
    }
}
