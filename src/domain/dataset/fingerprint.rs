//! Content fingerprint identifying a dataset across uploads.

use serde_json::Value;
use sha2::{Digest, Sha256};

use super::{DatasetSchema, RatingsTable};
use crate::domain::foundation::DatasetId;

/// Stable SHA-256 fingerprint of the schema columns of a table.
///
/// Each row is rendered as a JSON array and the rendered rows are sorted
/// before hashing, so the same data in any row order yields the same id,
/// including rows that share an alternative name. JSON escaping keeps names
/// containing separators from colliding. Columns outside the schema do not
/// contribute.
pub fn fingerprint(table: &RatingsTable, schema: &DatasetSchema) -> DatasetId {
    let columns: Vec<&str> = schema
        .rating_columns
        .iter()
        .map(String::as_str)
        .filter(|c| table.has_column(c))
        .collect();

    let header: Vec<&str> = std::iter::once(schema.identity_column.as_str())
        .chain(columns.iter().copied())
        .collect();

    let mut rows: Vec<String> = table
        .rows
        .iter()
        .map(|row| {
            let fields: Vec<Value> = std::iter::once(Value::from(row.alternative.as_str()))
                .chain(columns.iter().map(|c| row.rating(c).map_or(Value::Null, Value::from)))
                .collect();
            Value::Array(fields).to_string()
        })
        .collect();
    rows.sort_unstable();

    // Rendered JSON never holds a raw newline.
    let mut hasher = Sha256::new();
    hasher.update(Value::from(header).to_string().as_bytes());
    hasher.update(b"\n");
    for row in &rows {
        hasher.update(row.as_bytes());
        hasher.update(b"\n");
    }

    DatasetId::from_digest(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dataset::demo_dataset;

    #[test]
    fn fingerprint_is_stable() {
        let schema = DatasetSchema::default();
        let table = demo_dataset();
        assert_eq!(fingerprint(&table, &schema), fingerprint(&table, &schema));
        assert_eq!(fingerprint(&table, &schema).as_str().len(), 64);
    }

    #[test]
    fn fingerprint_ignores_row_order() {
        let schema = DatasetSchema::default();
        let table = demo_dataset();
        let mut reversed = table.clone();
        reversed.rows.reverse();
        assert_eq!(fingerprint(&table, &schema), fingerprint(&reversed, &schema));
    }

    #[test]
    fn fingerprint_ignores_order_of_rows_sharing_a_name() {
        let schema = DatasetSchema::default();
        let mut table = demo_dataset();
        let mut second = table.rows[3].clone();
        table.rows[3].ratings.insert("Pizza".to_string(), Some(4.0));
        second.ratings.insert("Pizza".to_string(), Some(2.0));
        table.rows.push(second);

        let mut reordered = table.clone();
        reordered.rows.reverse();
        assert_eq!(table.rows[3].alternative, table.rows[4].alternative);
        assert_eq!(fingerprint(&table, &schema), fingerprint(&reordered, &schema));
    }

    #[test]
    fn separators_in_names_do_not_collide() {
        let schema = DatasetSchema {
            identity_column: "LOCALI".to_string(),
            rating_columns: vec!["Pizza".to_string()],
        };
        let joined = RatingsTable::builder()
            .row("A,1\nB", [("Pizza", None)])
            .build();
        let split = RatingsTable::builder()
            .row("A", [("Pizza", Some(1.0))])
            .row("B", [("Pizza", None)])
            .build();
        assert_ne!(fingerprint(&joined, &schema), fingerprint(&split, &schema));
    }

    #[test]
    fn fingerprint_changes_with_ratings() {
        let schema = DatasetSchema::default();
        let table = demo_dataset();
        let mut edited = table.clone();
        edited.rows[0].ratings.insert("Pizza".to_string(), Some(1.0));
        assert_ne!(fingerprint(&table, &schema), fingerprint(&edited, &schema));
    }

    #[test]
    fn fingerprint_ignores_extra_columns() {
        let schema = DatasetSchema::default();
        let table = demo_dataset();
        let mut extended = table.clone();
        extended.columns.push("Indirizzo".to_string());
        for row in &mut extended.rows {
            row.ratings.insert("Indirizzo".to_string(), None);
        }
        assert_eq!(fingerprint(&table, &schema), fingerprint(&extended, &schema));
    }
}
