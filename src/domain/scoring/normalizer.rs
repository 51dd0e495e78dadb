//! Min-max normalization of macro-score columns.

use super::MacroScoreTable;

/// Value assigned to every defined entry of a column with no spread.
pub const DEGENERATE_COLUMN_VALUE: f64 = 0.5;

/// Rescales macro-scores to `[0, 1]` per macro-criterion.
pub struct Normalizer;

impl Normalizer {
    /// Linear min-max rescale of each column using its own observed range.
    ///
    /// # Edge Cases
    /// - Column with min == max: Every defined entry becomes 0.5
    /// - Undefined entries: Stay undefined and do not affect min or max
    /// - Column with no defined entries: Left untouched
    pub fn min_max(table: &MacroScoreTable) -> MacroScoreTable {
        let mut normalized = table.clone();

        for col in 0..table.criteria.len() {
            let Some((min, max)) = column_range(table, col) else {
                continue;
            };
            let span = max - min;

            for row in &mut normalized.rows {
                if let Some(Some(value)) = row.scores.get_mut(col) {
                    *value = if span > 0.0 {
                        (*value - min) / span
                    } else {
                        DEGENERATE_COLUMN_VALUE
                    };
                }
            }
        }

        normalized
    }
}

fn column_range(table: &MacroScoreTable, col: usize) -> Option<(f64, f64)> {
    table
        .rows
        .iter()
        .filter_map(|row| row.scores.get(col).copied().flatten())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((f64::min(min, v), f64::max(max, v))),
        })
}
