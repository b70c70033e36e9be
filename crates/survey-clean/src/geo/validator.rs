//! LGA/LCDA column validation against the gazetteer.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::{debug, info, warn};

use super::alias::standardize_cell;
use super::gazetteer::Gazetteer;
use crate::input::{Cell, SurveyTable};
use crate::schema::{LGA_COLUMN, LGA_SOURCE_COLUMN};

/// Written into the derived column for answers outside the gazetteer.
pub const INVALID_SENTINEL: &str = "Others";

/// Outcome of validating the LGA/LCDA column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoSummary {
    /// Rows left after dropping. Equal to `valid_rows`; see
    /// `rows_before_drop` for the input size.
    pub total_rows: usize,
    /// Rows whose answer resolved to a gazetteer name.
    pub valid_rows: usize,
    /// Rows dropped.
    pub invalid_rows: usize,
    /// Rows in the table handed to the validator.
    pub rows_before_drop: usize,
    /// `invalid_rows` as a percentage of `valid_rows`, rounded to two
    /// decimals. Zero when no rows survive.
    pub percent_invalid: f64,
    /// Rejected standardized values with their counts, in first-seen order.
    pub invalid_values: IndexMap<String, usize>,
}

/// Standardize the LGA/LCDA answers, write them to the derived
/// [`LGA_COLUMN`], and drop every row that does not resolve to a name in
/// `gazetteer`.
///
/// Dropped rows are gone from the returned table; the summary is the only
/// record of them.
pub fn validate_lga(mut table: SurveyTable, gazetteer: &Gazetteer) -> (SurveyTable, GeoSummary) {
    let rows_before_drop = table.row_count();
    let mut invalid_values: IndexMap<String, usize> = IndexMap::new();

    let derived: Vec<Cell> = table
        .column_values(LGA_SOURCE_COLUMN)
        .map(|cell| {
            let name = standardize_cell(cell);
            if name != INVALID_SENTINEL && gazetteer.contains(&name) {
                Cell::Text(name)
            } else {
                debug!(value = %name, "LGA/LCDA not in gazetteer");
                *invalid_values.entry(name).or_insert(0) += 1;
                Cell::Text(INVALID_SENTINEL.to_string())
            }
        })
        .collect();

    table.set_column(LGA_COLUMN, derived);

    let invalid_rows = invalid_values.values().sum::<usize>();
    if let Some(index) = table.column_index(LGA_COLUMN) {
        table.retain_rows(|row| row.get(index).and_then(Cell::as_text) != Some(INVALID_SENTINEL));
    }

    let valid_rows = table.row_count();
    let percent_invalid = if valid_rows > 0 {
        round2(invalid_rows as f64 / valid_rows as f64 * 100.0)
    } else {
        0.0
    };

    if invalid_rows > 0 {
        warn!(
            dropped = invalid_rows,
            distinct = invalid_values.len(),
            "dropped rows with unrecognized LGA/LCDA"
        );
    }
    info!(
        rows_before_drop,
        valid_rows,
        percent_invalid,
        "LGA/LCDA validation complete"
    );

    let summary = GeoSummary {
        total_rows: valid_rows,
        valid_rows,
        invalid_rows,
        rows_before_drop,
        percent_invalid,
        invalid_values,
    };

    (table, summary)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
