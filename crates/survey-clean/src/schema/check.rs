//! Required-column check run before any normalization.

use serde::Serialize;
use tracing::{info, warn};

use crate::input::SurveyTable;

/// Which required columns a table has and which it lacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnReport {
    /// Columns that were required, in the order given.
    pub required: Vec<String>,
    /// Required columns absent from the table, in the order given.
    pub missing: Vec<String>,
}

impl ColumnReport {
    /// True when no required column is missing.
    pub fn is_complete(&self) -> bool {
        self.missing.is_empty()
    }
}

/// Compare a table's headers with the required column names.
///
/// Names match exactly; a header differing only in case or surrounding
/// whitespace counts as missing.
pub fn check_columns<S: AsRef<str>>(table: &SurveyTable, required: &[S]) -> ColumnReport {
    let required: Vec<String> = required.iter().map(|c| c.as_ref().to_string()).collect();
    let missing: Vec<String> = required
        .iter()
        .filter(|c| !table.has_column(c))
        .cloned()
        .collect();

    if missing.is_empty() {
        info!(required = required.len(), "all required columns present");
    } else {
        warn!(missing = ?missing, "missing required columns");
    }

    ColumnReport { required, missing }
}

/// True iff every required column is present. Missing names are logged.
pub fn validate_columns<S: AsRef<str>>(table: &SurveyTable, required: &[S]) -> bool {
    check_columns(table, required).is_complete()
}
