//! Questionnaire column names and the required-column check.

mod check;
mod columns;

pub use check::{check_columns, validate_columns, ColumnReport};
pub use columns::*;
