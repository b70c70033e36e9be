//! In-memory survey table.

use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::normalize::{AgeBand, BinaryResponse};

/// Tokens read as missing when a table is built from raw text.
const NULL_TOKENS: &[&str] = &["NA", "N/A", "n/a", "NaN", "nan", "null", "NULL", "None", "<NA>"];

/// Cell read for rows of a column the table does not have.
static MISSING: Cell = Cell::Missing;

/// A single value in a survey table.
///
/// Raw questionnaire answers load as [`Cell::Text`] or [`Cell::Missing`];
/// the other variants are written by the normalizers into derived columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    /// No answer recorded.
    Missing,
    /// Raw free-text answer.
    Text(String),
    /// Ordered age band.
    Age(AgeBand),
    /// Parsed multi-select answer.
    Choices(Vec<String>),
    /// Yes/no answer.
    Binary(BinaryResponse),
}

impl Cell {
    /// Build a cell from raw text, mapping null tokens to [`Cell::Missing`].
    pub fn from_raw(value: &str) -> Self {
        if SurveyTable::is_null_value(value) {
            Cell::Missing
        } else {
            Cell::Text(value.to_string())
        }
    }

    /// The text of a raw answer, if this cell holds one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

impl From<String> for Cell {
    fn from(value: String) -> Self {
        Cell::Text(value)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Missing => Ok(()),
            Cell::Text(s) => f.write_str(s),
            Cell::Age(band) => f.write_str(band.label()),
            Cell::Choices(items) => f.write_str(&items.join(", ")),
            Cell::Binary(response) => match response.as_numeric() {
                Some(n) => write!(f, "{}", n),
                None => Ok(()),
            },
        }
    }
}

/// Survey answers held in memory, one row per respondent.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct SurveyTable {
    /// Column headers, in file order. Names are exact keys.
    pub headers: Vec<String>,
    /// Row data (row-major order). Every row is as wide as `headers`.
    pub rows: Vec<Vec<Cell>>,
}

impl SurveyTable {
    /// Create a table, padding short rows with [`Cell::Missing`] and
    /// truncating long ones to the header width.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Cell>>) -> Self {
        let width = headers.len();
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(width, Cell::Missing);
                row
            })
            .collect();

        Self { headers, rows }
    }

    /// Create a table from raw text values.
    pub fn from_text_rows<S: AsRef<str>>(headers: Vec<String>, rows: Vec<Vec<S>>) -> Self {
        let rows = rows
            .into_iter()
            .map(|row| row.iter().map(|v| Cell::from_raw(v.as_ref())).collect())
            .collect();
        Self::new(headers, rows)
    }

    /// Get the number of columns.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Get the number of rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of a column by exact name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column_index(name).is_some()
    }

    /// Iterate a column's cells by name. A column the table lacks reads as
    /// [`Cell::Missing`] in every row.
    pub fn column_values<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Cell> + use<'a> {
        let index = self.column_index(name);
        self.rows
            .iter()
            .map(move |row| index.and_then(|i| row.get(i)).unwrap_or(&MISSING))
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<&Cell>> {
        let index = self.column_index(name)?;
        Some(
            self.rows
                .iter()
                .map(|row| row.get(index).unwrap_or(&MISSING))
                .collect(),
        )
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, column: &str) -> Option<&Cell> {
        let index = self.column_index(column)?;
        self.rows.get(row).and_then(|r| r.get(index))
    }

    /// A row as an ordered column-name to cell view.
    pub fn row(&self, row: usize) -> Option<IndexMap<&str, &Cell>> {
        let cells = self.rows.get(row)?;
        Some(
            self.headers
                .iter()
                .map(|h| h.as_str())
                .zip(cells.iter())
                .collect(),
        )
    }

    /// Write a column, replacing it if the header exists and appending it
    /// otherwise. `values` is fitted to the row count with [`Cell::Missing`],
    /// and ragged rows are first fitted to the header width.
    pub fn set_column(&mut self, name: &str, mut values: Vec<Cell>) {
        values.resize(self.rows.len(), Cell::Missing);
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, Cell::Missing);
        }

        match self.column_index(name) {
            Some(index) => {
                for (row, value) in self.rows.iter_mut().zip(values) {
                    if let Some(slot) = row.get_mut(index) {
                        *slot = value;
                    }
                }
            }
            None => {
                self.headers.push(name.to_string());
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
        }
    }

    /// Keep only the rows for which `keep` returns true.
    pub fn retain_rows<F>(&mut self, mut keep: F)
    where
        F: FnMut(&[Cell]) -> bool,
    {
        self.rows.retain(|row| keep(row.as_slice()));
    }

    /// Check if a raw value represents a missing/null value.
    pub fn is_null_value(value: &str) -> bool {
        value.trim().is_empty() || NULL_TOKENS.contains(&value)
    }
}
