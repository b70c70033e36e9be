//! Yes/no answer normalization.

use serde::{Serialize, Serializer};

use crate::input::Cell;

/// A yes/no questionnaire answer. Serializes as its numeric form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryResponse {
    Yes,
    No,
    /// Respondent answered "Not sure".
    NotSure,
    /// Anything outside the three expected answers, including no answer.
    Unrecognized,
}

impl BinaryResponse {
    /// Map an exact answer. Matching is case-sensitive and untrimmed.
    pub fn parse(value: &str) -> Self {
        match value {
            "Yes" => BinaryResponse::Yes,
            "No" => BinaryResponse::No,
            "Not sure" => BinaryResponse::NotSure,
            _ => BinaryResponse::Unrecognized,
        }
    }

    /// Numeric form: 1 for yes, 0 for no, missing otherwise.
    pub fn as_numeric(&self) -> Option<u8> {
        match self {
            BinaryResponse::Yes => Some(1),
            BinaryResponse::No => Some(0),
            BinaryResponse::NotSure | BinaryResponse::Unrecognized => None,
        }
    }
}

impl Serialize for BinaryResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_numeric().serialize(serializer)
    }
}

/// Normalize one yes/no answer.
pub fn normalize_binary(cell: &Cell) -> BinaryResponse {
    match cell {
        Cell::Text(s) => BinaryResponse::parse(s),
        Cell::Binary(response) => *response,
        _ => BinaryResponse::Unrecognized,
    }
}

/// Numeric value of one yes/no answer.
pub fn clean_binary(cell: &Cell) -> Option<u8> {
    normalize_binary(cell).as_numeric()
}

/// Normalize a whole yes/no column.
pub fn clean_binary_column<'a>(column: impl IntoIterator<Item = &'a Cell>) -> Vec<Cell> {
    column
        .into_iter()
        .map(|cell| Cell::Binary(normalize_binary(cell)))
        .collect()
}
