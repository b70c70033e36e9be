//! Multi-select (tick all that apply) answer parsing.

use crate::input::Cell;

/// Split a comma-joined answer into trimmed options.
///
/// Empty options are kept in place, so `"A,,B"` yields `["A", "", "B"]`.
/// Anything other than raw text yields no options.
pub fn clean_multi_select(cell: &Cell) -> Vec<String> {
    match cell {
        Cell::Text(s) => s.split(',').map(|part| part.trim().to_string()).collect(),
        Cell::Choices(items) => items.clone(),
        _ => Vec::new(),
    }
}

/// Parse a whole multi-select column.
pub fn clean_multi_select_column<'a>(column: impl IntoIterator<Item = &'a Cell>) -> Vec<Cell> {
    column
        .into_iter()
        .map(|cell| Cell::Choices(clean_multi_select(cell)))
        .collect()
}
