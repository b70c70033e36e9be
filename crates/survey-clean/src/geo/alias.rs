//! Alias resolution for free-text LGA/LCDA answers.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::input::Cell;

/// Returned for answers that are not text at all.
pub const RAW_SENTINEL: &str = "others";

/// Known spellings mapped to their canonical gazetteer name. Keys are
/// matched after whitespace, hyphen and slash cleanup.
const ALIASES: &[(&str, &str)] = &[
    ("Oshodi Isolo", "Oshodi-Isolo"),
    ("Ibeju Lekki", "Ibeju"),
    ("Ikosi Isheri", "Ikosi"),
    ("Ketu", "Agboyi/Ketu"),
    ("Eti-Osa", "Eti Osa East"),
    ("Ajah", "Eti Osa East"),
    ("Akoka", "Yaba"),
    ("Ebute Metta", "Yaba"),
];

static ALIAS_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| ALIASES.iter().copied().collect());

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static SPACED_SLASH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s*/\s*").unwrap());

/// Standardize a raw LGA/LCDA answer.
///
/// `None` yields [`RAW_SENTINEL`]. Text is trimmed, internal whitespace runs
/// collapse to one space, `" - "`/`"- "` become `"-"` and spacing around
/// `/` is removed. The result is then looked up in the alias table; unknown
/// names come back cleaned but otherwise unchanged.
pub fn standardize(raw: Option<&str>) -> String {
    let Some(raw) = raw else {
        return RAW_SENTINEL.to_string();
    };

    let value = WHITESPACE_RUN.replace_all(raw.trim(), " ");
    let value = value.replace(" - ", "-").replace("- ", "-");
    let value = SPACED_SLASH.replace_all(&value, "/");

    match ALIAS_MAP.get(&*value) {
        Some(canonical) => canonical.to_string(),
        None => value.into_owned(),
    }
}

/// Standardize a table cell. Only raw text is treated as an answer.
pub fn standardize_cell(cell: &Cell) -> String {
    standardize(cell.as_text())
}
