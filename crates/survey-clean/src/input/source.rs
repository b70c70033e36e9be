//! Provenance of a loaded survey file.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::table::SurveyTable;

/// Where a survey table came from and how it was read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    pub file: String,
    pub path: PathBuf,
    /// Lowercased extension that selected the format, e.g. `txt`.
    pub extension: String,
    /// `csv` or `tsv`.
    pub format: String,
    /// Delimiter the rows were split on. Differs from the format's
    /// default when the loader was given an override.
    pub delimiter: char,
    /// `sha256:` followed by the hex digest of the raw bytes.
    pub hash: String,
    pub size_bytes: u64,
    pub row_count: usize,
    pub column_count: usize,
    pub loaded_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe `contents`, read from `path`, as parsed into `table`.
    pub fn describe(
        path: &Path,
        contents: &[u8],
        format: &str,
        delimiter: u8,
        table: &SurveyTable,
    ) -> Self {
        let file = path
            .file_name()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();

        Self {
            file,
            path: path.to_path_buf(),
            extension,
            format: format.to_string(),
            delimiter: delimiter as char,
            hash: content_hash(contents),
            size_bytes: contents.len() as u64,
            row_count: table.row_count(),
            column_count: table.column_count(),
            loaded_at: Utc::now(),
        }
    }
}

fn content_hash(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    format!("sha256:{:x}", hasher.finalize())
}
