//! Delimited-text loader that picks the delimiter from the file extension.

use std::fs;
use std::path::Path;

use tracing::{debug, error, info};

use super::source::SourceMetadata;
use super::table::{Cell, SurveyTable};
use crate::error::{CleanError, Result};

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use regardless of extension. The extension must still
    /// be a supported one.
    pub delimiter_override: Option<u8>,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter_override: None,
            quote: b'"',
        }
    }
}

/// Loads survey exports from `.csv`, `.tsv` and `.txt` files.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration.
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file and return the table and its metadata.
    ///
    /// The extension is checked before the file is opened, so an
    /// unsupported format never touches the filesystem.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<(SurveyTable, SourceMetadata)> {
        let path = path.as_ref();
        let (format, delimiter) = format_for_path(path)?;
        let delimiter = self.config.delimiter_override.unwrap_or(delimiter);

        let contents = fs::read(path).map_err(|e| {
            error!(path = %path.display(), error = %e, "failed to read survey file");
            CleanError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let table = self.parse_bytes(&contents, delimiter)?;

        info!(
            path = %path.display(),
            format,
            rows = table.row_count(),
            columns = table.column_count(),
            "loaded survey file"
        );

        let source = SourceMetadata::describe(path, &contents, format, delimiter, &table);

        Ok((table, source))
    }

    /// Parse bytes directly.
    pub fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<SurveyTable> {
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(true)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(CleanError::EmptyData("No columns found".to_string()));
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(Cell::from_raw).collect());
        }

        debug!(rows = rows.len(), delimiter = %(delimiter as char).escape_default(), "parsed records");

        Ok(SurveyTable::new(headers, rows))
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Map a path's extension to a format name and delimiter.
fn format_for_path(path: &Path) -> Result<(&'static str, u8)> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("csv") => Ok(("csv", b',')),
        Some("tsv") | Some("txt") => Ok(("tsv", b'\t')),
        _ => {
            error!(path = %path.display(), "unsupported survey file format");
            Err(CleanError::UnsupportedFormat(format!(
                "'{}' (expected .csv, .tsv or .txt)",
                path.display()
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_for_path() {
        assert_eq!(format_for_path(Path::new("survey.csv")).unwrap(), ("csv", b','));
        assert_eq!(format_for_path(Path::new("survey.TSV")).unwrap(), ("tsv", b'\t'));
        assert_eq!(format_for_path(Path::new("survey.txt")).unwrap(), ("tsv", b'\t'));
        assert!(matches!(
            format_for_path(Path::new("survey.xlsx")),
            Err(CleanError::UnsupportedFormat(_))
        ));
        assert!(matches!(
            format_for_path(Path::new("survey")),
            Err(CleanError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_parse_csv() {
        let loader = Loader::new();
        let data = b"1. Age,3. LGA/LCDA\n18-24 years,Yaba\n25-34 years,\n";
        let table = loader.parse_bytes(data, b',').unwrap();

        assert_eq!(table.headers, vec!["1. Age", "3. LGA/LCDA"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.get(0, "3. LGA/LCDA"), Some(&Cell::from("Yaba")));
        assert_eq!(table.get(1, "3. LGA/LCDA"), Some(&Cell::Missing));
    }

    #[test]
    fn test_parse_quoted_multi_select() {
        let loader = Loader::new();
        let data = b"Foods\n\"Rice, Beans,Fish\"\n";
        let table = loader.parse_bytes(data, b',').unwrap();
        assert_eq!(table.get(0, "Foods"), Some(&Cell::from("Rice, Beans,Fish")));
    }

    #[test]
    fn test_parse_pads_short_rows() {
        let loader = Loader::new();
        let data = b"a\tb\tc\n1\t2\n";
        let table = loader.parse_bytes(data, b'\t').unwrap();
        assert_eq!(table.get(0, "c"), Some(&Cell::Missing));
    }

    #[test]
    fn test_header_only_is_empty_table() {
        let loader = Loader::new();
        let table = loader.parse_bytes(b"a,b\n", b',').unwrap();
        assert_eq!(table.row_count(), 0);
        assert_eq!(table.column_count(), 2);
    }

    #[test]
    fn test_load_records_delimiter_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("survey.txt");
        fs::write(&path, "a\tb\n1\t2\n").unwrap();

        let (table, source) = Loader::new().load(&path).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(source.extension, "txt");
        assert_eq!(source.format, "tsv");
        assert_eq!(source.delimiter, '\t');

        let path = dir.path().join("survey.csv");
        fs::write(&path, "a;b\n1;2\n").unwrap();
        let loader = Loader::with_config(LoaderConfig {
            delimiter_override: Some(b';'),
            ..LoaderConfig::default()
        });
        let (table, source) = loader.load(&path).unwrap();
        assert_eq!(table.column_count(), 2);
        assert_eq!(source.format, "csv");
        assert_eq!(source.delimiter, ';');
    }

    #[test]
    fn test_no_header_is_error() {
        let loader = Loader::new();
        assert!(matches!(
            loader.parse_bytes(b"", b','),
            Err(CleanError::EmptyData(_))
        ));
    }
}
