//! survey-clean: cleaning and validation for questionnaire survey exports.
//!
//! A run checks that the questionnaire columns are present, resolves the
//! free-text LGA/LCDA answers against a closed gazetteer (dropping rows that
//! do not resolve), and derives typed columns for age bands, multi-select
//! checklists and yes/no answers.
//!
//! # Example
//!
//! ```no_run
//! use survey_clean::SurveyCleaner;
//!
//! let cleaner = SurveyCleaner::new();
//! let result = cleaner.clean_file("responses.csv").unwrap();
//!
//! println!("Rows kept: {}", result.geo.valid_rows);
//! println!("Invalid LGA: {}%", result.geo.percent_invalid);
//! ```

pub mod error;
pub mod geo;
pub mod input;
pub mod normalize;
pub mod schema;

mod pipeline;

pub use error::{CleanError, Result};
pub use geo::{standardize, validate_lga, Gazetteer, GeoSummary};
pub use input::{Cell, Loader, LoaderConfig, SourceMetadata, SurveyTable};
pub use normalize::{clean_binary, clean_multi_select, AgeBand, BinaryResponse};
pub use pipeline::{CleanResult, PipelineConfig, SchemaPolicy, SurveyCleaner};
pub use schema::{check_columns, validate_columns, ColumnReport, REQUIRED_COLUMNS};
