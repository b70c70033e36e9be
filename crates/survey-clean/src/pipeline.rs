//! Pipeline orchestrator and public entry points.

use std::path::Path;

use serde::Serialize;
use tracing::{info, info_span};

use crate::error::{CleanError, Result};
use crate::geo::{validate_lga, Gazetteer, GeoSummary};
use crate::input::{Loader, LoaderConfig, SourceMetadata, SurveyTable};
use crate::normalize::{clean_age_group, clean_binary_column, clean_multi_select_column};
use crate::schema::{
    check_columns, ColumnReport, AGE_GROUP_COLUMN, AGE_SOURCE_COLUMN, BINARY_COLUMNS,
    MULTI_SELECT_COLUMNS, REQUIRED_COLUMNS,
};

/// What to do when required columns are missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SchemaPolicy {
    /// Fail the run with [`CleanError::MissingColumns`].
    #[default]
    Abort,
    /// Carry on; absent source columns read as missing in every row.
    ReportOnly,
}

/// Configuration for a cleaning run.
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    /// Loader configuration.
    pub loader: LoaderConfig,
    /// Missing-column policy.
    pub schema_policy: SchemaPolicy,
    /// Columns the input must carry.
    pub required_columns: Vec<String>,
    /// Valid LGA/LCDA names.
    pub gazetteer: Gazetteer,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            loader: LoaderConfig::default(),
            schema_policy: SchemaPolicy::default(),
            required_columns: REQUIRED_COLUMNS.iter().map(|c| c.to_string()).collect(),
            gazetteer: Gazetteer::lagos(),
        }
    }
}

impl PipelineConfig {
    pub fn with_schema_policy(mut self, policy: SchemaPolicy) -> Self {
        self.schema_policy = policy;
        self
    }

    pub fn with_required_columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required_columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_gazetteer(mut self, gazetteer: Gazetteer) -> Self {
        self.gazetteer = gazetteer;
        self
    }

    pub fn with_loader(mut self, loader: LoaderConfig) -> Self {
        self.loader = loader;
        self
    }
}

/// Result of a cleaning run.
#[derive(Debug, Clone, Serialize)]
pub struct CleanResult {
    /// Cleaned table with the derived columns appended.
    pub table: SurveyTable,
    /// Required-column check.
    pub columns: ColumnReport,
    /// LGA/LCDA validation summary.
    pub geo: GeoSummary,
    /// Metadata about the source file, when the run started from one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<SourceMetadata>,
}

/// Runs the survey cleaning pipeline.
pub struct SurveyCleaner {
    config: PipelineConfig,
    loader: Loader,
}

impl SurveyCleaner {
    /// Create a cleaner with default configuration.
    pub fn new() -> Self {
        Self::with_config(PipelineConfig::default())
    }

    /// Create a cleaner with custom configuration.
    pub fn with_config(config: PipelineConfig) -> Self {
        let loader = Loader::with_config(config.loader.clone());
        Self { config, loader }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Load a file and clean it.
    pub fn clean_file(&self, path: impl AsRef<Path>) -> Result<CleanResult> {
        let (table, source) = self.loader.load(path)?;
        let mut result = self.clean(table)?;
        result.source = Some(source);
        Ok(result)
    }

    /// Clean an already loaded table.
    ///
    /// Stages run in order: required-column check, age bands, LGA/LCDA
    /// validation (which drops rows), multi-select parsing, then yes/no
    /// answers. Source columns are left untouched.
    pub fn clean(&self, mut table: SurveyTable) -> Result<CleanResult> {
        let _span = info_span!("clean", rows = table.row_count()).entered();

        let columns = check_columns(&table, &self.config.required_columns);
        if !columns.is_complete() && self.config.schema_policy == SchemaPolicy::Abort {
            return Err(CleanError::MissingColumns(columns.missing));
        }

        let ages = clean_age_group(table.column_values(AGE_SOURCE_COLUMN));
        table.set_column(AGE_GROUP_COLUMN, ages);

        let (mut table, geo) = validate_lga(table, &self.config.gazetteer);

        for (source, derived) in MULTI_SELECT_COLUMNS {
            let values = clean_multi_select_column(table.column_values(source));
            table.set_column(derived, values);
        }

        for (source, derived) in BINARY_COLUMNS {
            let values = clean_binary_column(table.column_values(source));
            table.set_column(derived, values);
        }

        info!(
            rows = table.row_count(),
            columns = table.column_count(),
            "survey cleaning complete"
        );

        Ok(CleanResult {
            table,
            columns,
            geo,
            source: None,
        })
    }
}

impl Default for SurveyCleaner {
    fn default() -> Self {
        Self::new()
    }
}
