//! Fuzz target for loading and cleaning arbitrary CSV bytes.
//!
//! Malformed input may fail to load but must never panic, and with the
//! report-only policy every loaded table must clean.

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;
use survey_clean::{PipelineConfig, SchemaPolicy, SurveyCleaner};

fuzz_target!(|data: &[u8]| {
    // Only process reasonable-sized inputs to avoid OOM
    if data.len() > 100_000 {
        return;
    }

    if let Ok(mut temp_file) = tempfile::Builder::new().suffix(".csv").tempfile() {
        if temp_file.write_all(data).is_ok() {
            let config = PipelineConfig::default().with_schema_policy(SchemaPolicy::ReportOnly);
            let cleaner = SurveyCleaner::with_config(config);
            if let Ok(result) = cleaner.clean_file(temp_file.path()) {
                assert_eq!(result.table.row_count(), result.geo.valid_rows);
            }
        }
    }
});
