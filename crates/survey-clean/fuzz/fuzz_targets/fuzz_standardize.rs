//! Fuzz target for LGA/LCDA standardization.
//!
//! Standardizing must never panic, and its output must never carry edge
//! whitespace.

#![no_main]

use libfuzzer_sys::fuzz_target;
use survey_clean::standardize;

fuzz_target!(|data: &[u8]| {
    let input = String::from_utf8_lossy(data);
    let out = standardize(Some(&*input));
    assert_eq!(out.trim(), out);
});
