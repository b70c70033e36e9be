//! Categorical normalizers for questionnaire answers.
//!
//! Each normalizer is total: unexpected input maps to a sentinel
//! ([`AgeBand::Unknown`], a missing binary value, an empty choice list)
//! instead of an error.

mod age;
mod binary;
mod multi_select;

pub use age::{clean_age_group, normalize_age, AgeBand};
pub use binary::{clean_binary, clean_binary_column, normalize_binary, BinaryResponse};
pub use multi_select::{clean_multi_select, clean_multi_select_column};
