//! Geographic field standardization and validation.
//!
//! Free-text LGA/LCDA answers are cleaned and resolved through a fixed alias
//! table, then checked against a closed [`Gazetteer`]. Rows whose answer
//! does not resolve to a gazetteer name are dropped.

mod alias;
mod gazetteer;
mod validator;

pub use alias::{standardize, standardize_cell, RAW_SENTINEL};
pub use gazetteer::{Gazetteer, LAGOS_LGAS};
pub use validator::{validate_lga, GeoSummary, INVALID_SENTINEL};
