//! Input loading and the in-memory survey table.

mod loader;
mod source;
mod table;

pub use loader::{Loader, LoaderConfig};
pub use source::SourceMetadata;
pub use table::{Cell, SurveyTable};
