//! Loading and saving persisted records
//!
//! Each benchmark run leaves behind an artifact directory named after its
//! edition (`benchmark-<edition>` by default) holding one persisted
//! [`MetricsRecord`](crate::metrics::MetricsRecord) as JSON. This module walks
//! a directory of such artifacts and collects the records into an
//! [`EditionSet`](crate::ranking::EditionSet), and provides the JSON helpers
//! used to write records, summaries and badges.

mod json_file;
mod loader;

pub use json_file::{read_json, write_json, write_json_pretty};
pub use loader::{ArtifactLayout, load_editions};
