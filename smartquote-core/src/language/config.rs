//! Marker vocabulary configuration
//!
//! The word lists used by the language heuristic are data, kept in TOML
//! files embedded at compile time.

mod loader;
mod types;

pub use loader::{embedded_vocabulary, parse_vocabulary_file};
pub use types::{MarkerConfig, MarkerVocabulary, MarkersConfig, MetadataConfig};
