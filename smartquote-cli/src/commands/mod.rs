//! CLI command implementations

pub mod convert;

pub use convert::{convert_file, BatchSummary, ConvertArgs, Settings};
