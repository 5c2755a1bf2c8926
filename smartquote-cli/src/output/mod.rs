//! Status report formatting module

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

/// Trait for status report formatters
pub trait ReportFormatter {
    /// Report the outcome of one file
    fn report(&mut self, report: &FileReport) -> Result<()>;

    /// Finalize output (e.g., write the JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonReporter;
pub use text::TextReporter;

/// What happened to one file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    /// Quotes converted and written back
    Converted,
    /// Nothing to convert
    Unchanged,
    /// Check mode: the file would be rewritten
    WouldChange,
    /// Resolving, reading, converting or writing failed
    Failed,
}

/// Outcome of one file
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<&'static str>,
    pub changed_lines: usize,
    pub balanced: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl FileReport {
    /// Report for a file that could not be handled
    pub fn failed(path: impl Into<PathBuf>, error: &anyhow::Error) -> Self {
        Self {
            path: path.into(),
            status: FileStatus::Failed,
            language: None,
            changed_lines: 0,
            balanced: true,
            error: Some(format!("{error:#}")),
        }
    }
}
