//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Invalid file pattern
    InvalidPattern(String),
    /// Pattern that matched no files
    NoMatches(String),
    /// Configuration error
    ConfigError(String),
    /// Processing error from core
    ProcessingError(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::InvalidPattern(pattern) => write!(f, "Invalid file pattern: {pattern}"),
            CliError::NoMatches(pattern) => write!(f, "No files found matching: {pattern}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::ProcessingError(msg) => write!(f, "Processing error: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

impl From<smartquote_core::CoreError> for CliError {
    fn from(err: smartquote_core::CoreError) -> Self {
        CliError::ProcessingError(err.to_string())
    }
}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error_display() {
        let error = CliError::FileNotFound("test.md".to_string());
        assert_eq!(error.to_string(), "File not found: test.md");
    }

    #[test]
    fn test_invalid_pattern_error_display() {
        let error = CliError::InvalidPattern("[invalid".to_string());
        assert_eq!(error.to_string(), "Invalid file pattern: [invalid");
    }

    #[test]
    fn test_no_matches_error_display() {
        let error = CliError::NoMatches("docs/*.md".to_string());
        assert_eq!(error.to_string(), "No files found matching: docs/*.md");
    }

    #[test]
    fn test_config_error_display() {
        let error = CliError::ConfigError("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_processing_error_from_core() {
        let error: CliError = smartquote_core::CoreError::RestoreLimitExceeded { passes: 3 }.into();
        assert_eq!(
            error.to_string(),
            "Processing error: placeholder restoration did not settle after 3 passes"
        );
    }

    #[test]
    fn test_error_with_special_characters() {
        let error = CliError::FileNotFound("Übersicht/„Zitat“.md".to_string());
        assert_eq!(error.to_string(), "File not found: Übersicht/„Zitat“.md");
    }

    #[test]
    fn test_cli_result_type_alias() {
        let failure: CliResult<()> = Err(anyhow::anyhow!("test error"));
        assert!(failure.unwrap_err().to_string().contains("test error"));
    }
}
