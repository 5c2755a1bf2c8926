//! Core error types

use thiserror::Error;

/// Errors raised by the quote conversion core
///
/// The conversion itself never fails on UTF-8 input. These variants cover
/// configuration problems and the guard on placeholder restoration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// Placeholder restoration did not reach a fixed point
    #[error("placeholder restoration did not settle after {passes} passes")]
    RestoreLimitExceeded {
        /// Number of substitution passes performed before giving up
        passes: usize,
    },

    /// Configuration loading, parsing or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
