//! Error types for rapid_summarizer
//!
//! This module defines the error types used throughout the library.
//! Input errors reject a whole request; no partial summary is ever returned.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummarizeError>;

/// Main error type for rapid_summarizer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummarizeError {
    /// Input text is empty or whitespace only
    #[error("Empty input: {message}")]
    EmptyInput { message: String },

    /// Summary mode tag is not one of the supported modes
    #[error("Unknown mode: '{mode}' (expected paragraph, keypoints, bullet, or custom)")]
    UnknownMode { mode: String },

    /// Custom sentence count is missing or not positive
    #[error("Invalid sentence count: {message}")]
    InvalidCount { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// Internal error (should not occur in normal usage)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl SummarizeError {
    /// Create an empty input error
    pub fn empty_input(message: impl Into<String>) -> Self {
        Self::EmptyInput {
            message: message.into(),
        }
    }

    /// Create an unknown mode error
    pub fn unknown_mode(mode: impl Into<String>) -> Self {
        Self::UnknownMode { mode: mode.into() }
    }

    /// Create an invalid count error
    pub fn invalid_count(message: impl Into<String>) -> Self {
        Self::InvalidCount {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error was caused by the caller's request
    /// (and should be reported back as a bad request)
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::EmptyInput { .. }
                | Self::UnknownMode { .. }
                | Self::InvalidCount { .. }
                | Self::Serialization { .. }
        )
    }
}

impl From<serde_json::Error> for SummarizeError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}
