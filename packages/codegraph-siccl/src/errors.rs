//! Error types for codegraph-siccl
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;
use crate::features::concurrency_analysis::ExtractionError;
use crate::shared::models::Span;

/// Main error type for codegraph-siccl operations
#[derive(Debug, Error)]
pub enum SicclError {
    /// Parse error (source could not be turned into a syntax tree)
    #[error("Parse error in {file_path} at {line}:{column}: {message}", line = span.start_line, column = span.start_col)]
    Parse {
        file_path: String,
        span: Span,
        message: String,
    },

    /// Fact extraction error
    #[error(transparent)]
    Extraction(#[from] ExtractionError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Output serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SicclError {
    /// Create a parse error
    pub fn parse_error(file_path: impl Into<String>, span: Span, message: impl Into<String>) -> Self {
        SicclError::Parse {
            file_path: file_path.into(),
            span,
            message: message.into(),
        }
    }

    /// Check if this is a parse error
    pub fn is_parse(&self) -> bool {
        matches!(self, SicclError::Parse { .. })
    }
}

/// Result type alias for codegraph-siccl operations
pub type Result<T> = std::result::Result<T, SicclError>;
