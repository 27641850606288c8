/// Fact extraction errors
use thiserror::Error;

use crate::shared::models::Span;

#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("Malformed spawn pattern in '{function}' at {line}:{column}: {reason}")]
    MalformedSpawnPattern {
        function: String,
        line: u32,
        column: u32,
        reason: String,
    },
}

impl ExtractionError {
    pub fn malformed_spawn(function: &str, span: Span, reason: impl Into<String>) -> Self {
        ExtractionError::MalformedSpawnPattern {
            function: if function.is_empty() {
                "<module>".to_string()
            } else {
                function.to_string()
            },
            line: span.start_line,
            column: span.start_col,
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExtractionError>;
