use thiserror::Error;

/// Errors raised by the extraction engine.
///
/// `Format` never leaves the row extractors: a row that fails to normalize is
/// skipped. Only the document-level variants reach callers.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Invalid {what} format: {input:?}")]
    Format { what: &'static str, input: String },

    #[error("Document could not be parsed: {0}")]
    UnparseableDocument(String),

    #[error("Failed to parse event feed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ExtractError {
    pub fn format(what: &'static str, input: &str) -> Self {
        ExtractError::Format {
            what,
            input: input.to_string(),
        }
    }

    #[cfg(test)]
    pub fn is_format(&self) -> bool {
        matches!(self, ExtractError::Format { .. })
    }
}

pub type ExtractResult<T> = Result<T, ExtractError>;
