use thiserror::Error;

/// Failure of a whole extraction run. Individual lines or JSON elements that
/// do not parse are dropped silently; only content that violates the
/// upstream contract as a whole is reported through this type.
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("content source returned invalid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
}
