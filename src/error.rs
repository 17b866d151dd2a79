/// Errors that can occur while normalizing a document.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("malformed document: {reason}")]
    MalformedDocument { reason: String },

    #[error("malformed record at index {index}: {reason}")]
    MalformedRecord { index: usize, reason: String },
}
