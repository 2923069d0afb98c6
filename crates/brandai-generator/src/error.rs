use brandai_core::SchemaViolation;
use thiserror::Error;

/// Any failure inside the remote backend. Always absorbed by the selector.
#[derive(Debug, Error)]
pub enum RemoteGenerationError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("completion endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("completion envelope could not be decoded: {0}")]
    Envelope(#[source] serde_json::Error),

    #[error("completion contained no message content")]
    EmptyCompletion,

    #[error("completion content is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),

    #[error("completion JSON does not match the identity schema: {0}")]
    Schema(String),
}

impl From<SchemaViolation> for RemoteGenerationError {
    fn from(err: SchemaViolation) -> Self {
        Self::Schema(err.0)
    }
}

/// The local generator produced output that breaks the response schema.
#[derive(Debug, Error)]
pub enum GenerationFailure {
    #[error("local generator produced an invalid identity: {0}")]
    InvalidLocalOutput(#[from] SchemaViolation),
}
