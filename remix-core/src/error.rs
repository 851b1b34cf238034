use thiserror::Error;

/// Central error type for the remix-core crate.
#[derive(Debug, Error)]
pub enum RemixError {
    // Generic fallback (wraps anyhow)
    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),

    // Domain-specific variants
    #[error("Service error: {0}")]
    Service(String),

    #[error("Malformed response from {endpoint}: {reason}")]
    MalformedResponse { endpoint: String, reason: String },

    #[error("Unsupported audio: {0}")]
    UnsupportedAudio(String),
}

// --- Implement From conversions for common errors ---
impl From<std::io::Error> for RemixError {
    fn from(e: std::io::Error) -> Self {
        RemixError::Anyhow(e.into())
    }
}

impl From<serde_json::Error> for RemixError {
    fn from(e: serde_json::Error) -> Self {
        RemixError::Anyhow(e.into())
    }
}

impl From<reqwest::Error> for RemixError {
    fn from(e: reqwest::Error) -> Self {
        RemixError::Anyhow(e.into())
    }
}

impl From<rodio::StreamError> for RemixError {
    fn from(e: rodio::StreamError) -> Self {
        RemixError::Anyhow(e.into())
    }
}

impl From<rodio::PlayError> for RemixError {
    fn from(e: rodio::PlayError) -> Self {
        RemixError::Anyhow(e.into())
    }
}

pub type Result<T> = std::result::Result<T, RemixError>;
