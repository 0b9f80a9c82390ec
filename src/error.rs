//! Crate-wide error type.
//!
//! Collaborator failures, file I/O and export parsing all funnel into [`Error`] so the
//! application shell can surface a single message without knowing where it came from.

/// Comprehensive error type for flashcard generation
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to write output file: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Parsing engine returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Invalid format received from parsing engine.")]
    InvalidFormat,

    #[error("No API key configured (set GEMINI_API_KEY or pass --api-key)")]
    MissingApiKey,

    #[error("An extraction request is already in progress")]
    ExtractionInProgress,

    #[error("Invalid deck file: {0}")]
    InvalidDeck(String),

    #[error("Page capacity must be at least 1")]
    InvalidCapacity,
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_format_message() {
        assert_eq!(
            Error::InvalidFormat.to_string(),
            "Invalid format received from parsing engine."
        );
    }

    #[test]
    fn io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("missing"));
    }
}
