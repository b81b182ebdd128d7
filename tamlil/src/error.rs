//! Error types for transcription operations.
//!
//! Every remote failure propagates unchanged to the caller; there is no
//! retry or recovery anywhere in this crate.

/// The main error type for transcription operations.
#[derive(Debug, thiserror::Error)]
pub enum TranscribeError {
    /// API key not configured.
    #[error("API key not configured (set GOOGLE_API_KEY)")]
    MissingApiKey,

    /// The service rejected the credential.
    #[error("authentication rejected: {0}")]
    Unauthorized(String),

    /// Local audio file not found.
    #[error("file not found: {0}")]
    FileNotFound(String),

    /// Unsupported audio container.
    #[error("unsupported audio format: {0}")]
    UnsupportedFormat(String),

    /// IO error while reading the audio file.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    /// Transport-level request failure.
    #[error("request error: {0}")]
    Request(String),

    /// The service rejected the request.
    #[error("API error (HTTP {status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Error body text as returned by the service.
        message: String,
    },

    /// The generation response carried no text.
    #[error("model returned no transcription text")]
    EmptyResponse,
}

impl TranscribeError {
    /// Classify a non-success HTTP response.
    ///
    /// 401/403 map to [`Self::Unauthorized`]; everything else is an API
    /// error carrying the status and body text.
    #[must_use]
    pub fn from_status(status: u16, body: String) -> Self {
        match status {
            401 | 403 => Self::Unauthorized(body),
            _ => Self::Api {
                status,
                message: body,
            },
        }
    }
}

impl From<reqwest::Error> for TranscribeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Request(err.to_string())
    }
}

/// Result type alias for transcription operations.
pub type Result<T> = std::result::Result<T, TranscribeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        let err = TranscribeError::from_status(401, "bad key".to_string());
        assert!(matches!(err, TranscribeError::Unauthorized(_)));

        let err = TranscribeError::from_status(403, "forbidden".to_string());
        assert!(matches!(err, TranscribeError::Unauthorized(_)));

        let err = TranscribeError::from_status(429, "quota".to_string());
        assert!(matches!(err, TranscribeError::Api { status: 429, .. }));
    }

    #[test]
    fn test_error_display() {
        let err = TranscribeError::Api {
            status: 400,
            message: "invalid argument".to_string(),
        };
        assert_eq!(err.to_string(), "API error (HTTP 400): invalid argument");

        assert_eq!(
            TranscribeError::FileNotFound("test.mp3".to_string()).to_string(),
            "file not found: test.mp3"
        );
    }
}
