//! Error types for the remote country source.

/// Errors that can occur while fetching the remote snapshot.
///
/// Any of these aborts a reconciliation pass before it touches the store.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request could not be completed (unreachable host, timeout, TLS
    /// failure).
    #[error("Remote source request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The remote source answered with a non-success status code.
    #[error("Remote source returned HTTP {status}")]
    Status {
        /// The HTTP status code.
        status: u16,
    },

    /// The response body was not a decodable country array.
    #[error("Failed to decode remote payload: {message}")]
    Decode {
        /// Description of the decode failure.
        message: String,
    },
}

impl FetchError {
    /// Creates a new `Status` error.
    #[must_use]
    pub fn status(status: u16) -> Self {
        Self::Status { status }
    }

    /// Creates a new `Decode` error.
    #[must_use]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        assert_eq!(
            FetchError::status(503).to_string(),
            "Remote source returned HTTP 503"
        );
        assert!(
            FetchError::decode("expected array")
                .to_string()
                .contains("expected array")
        );
    }
}
