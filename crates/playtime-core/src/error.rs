//! Error types for playtime.

use thiserror::Error;

/// Result type alias using playtime's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for playtime.
#[derive(Error, Debug)]
pub enum Error {
    // Input errors
    #[error("Invalid playlist URL: {0}")]
    InvalidUrl(String),

    // Catalog API errors
    #[error("Catalog fetch failed: {0}")]
    CatalogFetch(#[from] FetchError),

    #[error("Video not found: {0}")]
    ItemNotFound(String),

    #[error("Malformed duration: {0:?}")]
    MalformedDuration(String),

    // Statistics errors
    #[error("Cannot average an empty playlist")]
    DivisionByZero,

    #[error("Invalid playback speed: {0}")]
    InvalidSpeed(f64),

    // Generic errors
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// Failures talking to the remote catalog. None of these are retried.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Request failed with status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl Error {
    /// Returns true if the error was caused by user input and can be fixed by
    /// re-running with different arguments.
    pub const fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidUrl(_) | Self::InvalidSpeed(_) | Self::InvalidArgument(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_user_correctable() {
        assert!(Error::InvalidUrl("https://example.com".into()).is_user_error());
        assert!(Error::InvalidSpeed(0.0).is_user_error());
        assert!(!Error::DivisionByZero.is_user_error());
        assert!(!Error::CatalogFetch(FetchError::Timeout).is_user_error());
    }

    #[test]
    fn test_error_display() {
        let err = Error::MalformedDuration("PTxM".into());
        assert_eq!(err.to_string(), "Malformed duration: \"PTxM\"");

        let err: Error = FetchError::Status {
            status: 403,
            message: "quotaExceeded".into(),
        }
        .into();
        assert!(!err.is_user_error());
        assert_eq!(
            err.to_string(),
            "Catalog fetch failed: Request failed with status 403: quotaExceeded"
        );
    }
}
