//! Error types for cinetrend
//!
//! This module defines all error types used throughout the crate. Uses
//! `thiserror` for ergonomic error handling with automatic `Display` and
//! `Error` trait implementations.
//!
//! The two remote collaborators get their own variants so callers can react
//! differently: a catalog failure clears the result list and shows a
//! retry-later message, while a store failure only ever affects the trending
//! section (and is swallowed entirely on the write path).

use thiserror::Error;

/// The primary error type for cinetrend operations.
#[derive(Error, Debug)]
pub enum CinetrendError {
    /// The catalog service could not be reached, or answered with a
    /// non-success HTTP status. Callers show a generic retry-later message.
    #[error("catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The catalog service answered successfully but rejected the request
    /// (legacy `Response: "False"` envelope). Carries the service-provided
    /// message, or a generic fallback when the service sent none.
    #[error("{0}")]
    CatalogRejected(String),

    /// The trending document store failed (transport, auth, or a non-success
    /// response). Swallowed on the record path, surfaced on the read path.
    #[error("trending store unavailable: {0}")]
    StoreUnavailable(String),

    /// Configuration-related errors (missing API token, unreadable config
    /// file, invalid values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Standard I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The debouncer task is gone and can no longer accept input.
    #[error("debouncer channel closed")]
    ChannelClosed,
}

/// A specialized `Result` type for cinetrend operations.
pub type Result<T> = std::result::Result<T, CinetrendError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CinetrendError::Config("missing TMDB_API_KEY".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing TMDB_API_KEY");
    }

    #[test]
    fn test_catalog_rejected_passes_message_through() {
        let err = CinetrendError::CatalogRejected("Movie not found!".to_string());
        assert_eq!(err.to_string(), "Movie not found!");
    }

    #[test]
    fn test_store_unavailable_display() {
        let err = CinetrendError::StoreUnavailable("connection refused".to_string());
        assert_eq!(
            err.to_string(),
            "trending store unavailable: connection refused"
        );
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CinetrendError = io_err.into();
        assert!(matches!(err, CinetrendError::Io(_)));
    }

    #[test]
    fn test_result_type() {
        fn returns_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(returns_result().unwrap(), 42);
    }

    #[test]
    fn test_error_variants() {
        // Ensure all variants can be created
        let _ = CinetrendError::CatalogUnavailable("test".into());
        let _ = CinetrendError::CatalogRejected("test".into());
        let _ = CinetrendError::StoreUnavailable("test".into());
        let _ = CinetrendError::Config("test".into());
        let _ = CinetrendError::ChannelClosed;
    }
}
