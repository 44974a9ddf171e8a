/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers, the change-feed watcher, and the
 * accrual job, and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Missing required headers
 * - Invalid request format
 * - Authentication failures
 *
 * ## Config Errors
 *
 * Config errors occur at startup: missing environment variables, a store
 * that stays unreachable after the retry budget is exhausted, failed
 * migrations.
 *
 * ## Feed Errors
 *
 * Feed errors occur while consuming the change-notification stream. They
 * are reported per item and never terminate the watcher loop. A lookup
 * miss (an update notification whose pixel no longer exists at re-fetch
 * time) gets its own variant so callers can tell it apart from transport
 * failures.
 */

use crate::shared::SharedError;
use axum::http::StatusCode;
use thiserror::Error;
use uuid::Uuid;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant includes relevant context and can be converted to an HTTP
/// response.
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., missing headers, invalid request)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Configuration or startup error
    #[error("Config error: {message}")]
    ConfigError {
        /// Human-readable error message
        message: String,
    },

    /// Change-feed processing error (malformed payload, transport failure)
    #[error("Feed error: {message}")]
    FeedError {
        /// Human-readable error message
        message: String,
    },

    /// An update notification raced with an out-of-band delete: the pixel
    /// was gone by the time the watcher re-fetched it. No event is emitted
    /// for this item; the watcher keeps consuming.
    #[error("Pixel {id} not found at re-fetch time")]
    LookupMiss {
        /// Document key carried by the update notification
        id: Uuid,
    },

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Create a new change-feed error
    pub fn feed(message: impl Into<String>) -> Self {
        Self::FeedError {
            message: message.into(),
        }
    }

    /// Create a lookup-miss error for an update notification whose pixel
    /// no longer exists
    pub fn lookup_miss(id: Uuid) -> Self {
        Self::LookupMiss { id }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `ConfigError` - 500 Internal Server Error
    /// - `FeedError` / `LookupMiss` - 500 Internal Server Error (these never
    ///   reach HTTP in practice; the watcher consumes them)
    /// - `DatabaseError` - 500 Internal Server Error
    /// - `SharedError` - Depends on the shared error type
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::ConfigError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::FeedError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::LookupMiss { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
            },
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::ConfigError { message } => message.clone(),
            Self::FeedError { message } => message.clone(),
            Self::LookupMiss { id } => format!("Pixel {} not found at re-fetch time", id),
            Self::DatabaseError(err) => err.to_string(),
            Self::SharedError(err) => err.to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handler_error() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Invalid request");
        match error {
            BackendError::HandlerError { status, message } => {
                assert_eq!(status, StatusCode::BAD_REQUEST);
                assert_eq!(message, "Invalid request");
            }
            _ => panic!("Expected HandlerError"),
        }
    }

    #[test]
    fn test_lookup_miss() {
        let id = Uuid::new_v4();
        let error = BackendError::lookup_miss(id);
        match error {
            BackendError::LookupMiss { id: miss_id } => assert_eq!(miss_id, id),
            _ => panic!("Expected LookupMiss"),
        }
    }

    #[test]
    fn test_status_code_mapping() {
        let handler_error = BackendError::handler(StatusCode::UNAUTHORIZED, "Unauthorized");
        assert_eq!(handler_error.status_code(), StatusCode::UNAUTHORIZED);

        let config_error = BackendError::config("DATABASE_URL missing");
        assert_eq!(config_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let feed_error = BackendError::feed("malformed payload");
        assert_eq!(feed_error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let validation: BackendError = SharedError::validation("color", "bad").into();
        assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_error_message() {
        let error = BackendError::handler(StatusCode::BAD_REQUEST, "Test message");
        assert!(error.message().contains("Test message"));

        let id = Uuid::new_v4();
        let miss = BackendError::lookup_miss(id);
        assert!(miss.message().contains(&id.to_string()));
    }
}
