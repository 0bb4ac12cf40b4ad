//! # Common Error Types
//!
//! Consolidated error handling for the super-app shell.
//!
//! None of these errors ever reach the user: the UI has no error states, and
//! a failed image simply keeps its placeholder. They exist so that the
//! background layers can propagate failures with `?` and log them with
//! context before the UI degrades silently.
//!
//! ## Error Categories
//!
//! - **Image**: remote image fetch failures (network, HTTP status, empty body)
//! - **Config**: theme configuration load/save failures
//!
//! ## Error Conversion
//!
//! - [`ImageFetchError`] → `AppError::Image`
//! - `std::io::Error` / `serde_json::Error` → `AppError::Config`

use thiserror::Error;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Remote image could not be fetched.
    ///
    /// ```rust
    /// use superapp::core::error::AppError;
    ///
    /// let err = AppError::Image("HTTP 404".to_string());
    /// assert_eq!(err.to_string(), "Image error: HTTP 404");
    /// ```
    #[error("Image error: {0}")]
    Image(String),

    /// Theme configuration could not be read or written.
    #[error("Config error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Failure while fetching a single remote image.
#[derive(Debug, Error)]
pub enum ImageFetchError {
    /// Transport-level failure (DNS, TLS, connection reset, body read)
    #[error("request failed: {0}")]
    Request(String),

    /// Server answered with a non-success status
    #[error("unexpected HTTP status {0}")]
    Status(u16),

    /// Server answered 2xx with no bytes
    #[error("empty response body")]
    Empty,
}

impl From<reqwest::Error> for ImageFetchError {
    fn from(err: reqwest::Error) -> Self {
        ImageFetchError::Request(err.to_string())
    }
}

impl From<ImageFetchError> for AppError {
    fn from(err: ImageFetchError) -> Self {
        AppError::Image(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
