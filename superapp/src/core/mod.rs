//! # Core Abstractions
//!
//! Core traits and error types shared by every layer of the app.
//!
//! - **[`error`]**: application error types (`AppError`, `ImageFetchError`, `Result<T>`)
//! - **[`service`]**: service traits for dependency injection (`ImageFetcher`)
//!
//! ## Dependency Injection
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use superapp::core::service::ImageFetcher;
//! use superapp::services::images::HttpImageFetcher;
//!
//! # fn main() -> Result<(), superapp::core::ImageFetchError> {
//! // In production: the reqwest-backed fetcher
//! let fetcher: Arc<dyn ImageFetcher> = Arc::new(HttpImageFetcher::new()?);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod service;

pub use error::{AppError, ImageFetchError, Result};
pub use service::ImageFetcher;
