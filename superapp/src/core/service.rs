//! # Service Traits
//!
//! Traits for dependency injection, so the UI can be driven in tests without
//! touching the network.

use async_trait::async_trait;

use crate::core::error::ImageFetchError;

/// Fetches raw (still encoded) image bytes for a URL.
///
/// Implementations must be cheap to share: the app holds one instance behind
/// an `Arc` and calls it from many concurrently spawned tasks.
#[async_trait]
pub trait ImageFetcher: Send + Sync {
    /// Download the bytes behind `url`.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError>;
}
