//! # Image Client
//!
//! reqwest-backed [`ImageFetcher`] for the icons, ad creatives and place
//! photos referenced by the static content.
//!
//! The client has no auth, retries or timeout. A
//! failed request is reported to the caller, which leaves the placeholder in
//! place.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::Client;

use crate::core::error::ImageFetchError;
use crate::core::service::ImageFetcher;

/// HTTP image fetcher sharing one connection pool across all requests.
pub struct HttpImageFetcher {
    client: Client,
}

impl HttpImageFetcher {
    /// Create a fetcher with a default reqwest client.
    ///
    /// Fails when the client cannot be built, e.g. the TLS backend does not
    /// initialize.
    pub fn new() -> Result<Self, ImageFetchError> {
        let client = Client::builder()
            .user_agent(concat!("superapp/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client })
    }
}

/// Stand-in used when no HTTP client could be built; every fetch fails, so
/// images keep their placeholders.
pub struct UnavailableImageFetcher {
    reason: String,
}

impl UnavailableImageFetcher {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

#[async_trait]
impl ImageFetcher for UnavailableImageFetcher {
    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, ImageFetchError> {
        Err(ImageFetchError::Request(self.reason.clone()))
    }
}

/// The reqwest fetcher, or [`UnavailableImageFetcher`] when the client
/// cannot be built. The failure is logged once here.
pub fn default_fetcher() -> Arc<dyn ImageFetcher> {
    match HttpImageFetcher::new() {
        Ok(fetcher) => Arc::new(fetcher),
        Err(e) => {
            tracing::warn!(error = %e, "HTTP client unavailable, remote images disabled");
            Arc::new(UnavailableImageFetcher::new(e.to_string()))
        }
    }
}

#[async_trait]
impl ImageFetcher for HttpImageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>, ImageFetchError> {
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ImageFetchError::Status(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Err(ImageFetchError::Empty);
        }

        tracing::debug!(url = %url, bytes = bytes.len(), "Image downloaded");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_builds_with_user_agent() {
        assert!(HttpImageFetcher::new().is_ok());
    }

    #[tokio::test]
    async fn test_unavailable_fetcher_fails_every_request() {
        let fetcher = UnavailableImageFetcher::new("no TLS backend");
        match fetcher.fetch("https://example.com/icon.png").await {
            Err(ImageFetchError::Request(reason)) => assert_eq!(reason, "no TLS backend"),
            other => panic!("expected request error, got {:?}", other.map(|b| b.len())),
        }
    }
}
