//! # External Services
//!
//! The only outbound integration is a plain HTTP GET for remote images.
//!
//! - **[`images`]**: [`images::HttpImageFetcher`], the production
//!   [`crate::core::service::ImageFetcher`], and
//!   [`images::default_fetcher`], which falls back to a fetcher that always
//!   fails when no HTTP client can be built

pub mod images;
