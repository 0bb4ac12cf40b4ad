//! # Utility Functions
//!
//! Shared helpers used across the app.
//!
//! ## Modules
//!
//! - **[`runtime`]**: process-wide Tokio runtime for background fetches
//! - **[`text`]**: line splitting for multi-line display strings

pub mod runtime;
pub mod text;
