//! # Async Tasks
//!
//! Async task spawning for background work. The only background work is
//! remote image loading.

pub mod images;
