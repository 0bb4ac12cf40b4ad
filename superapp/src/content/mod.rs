//! # Static Content
//!
//! Compiled-in sample data for every destination. There is no backing store:
//! each function builds a fresh list of display values from literals.
//!
//! ## Modules
//!
//! - **[`models`]**: display-only value types
//! - **[`home`]**: service grid, balance cards, ad banners, challenge, discover cards
//! - **[`search`]**: filter tabs, saved locations, recent chips, recommended places
//! - **[`activity`]**: rewards summary and transaction rows
//! - **[`trip`]**: the in-progress trip shown by the accessory bar

pub mod activity;
pub mod home;
pub mod models;
pub mod search;
pub mod trip;

pub use models::*;
