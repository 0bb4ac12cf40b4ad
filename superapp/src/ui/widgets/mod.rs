//! # Reusable UI Widgets
//!
//! Presentational components used across screens. Each takes its display
//! value by reference and draws it; none of them own state.

pub mod icons;
pub mod layouts;
pub mod remote_image;

pub mod service_category;
pub mod balance_card;
pub mod ad_banner;
pub mod challenge_card;
pub mod discover_card;

pub mod filter_tab;
pub mod location_item;
pub mod recent_chip;
pub mod recommended_card;

pub mod transaction_row;

pub mod tab_bar;
pub mod accessory_bar;
