//! # Logging Infrastructure
//!
//! File-based structured logging for the shell.
//!
//! ## Features
//!
//! - **File-based logging**: `logs/superapp.log.YYYY-MM-DD`, one file per day
//! - **Realtime log**: optional pretty-printed `logs/superapp-realtime.log`
//! - **Panic hook**: panics are logged with location and message, plus a
//!   backtrace when `RUST_BACKTRACE` is set
//!
//! ## Configuration
//!
//! Environment variables:
//! - `RUST_LOG`: Log level filter (e.g., `superapp=debug,info`)
//! - `SUPERAPP_LOG_DIR`: Log directory (default: `logs`)
//! - `SUPERAPP_DEBUG_REALTIME`: Enable the realtime log (1=on)

pub mod config;
pub mod logger;

pub use config::DebugConfig;
pub use logger::init as init_logger;

/// Initialize the logging system
///
/// Call this at application startup, before any other operations.
pub fn init() {
    init_logger();
}
