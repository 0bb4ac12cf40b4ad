//! Debug configuration from environment variables

use std::path::PathBuf;

/// Main log file prefix; the daily appender adds a `.YYYY-MM-DD` suffix
pub const LOG_FILE_NAME: &str = "superapp.log";
/// Realtime log file name, truncated at startup
pub const REALTIME_LOG_FILE_NAME: &str = "superapp-realtime.log";

const DEFAULT_LOG_LEVEL: &str = "superapp=info,warn";

/// Debug system configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugConfig {
    /// Main log path before rotation; files on disk are `<prefix>.YYYY-MM-DD`
    pub log_file_prefix: PathBuf,
    /// Log level filter (e.g., "superapp=debug,info")
    pub log_level: String,
    /// Log directory (for rotation)
    pub log_dir: PathBuf,
    /// Enable realtime debug log (separate from main log)
    pub enable_realtime_log: bool,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

impl DebugConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let log_dir = lookup("SUPERAPP_LOG_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("logs"));

        Self {
            log_file_prefix: log_dir.join(LOG_FILE_NAME),
            log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
            log_dir,
            enable_realtime_log: lookup("SUPERAPP_DEBUG_REALTIME")
                .map(|v| v == "1")
                .unwrap_or(cfg!(feature = "debug-mode")),
        }
    }

    /// The names the daily appender gives the main log, for display
    pub fn log_file_pattern(&self) -> String {
        format!("{}.YYYY-MM-DD", self.log_file_prefix.display())
    }

    /// Check if debug logging is enabled
    pub fn is_debug_enabled(&self) -> bool {
        self.log_level.contains("debug") || self.is_trace_enabled()
    }

    /// Check if trace logging is enabled
    pub fn is_trace_enabled(&self) -> bool {
        self.log_level.contains("trace")
    }
}
