//! File-based logging initialization

use std::any::Any;
use std::backtrace::Backtrace;
use std::fs::{self, File};
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::config::{DebugConfig, LOG_FILE_NAME, REALTIME_LOG_FILE_NAME};

/// Initialize the logging system
///
/// Installs a daily-rotating file log under the configured directory and,
/// when enabled, a pretty realtime log that is truncated on every start.
/// Both writers are non-blocking so a slow disk never stalls a frame.
pub fn init() {
    let config = DebugConfig::from_env();

    if let Err(e) = fs::create_dir_all(&config.log_dir) {
        eprintln!("superapp: cannot create log directory {:?}: {}", config.log_dir, e);
        return;
    }

    let filter = EnvFilter::try_new(&config.log_level)
        .unwrap_or_else(|_| EnvFilter::new("superapp=info,warn"));

    let (main_writer, main_guard) =
        tracing_appender::non_blocking(tracing_appender::rolling::daily(&config.log_dir, LOG_FILE_NAME));
    let main_layer = fmt::layer()
        .with_writer(main_writer)
        .with_ansi(false)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let mut guards: Vec<WorkerGuard> = vec![main_guard];
    let realtime_layer = if config.enable_realtime_log {
        open_realtime_log(&config.log_dir).map(|file| {
            let (writer, guard) = tracing_appender::non_blocking(file);
            guards.push(guard);
            fmt::layer().with_writer(writer).with_ansi(false).with_thread_names(true).pretty()
        })
    } else {
        None
    };

    // Option<Layer> is itself a layer; None adds nothing
    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(main_layer)
        .with(realtime_layer)
        .try_init();

    if let Err(e) = installed {
        eprintln!("superapp: logging already initialized: {}", e);
        return;
    }

    // Writers flush on guard drop; they must live until exit
    guards.into_iter().for_each(std::mem::forget);

    install_panic_hook();

    tracing::info!(
        log_dir = %config.log_dir.display(),
        log_files = %config.log_file_pattern(),
        log_level = %config.log_level,
        realtime_log = config.enable_realtime_log,
        "Logging initialized"
    );
}

fn open_realtime_log(dir: &Path) -> Option<File> {
    let path = dir.join(REALTIME_LOG_FILE_NAME);
    match File::create(&path) {
        Ok(file) => Some(file),
        Err(e) => {
            eprintln!("superapp: cannot create realtime log {:?}: {}", path, e);
            None
        }
    }
}

/// Route panics through tracing before the default hook prints them
///
/// The backtrace is only captured when `RUST_BACKTRACE` (or
/// `RUST_LIB_BACKTRACE`) enables it; otherwise it reads "disabled backtrace".
fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let message = panic_message(info.payload());
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        let backtrace = Backtrace::capture();

        tracing::error!(%location, %message, %backtrace, "panic");
        previous(info);
    }));
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "<non-string panic payload>".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panic_message_reads_str_and_string_payloads() {
        let literal: Box<dyn Any + Send> = Box::new("index out of bounds");
        assert_eq!(panic_message(literal.as_ref()), "index out of bounds");

        let formatted: Box<dyn Any + Send> = Box::new(format!("bad tab {}", 7));
        assert_eq!(panic_message(formatted.as_ref()), "bad tab 7");

        let other: Box<dyn Any + Send> = Box::new(42_u32);
        assert_eq!(panic_message(other.as_ref()), "<non-string panic payload>");
    }

    #[test]
    fn test_caught_panic_payload_is_readable() {
        let payload = std::panic::catch_unwind(|| panic!("render failed on {}", "home"))
            .expect_err("closure panics");
        assert_eq!(panic_message(payload.as_ref()), "render failed on home");
    }

    #[test]
    fn test_captured_backtrace_formats() {
        // Display works whether or not capture is enabled in this environment
        let rendered = Backtrace::capture().to_string();
        assert!(!rendered.is_empty());
    }
}
