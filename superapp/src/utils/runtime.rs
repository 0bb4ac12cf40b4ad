//! Global Tokio runtime for background image fetches.
//!
//! eframe owns the main thread and drives egui synchronously, but reqwest
//! needs a Tokio reactor. This static runtime bridges the two:
//! 1. Fetch tasks are spawned onto it from the UI thread
//! 2. Results travel back over an `async_channel` and are drained by
//!    `App::on_tick` on the next frame
//!
//! ```rust,no_run
//! use superapp::utils::runtime::TOKIO_RT;
//!
//! TOKIO_RT.spawn(async move {
//!     // network I/O here; report back through the event channel
//! });
//! ```

use once_cell::sync::Lazy;
use tokio::runtime::Runtime;

pub static TOKIO_RT: Lazy<Runtime> = Lazy::new(|| {
    Runtime::new().expect("Failed to create Tokio runtime for image fetches")
});
