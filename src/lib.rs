//! Dinosaur Museum Kiosk — Shared Library
//!
//! This crate contains the models, data loading, and query logic
//! behind the museum's information kiosk: dinosaur facts, room
//! cross-references, and ticket pricing with receipts.
//!
//! Each serverless function in `api/` and the `kiosk_demo` binary
//! import from this library to keep handlers thin and logic reusable.

pub mod config;
pub mod data;
pub mod dinosaurs;
pub mod error;
pub mod models;
pub mod rooms;
pub mod ticketing;

pub use error::{DataError, KioskError, KioskResult};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Install the tracing subscriber used by every binary in this crate.
///
/// `RUST_LOG` takes precedence over `default_level`.
pub fn init_logging(default_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A subscriber may already be installed (e.g., by the serverless runtime).
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
