//! Development-time tracing for the kiosk library.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the host application, which may use [`init`] or its own setup.

use anyhow::{Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the global tracing subscriber.
///
/// Reads `RUST_LOG`. Defaults to `warn` if unset.
/// Output: stderr, compact format.
///
/// # Example
/// ```bash
/// RUST_LOG=museum=debug ./kiosk-host
/// ```
///
/// # Panics
/// Panics if a global subscriber is already installed; see [`try_init`].
pub fn init() {
    subscriber().init();
}

/// Like [`init`], but reports an already-installed subscriber as an error.
pub fn try_init() -> Result<()> {
    subscriber()
        .try_init()
        .map_err(|err| anyhow!("install tracing subscriber: {}", err))
}

fn subscriber() -> impl SubscriberInitExt {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
}
