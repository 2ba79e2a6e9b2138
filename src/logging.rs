//! Log subscriber setup for binaries embedding the widget.
//!
//! The library only emits `tracing` events; installing a subscriber is the
//! application's call. `RUST_LOG` takes precedence over the configured level.

use tracing_subscriber::EnvFilter;

/// Build the filter: `RUST_LOG` if set and valid, else `default_level`.
pub fn env_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level))
}

/// Install the global fmt subscriber. Returns false if one was already set.
pub fn init_logging(default_level: &str) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(default_level))
        .try_init()
        .is_ok()
}
