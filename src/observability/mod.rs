//! Tracing initialization.
//!
//! The panel core logs through the `tracing` facade throughout; this module
//! wires up a subscriber for hosts that do not install their own.
//!
//! # Configuration
//!
//! Trace level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` in the panel configuration
//! 3. Default: `"info"`

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Config;

/// Initializes the tracing subscriber.
///
/// Sets up an env-filtered fmt subscriber at the configured level. Best
/// effort and idempotent: if a subscriber is already installed (for example
/// by the host), this call silently does nothing.
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer());

    let _ = subscriber.try_init();
}
