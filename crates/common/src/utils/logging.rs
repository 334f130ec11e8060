//! Tracing setup for the cars/brands service.
//!
//! Both formats write to stdout and honour `RUST_LOG`. Without it, request
//! spans from `tower_http` and the store mutation events from `service` are
//! logged at info.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const DEFAULT_FILTER: &str = "info,tower_http=info,service=info,server=info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Compact human-readable lines (`logging.format = "compact"`).
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event (`logging.format = "json"`); keeps the target
/// so `service` and `server` events can be told apart.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter())
        .with_target(true)
        .json()
        .with_writer(io::stdout)
        .try_init();
}
