//! Logging setup
//!
//! Installs a `tracing_subscriber` fmt subscriber for binaries and demos.
//! The library itself only emits events.

use tracing_subscriber::EnvFilter;

/// Default filter when none is configured
pub const DEFAULT_FILTER: &str = "info";

/// Initialize the logger at the default level
pub fn init_logger() {
    init_logger_with_filter(None, false);
}

/// Initialize the logger with an optional `EnvFilter` directive
/// (e.g. `precinct_client=debug`) and optional JSON output.
///
/// Calling this twice is harmless; the second call is ignored.
pub fn init_logger_with_filter(filter: Option<&str>, json: bool) {
    let filter = EnvFilter::try_new(filter.unwrap_or(DEFAULT_FILTER))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false);

    let result = if json {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if result.is_err() {
        tracing::debug!("Logger already initialized");
    }
}
