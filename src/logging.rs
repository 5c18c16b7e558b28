//! Tracing subscriber setup
//!
//! Logs go to stderr so the lookup output on stdout stays clean. `RUST_LOG`
//! takes precedence over the filter passed on the command line.

use std::sync::Once;

use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Builds the log filter from `RUST_LOG`, falling back to `default_filter`
///
/// An unparseable fallback filter degrades to `warn`.
pub fn env_filter(default_filter: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Installs the global subscriber; later calls are no-ops
pub fn init_tracing(default_filter: &str) {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_env_filter(env_filter(default_filter))
            .init();
    });
}
