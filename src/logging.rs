//! Diagnostic logging setup
//!
//! User-facing output goes through [`crate::ui`]; this only wires `tracing`
//! events (process invocations, rollback, refresh failures) to stderr.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter directive
pub const LOG_ENV: &str = "APPINSTALL_LOG";

/// Install the global subscriber. Safe to call more than once.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
