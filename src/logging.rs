//! Diagnostic logging
//!
//! Events go to stderr so they never mix with command output on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Environment variable holding a `tracing` filter directive
pub const LOG_ENV: &str = "MESS_LOG";

/// Initialize the tracing subscriber.
///
/// Reads `MESS_LOG`, falling back to `default_filter` (from settings) when the
/// variable is unset or invalid. Output: stderr, compact format.
///
/// # Example
/// ```bash
/// MESS_LOG=mess_ledger=debug mess member list
/// ```
pub fn init(default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    // A subscriber may already be installed (e.g. by a test harness).
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
}
