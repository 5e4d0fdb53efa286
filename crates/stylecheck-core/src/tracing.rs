//! Tracing setup shared by the harness binary and tests.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `STYLECHECK_LOG=debug`.
pub const LOG_ENV: &str = "STYLECHECK_LOG";

/// Install the global fmt subscriber. Safe to call more than once; later calls are no-ops.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
