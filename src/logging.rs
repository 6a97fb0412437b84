//! Diagnostic logging via `tracing`, written to stderr so stdout stays the
//! user-facing report.
//!
//! Level defaults to `warn`; `NOTEBOOK_FIXTURES_LOG` overrides it with any
//! `EnvFilter` directive (e.g. `debug`, `notebook_fixtures=trace`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "NOTEBOOK_FIXTURES_LOG";

const DEFAULT_DIRECTIVE: &str = "warn";

/// Install the global subscriber. Safe to call more than once.
pub fn init_logging() {
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
