//! Tracing setup for the binary.
//!
//! Logs go to stderr so they never mix with tables or prompts on stdout. The
//! filter comes from `STOCKPAD_LOG` when set, otherwise `warn` (or `debug` with
//! `--verbose`).

use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "STOCKPAD_LOG";

/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let default_level = if verbose { "stockpad=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
