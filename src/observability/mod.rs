//! Logging setup for the `scoreboard` binary.
//!
//! Library code logs through `tracing` (board operations) and `log` (config
//! discovery). The subscriber installed here handles both: `tracing-subscriber`
//! bridges `log` records when it is initialized. Everything goes to stderr so
//! standings written to stdout stay machine-readable.
//!
//! `RUST_LOG` wins when set; otherwise the level follows the `-v` count.

use tracing_subscriber::EnvFilter;

/// Default filter directive for a `-v` count
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init_logging(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
