//! Subscriber setup for `tracing` and `log` output.
//!
//! Diagnostics go to stderr so stdout stays clean for tree and JSON output.
//! `RUST_LOG` wins over the `-v` count when set.

use tracing_subscriber::EnvFilter;

/// Filter directive for a `-v` count: none = warn, -v = info, -vv = debug, -vvv = trace
pub fn level_for_verbosity(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber. Calling it twice is harmless.
pub fn init_tracing(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbosity)));

    // try_init also bridges `log` records into the subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
