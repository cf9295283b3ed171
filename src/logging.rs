//! Diagnostic logging setup.
//!
//! Diagnostics go through `tracing` to stderr so that command output on
//! stdout stays clean for piping (`gallery list --json | jq`).

use tracing::Level;

/// Install the global fmt subscriber. Safe to call more than once; later
/// calls are ignored.
pub fn init_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
