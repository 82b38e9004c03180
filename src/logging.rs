//! Diagnostic logging setup.
//!
//! User-facing output goes through `println!`; this only wires up the
//! `tracing` events emitted by the core, written to stderr.

use tracing_subscriber::EnvFilter;

/// `RUST_LOG` wins when set; otherwise `debug` with `--verbose`, `error` without.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "error" };
    let filter =
        EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second init (e.g. from tests) is harmless
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .try_init();
}
