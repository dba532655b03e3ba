//! Logging init: diagnostics to stderr, filtered by `RUST_LOG`.
//!
//! Result lines never go through tracing; they are written to the
//! [`Sink`](crate::sink::Sink) so a log file holds nothing else.

use tracing_subscriber::EnvFilter;

/// Quiet unless something goes wrong; `RUST_LOG=sitestatus=debug` shows request details.
const DEFAULT_FILTER: &str = "warn";

/// Initialize diagnostic logging to stderr.
pub fn init_logging() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
