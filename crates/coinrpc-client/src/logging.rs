//! Logging bootstrap for binaries and tests.
//!
//! Library code in this SDK only *emits* `tracing` events; installing a
//! subscriber is the application's choice.  [`init_logging`] is the
//! one-liner for programs that just want formatted output on stderr.

use tracing_subscriber::EnvFilter;

/// Installs a formatted `tracing` subscriber.
///
/// The filter comes from the `RUST_LOG` environment variable when set,
/// falling back to `default_filter` (e.g. `"info"` or
/// `"coinrpc_client=debug"`).  Calling this when a subscriber is already
/// installed is a no-op rather than an error, so tests can call it freely.
pub fn init_logging(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
