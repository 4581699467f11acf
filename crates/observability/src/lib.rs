//! Tracing/logging setup shared by tests and benches.
//!
//! The library crates only emit `tracing` events; installing a subscriber
//! is the embedding process's job. Tests and benches use [`init`] to get
//! readable stage-count logs when `RUST_LOG` asks for them.

use tracing_subscriber::EnvFilter;

/// Install a compact stderr subscriber for the process.
///
/// Filtering follows `RUST_LOG`, defaulting to `warn` so test output
/// stays quiet unless asked otherwise. Safe to call multiple times;
/// subsequent calls are no-ops.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .compact()
        .with_writer(std::io::stderr)
        .try_init();
}
