//! Shared infrastructure for the Payvault client crates.
//!
//! Holds the pieces every other crate needs: environment selection
//! (production vs sandbox), logging setup, and currency unit conversions.

mod environment;
pub mod units;

pub use environment::{ParseEnvironmentError, ServiceEnvironment};

/// Install the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG`, defaulting to `info`. Safe to call
/// more than once; later calls are no-ops.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
