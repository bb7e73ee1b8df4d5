//! Logging infrastructure for the Stride binaries.
//!
//! Centralized tracing setup. Diagnostics go to stderr so that report
//! lines on stdout stay clean for piping.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize logging with the default INFO level
pub fn init() {
    init_with_level("info")
}

/// Initialize logging with a specific default level
///
/// The RUST_LOG environment variable still takes precedence when set.
pub fn init_with_level(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}
