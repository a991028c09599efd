//! Diagnostic logging setup.
//!
//! Reports go to stdout; diagnostics go to stderr through `tracing`, so the
//! two never interleave in redirected output.

use std::io::{self, IsTerminal};

use tracing_subscriber::{fmt, EnvFilter};

/// Build the filter: `RUST_LOG` when set and valid, otherwise `default_level`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Install the global subscriber. Calling this more than once is harmless.
pub fn init_logging(default_level: &str) {
    let _ = fmt()
        .with_env_filter(build_filter(default_level))
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
