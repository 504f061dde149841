//! CLI command definitions and terminal setup.
//!
//! Uses clap derive macros for argument definitions.

pub mod args;

use tracing_subscriber::EnvFilter;

/// Route `tracing` output to stderr.
///
/// The filter comes from `RUST_LOG` and defaults to `warn`, so a swallowed
/// fetch failure shows up as a single bare line unless more is requested.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(false)
        .without_time()
        .init();
}
