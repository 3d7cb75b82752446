//! Logging setup for the command-line tool

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install a stderr `tracing` subscriber filtered by `directives`.
///
/// Stdout is left untouched so command output stays machine-readable.
pub fn init(directives: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(directives)
        .with_context(|| format!("Invalid log filter '{directives}'"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(anyhow::Error::from_boxed)
        .context("Failed to initialize logging")
}
