// =============================================================================
// Logging
// =============================================================================

/// Environment variable holding the `tracing` filter directives
pub const LOG_FILTER_ENV: &str = "STRICT_SEMVER_LOG";

/// Filter used when the environment does not provide one
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Output format for commands that print structured data
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Returns the log filter directives.
/// Uses $STRICT_SEMVER_LOG if it is set and not blank,
/// otherwise falls back to [`DEFAULT_LOG_FILTER`].
pub fn log_filter() -> String {
    log_filter_with_env(std::env::var(LOG_FILTER_ENV).ok())
}

fn log_filter_with_env(value: Option<String>) -> String {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}
