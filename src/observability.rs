//! Structured logging.
//!
//! Logs go to stderr through `tracing-subscriber` so they never interleave
//! with the report on stdout.

use std::fmt;
use std::io::IsTerminal;
use std::str::FromStr;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a log filter directive (e.g. `degrees=debug`).
pub const LOG_FILTER_ENV: &str = "DEGREES_LOG";

/// Output format for log lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human readable lines.
    #[default]
    Pretty,
    /// One JSON object per line.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown log format '{other}' (expected pretty or json)")),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive in `EnvFilter` syntax.
    pub filter: String,
    /// Line format.
    pub format: LogFormat,
}

impl LoggingConfig {
    /// Builds the configuration from [`LOG_FILTER_ENV`], falling back to
    /// `debug` when `verbose` is set and `warn` otherwise.
    #[must_use]
    pub fn from_env(verbose: bool, format: LogFormat) -> Self {
        let filter = std::env::var(LOG_FILTER_ENV)
            .ok()
            .filter(|value| !value.trim().is_empty());
        Self::resolve(filter, verbose, format)
    }

    fn resolve(filter: Option<String>, verbose: bool, format: LogFormat) -> Self {
        let filter = filter.unwrap_or_else(|| if verbose { "debug" } else { "warn" }.to_string());
        Self { filter, format }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self::resolve(None, false, LogFormat::default())
    }
}

/// Installs the global subscriber.
///
/// An unparsable filter falls back to `warn`.
///
/// # Errors
///
/// Returns an error if a global subscriber is already installed.
pub fn init(config: &LoggingConfig) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("warn"));

    match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(std::io::stderr().is_terminal())
                    .with_target(true),
            )
            .with(filter)
            .try_init(),
    }
}
