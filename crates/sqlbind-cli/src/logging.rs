//! Logging for the `sqlbind` binary
//!
//! Diagnostics go to stderr so stdout stays reserved for command output.
//! `RUST_LOG` takes precedence over the configured default filter.

use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Emit JSON lines instead of human-readable output
    pub json: bool,

    /// Whether to include file/line information in logs
    pub include_location: bool,

    /// Default log level filter
    pub default_filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            json: false,
            include_location: cfg!(debug_assertions),
            default_filter: "warn,sqlbind=info,sqlbind_core=info".to_string(),
        }
    }
}

impl LoggingConfig {
    /// Verbose configuration used for `--verbose`
    pub fn verbose() -> Self {
        Self {
            default_filter: "info,sqlbind=debug,sqlbind_core=trace".to_string(),
            ..Self::default()
        }
    }
}

/// Initialize the global subscriber
pub fn init(config: LoggingConfig) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.default_filter));

    let layer = if config.json {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_ansi(false)
            .json()
            .with_filter(env_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_file(config.include_location)
            .with_line_number(config.include_location)
            .with_filter(env_filter)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).try_init()?;

    tracing::debug!(json = config.json, "logging initialized");
    Ok(())
}
