//! Diagnostic logging setup
//!
//! Library code only emits `tracing` events; binaries call [`init_logging`]
//! once to decide where they go. Account data (amounts, metadata) is never
//! put in log fields, only ids and counts.
//!
//! Environment:
//! - `RUST_LOG`: standard filter, wins over the configured level
//! - `LOG_FORMAT`: `pretty` (default), `compact` or `json`
//! - `LOG_LEVEL`: fallback level when `RUST_LOG` is unset

use std::env;

use tracing_subscriber::{fmt, EnvFilter};

use crate::domain::result::{Error, Result};

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Compact,
    Json,
}

impl LogFormat {
    /// Parse format from string, unknown values fall back to pretty
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => LogFormat::Json,
            "compact" => LogFormat::Compact,
            _ => LogFormat::Pretty,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub format: LogFormat,
    /// Level used when `RUST_LOG` is not set
    pub default_level: String,
    /// Include target (module path)
    pub include_target: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::Pretty,
            default_level: "info".to_string(),
            include_target: true,
        }
    }
}

impl LogConfig {
    /// Create config from `LOG_FORMAT` and `LOG_LEVEL`
    pub fn from_env() -> Self {
        Self::default().merge_env()
    }

    /// Let `LOG_FORMAT` and `LOG_LEVEL` override this config
    pub fn merge_env(self) -> Self {
        self.merge_vars(env::var("LOG_FORMAT").ok(), env::var("LOG_LEVEL").ok())
    }

    fn merge_vars(mut self, format: Option<String>, level: Option<String>) -> Self {
        if let Some(format) = format {
            self.format = LogFormat::parse(&format);
        }
        if let Some(level) = level {
            self.default_level = level;
        }
        self
    }

    /// Set the fallback level
    pub fn with_default_level(mut self, level: impl Into<String>) -> Self {
        self.default_level = level.into();
        self
    }

    fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.default_level))
    }
}

/// Install the global subscriber, writing to stderr
///
/// Fails if a subscriber is already installed.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let builder = fmt()
        .with_env_filter(config.env_filter())
        .with_target(config.include_target)
        .with_writer(std::io::stderr);

    let installed = match config.format {
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };

    installed.map_err(|e| Error::Other(format!("failed to initialize logging: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse(" COMPACT "), LogFormat::Compact);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Pretty);
        assert_eq!(LogFormat::parse("fancy"), LogFormat::Pretty);
    }

    #[test]
    fn test_with_default_level() {
        let config = LogConfig::default().with_default_level("warn");
        assert_eq!(config.default_level, "warn");
        assert_eq!(config.format, LogFormat::Pretty);
    }

    #[test]
    fn test_env_values_override_config() {
        let base = LogConfig::default().with_default_level("warn");

        let merged = base.clone().merge_vars(None, None);
        assert_eq!(merged.default_level, "warn");
        assert_eq!(merged.format, LogFormat::Pretty);

        let merged = base.merge_vars(Some("json".to_string()), Some("debug".to_string()));
        assert_eq!(merged.default_level, "debug");
        assert_eq!(merged.format, LogFormat::Json);
    }
}
