//! Configuration management
//!
//! Layered with the `config` crate, lowest precedence first:
//! 1. Built-in defaults
//! 2. TOML file (`--config <FILE>`, or `textbridge.toml` in the working directory if present)
//! 3. Environment variables prefixed `TEXTBRIDGE_`, nested keys joined with `__`
//!    (e.g. `TEXTBRIDGE_LOG__LEVEL=debug`, `TEXTBRIDGE_SERVE__MAX_LINE_BYTES=4096`)

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::channel::DEFAULT_CHANNEL;

/// Config file looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "textbridge.toml";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "TEXTBRIDGE";

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Configuration load error: {0}")]
    Load(#[from] ::config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Log output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset (e.g. "warn", "textbridge=debug")
    pub level: String,
    /// Output format
    pub format: LogFormat,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            format: LogFormat::Text,
        }
    }
}

/// Host harness settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServeConfig {
    /// Request lines longer than this are rejected
    pub max_line_bytes: usize,
}

impl Default for ServeConfig {
    fn default() -> Self {
        Self {
            max_line_bytes: 1024 * 1024,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Channel name the dispatcher answers on
    pub channel: String,
    /// Logging settings
    pub log: LogConfig,
    /// Host harness settings
    pub serve: ServeConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            channel: DEFAULT_CHANNEL.to_string(),
            log: LogConfig::default(),
            serve: ServeConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from defaults, file and environment
    ///
    /// An explicit `path` must exist. Without one, `textbridge.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => ::config::File::from(path)
                .format(::config::FileFormat::Toml)
                .required(true),
            None => ::config::File::from(Path::new(DEFAULT_CONFIG_FILE))
                .format(::config::FileFormat::Toml)
                .required(false),
        };

        let settings = ::config::Config::builder()
            .add_source(file)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = settings.try_deserialize()?;
        config.validate()?;
        tracing::debug!(channel = %config.channel, "configuration loaded");
        Ok(config)
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.channel.trim().is_empty() {
            return Err(ConfigError::Invalid("channel name must not be empty".to_string()));
        }
        if self.serve.max_line_bytes == 0 {
            return Err(ConfigError::Invalid(
                "serve.max_line_bytes must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
