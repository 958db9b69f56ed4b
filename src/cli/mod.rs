//! CLI module
//!
//! Provides:
//! - Argument parsing for CLI modes
//! - Configuration and logging startup
//! - Mode dispatch (analyze, call, methods, serve)

pub mod args;
pub mod dispatch;

// Re-exports
pub use args::{Args, Mode};
pub use dispatch::{run_cli_mode, run_mode, ExitCode};

/// CLI errors
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid arguments: {0}")]
    InvalidArgs(String),

    #[error("{0}")]
    Config(#[from] crate::config::ConfigError),

    #[error("Logging error: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    #[error("Channel error: {0}")]
    Channel(#[from] crate::channel::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Exit codes (deterministic)
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_CONFIG_ERROR: i32 = 2;

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
