//! CLI argument parsing
//!
//! ```text
//! textbridge [--config <FILE>] [--json] <mode>
//!
//! MODES:
//!   analyze [TEXT] [--stdin]        Analyze TEXT (absent → "Empty input") or stdin
//!   call <METHOD> [--args <JSON>]   Dispatch one method call
//!   methods                         List registered methods
//!   serve                           Serve JSON method calls on stdin/stdout
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Parsed CLI arguments
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "textbridge", version, about = "Text statistics over a method channel")]
pub struct Args {
    /// Configuration file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// CLI mode
    #[command(subcommand)]
    pub mode: Mode,
}

/// CLI modes
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Mode {
    /// Count letters and words in TEXT
    Analyze {
        /// Text to analyze (omit for absent input)
        text: Option<String>,

        /// Read the text from stdin instead
        #[arg(long, conflicts_with = "text")]
        stdin: bool,
    },

    /// Dispatch a single method call
    Call {
        /// Method name (e.g. analyzeInput)
        method: String,

        /// Argument map as a JSON object
        #[arg(long = "args", value_name = "JSON")]
        arguments: Option<String>,
    },

    /// List registered methods
    Methods,

    /// Serve line-delimited JSON method calls on stdin/stdout
    Serve,
}
