//! TextBridge CLI
//!
//! Modes:
//! - analyze: count letters and words in text
//! - call: dispatch one method call
//! - methods: list registered methods
//! - serve: answer line-delimited JSON method calls on stdin/stdout

use clap::Parser;

use textbridge::cli::{run_cli_mode, Args};

fn main() {
    let args = Args::parse();
    let exit_code = run_cli_mode(args);
    std::process::exit(exit_code);
}
