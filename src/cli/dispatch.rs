//! CLI mode dispatch
//!
//! Loads configuration, installs logging, builds the method dispatcher and
//! runs the selected mode:
//! - analyze: analyze text directly
//! - call: dispatch one method call
//! - methods: list registered methods
//! - serve: host harness on stdin/stdout

use std::io::{self, BufRead, Read, Write};

use serde_json::Value as JsonValue;

use crate::channel::{MethodCall, MethodDispatcher, MethodReply};
use crate::cli::{Args, Error, Mode, Result, EXIT_CONFIG_ERROR, EXIT_FAILURE, EXIT_SUCCESS};
use crate::config::Config;
use crate::host::serve;
use crate::logging::init_logging;
use crate::text_tools::{analyze, AnalysisReport};

/// Exit code wrapper for CLI operations
pub type ExitCode = i32;

/// Run CLI mode and return exit code
///
/// This is the main entry point, called from main() after argument parsing.
pub fn run_cli_mode(args: Args) -> ExitCode {
    let (config, dispatcher) = match startup(&args) {
        Ok(ready) => ready,
        Err(e) => {
            eprintln!("Error: {}", e);
            return exit_code_for(&e);
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();

    match run_mode(
        args.mode,
        &config,
        &dispatcher,
        args.json,
        stdin.lock(),
        stdout.lock(),
    ) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            exit_code_for(&e)
        }
    }
}

/// Load configuration, install logging and build the dispatcher
fn startup(args: &Args) -> Result<(Config, MethodDispatcher)> {
    let config = Config::load(args.config.as_deref())?;
    init_logging(&config.log)?;
    let dispatcher = MethodDispatcher::with_default_methods(config.channel.clone())?;
    Ok((config, dispatcher))
}

/// Map error to exit code
fn exit_code_for(e: &Error) -> ExitCode {
    match e {
        Error::Config(_) | Error::Logging(_) => EXIT_CONFIG_ERROR,
        _ => EXIT_FAILURE,
    }
}

/// Run specific CLI mode against the given input and output streams
pub fn run_mode<R, W>(
    mode: Mode,
    config: &Config,
    dispatcher: &MethodDispatcher,
    json_output: bool,
    input: R,
    mut output: W,
) -> Result<ExitCode>
where
    R: BufRead,
    W: Write,
{
    match mode {
        Mode::Analyze { text, stdin } => {
            let text = if stdin {
                Some(read_stdin_text(input)?)
            } else {
                text
            };
            run_analyze_mode(text.as_deref(), json_output, &mut output)
        }
        Mode::Call { method, arguments } => {
            run_call_mode(dispatcher, method, arguments.as_deref(), json_output, &mut output)
        }
        Mode::Methods => run_methods_mode(dispatcher, json_output, &mut output),
        Mode::Serve => {
            let summary = serve(dispatcher, input, &mut output, &config.serve)?;
            tracing::debug!(handled = summary.handled, "serve finished");
            Ok(EXIT_SUCCESS)
        }
    }
}

/// Read all of stdin, dropping a single trailing line terminator
fn read_stdin_text<R: Read>(mut input: R) -> Result<String> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}

/// Run analyze mode
fn run_analyze_mode<W: Write>(text: Option<&str>, json_output: bool, output: &mut W) -> Result<ExitCode> {
    let analysis = analyze(text);

    if json_output {
        serde_json::to_writer(&mut *output, &AnalysisReport::from(analysis))?;
        writeln!(output)?;
    } else {
        writeln!(output, "{}", analysis)?;
    }

    Ok(EXIT_SUCCESS)
}

/// Run call mode
///
/// Exit code is success only for a `Success` reply.
fn run_call_mode<W: Write>(
    dispatcher: &MethodDispatcher,
    method: String,
    arguments: Option<&str>,
    json_output: bool,
    output: &mut W,
) -> Result<ExitCode> {
    let arguments = match arguments {
        Some(raw) => serde_json::from_str::<JsonValue>(raw)
            .map_err(|e| Error::InvalidArgs(format!("--args is not valid JSON: {}", e)))?,
        None => JsonValue::Null,
    };

    let call = MethodCall::new(method, arguments);
    let reply = dispatcher.dispatch(&call);

    if json_output {
        serde_json::to_writer(&mut *output, &reply)?;
        writeln!(output)?;
    } else {
        match &reply {
            MethodReply::Success { result } => match result.as_str() {
                Some(s) => writeln!(output, "{}", s)?,
                None => writeln!(output, "{}", result)?,
            },
            MethodReply::NotImplemented => {
                eprintln!("Method not implemented: {}", call.method);
            }
            MethodReply::Error { code, message, .. } => {
                eprintln!("Error [{}]: {}", code, message);
            }
        }
    }

    Ok(if reply.is_success() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    })
}

/// Run methods mode
fn run_methods_mode<W: Write>(
    dispatcher: &MethodDispatcher,
    json_output: bool,
    output: &mut W,
) -> Result<ExitCode> {
    let methods = dispatcher.methods();

    if json_output {
        serde_json::to_writer_pretty(&mut *output, &methods)?;
        writeln!(output)?;
        return Ok(EXIT_SUCCESS);
    }

    writeln!(output, "Channel: {}", dispatcher.channel())?;
    for method in methods {
        writeln!(output, "{}: {}", method.name, method.description)?;
        for arg in &method.arguments {
            let required = if arg.required { "required" } else { "optional" };
            writeln!(output, "  {} ({}): {}", arg.name, required, arg.description)?;
        }
    }

    Ok(EXIT_SUCCESS)
}
