//! Line-delimited JSON request loop

use std::io::{self, BufRead, Read, Write};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::channel::{MethodCall, MethodDispatcher, MethodReply};
use crate::config::ServeConfig;

/// Counters reported when the input stream ends
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServeSummary {
    /// Calls decoded and dispatched
    pub handled: usize,
    /// Lines that were not a valid `MethodCall`
    pub malformed: usize,
    /// Lines over the configured size limit
    pub oversized: usize,
}

/// Serve method calls until `reader` reaches EOF
///
/// Blank lines are skipped. Every other line gets exactly one reply line,
/// flushed immediately. Malformed and oversized lines are answered with an
/// error reply and the loop continues. Only I/O errors end the loop early.
///
/// At most `max_line_bytes + 1` bytes of a line are buffered; the rest of an
/// oversized line is consumed and dropped.
pub fn serve<R, W>(
    dispatcher: &MethodDispatcher,
    mut reader: R,
    mut writer: W,
    config: &ServeConfig,
) -> io::Result<ServeSummary>
where
    R: BufRead,
    W: Write,
{
    info!(channel = dispatcher.channel(), "serving method calls");

    let limit = config.max_line_bytes;
    let mut summary = ServeSummary::default();
    let mut line = Vec::new();

    loop {
        line.clear();
        let read = reader
            .by_ref()
            .take((limit as u64).saturating_add(1))
            .read_until(b'\n', &mut line)?;
        if read == 0 {
            break;
        }

        let reply = if line.len() > limit && line.last() != Some(&b'\n') {
            let bytes = line.len() + skip_line(&mut reader)?;
            summary.oversized += 1;
            warn!(bytes, limit, "request too large");
            MethodReply::error(
                "request_too_large",
                format!("Request of {} bytes exceeds limit of {} bytes", bytes, limit),
            )
        } else {
            let request = trim_line(&line);
            if request.is_empty() {
                continue;
            }
            match serde_json::from_slice::<MethodCall>(request) {
                Ok(call) => {
                    summary.handled += 1;
                    dispatcher.dispatch(&call)
                }
                Err(e) => {
                    summary.malformed += 1;
                    warn!(error = %e, "malformed request");
                    MethodReply::error("malformed_request", format!("Malformed request: {}", e))
                }
            }
        };

        write_reply(&mut writer, &reply)?;
    }

    info!(
        handled = summary.handled,
        malformed = summary.malformed,
        oversized = summary.oversized,
        "input closed"
    );
    Ok(summary)
}

/// Consume input through the next newline (or EOF), returning the bytes dropped
fn skip_line<R: BufRead>(reader: &mut R) -> io::Result<usize> {
    let mut skipped = 0;
    loop {
        let (used, done) = {
            let available = reader.fill_buf()?;
            if available.is_empty() {
                return Ok(skipped);
            }
            match available.iter().position(|&b| b == b'\n') {
                Some(i) => (i + 1, true),
                None => (available.len(), false),
            }
        };
        reader.consume(used);
        skipped += used;
        if done {
            return Ok(skipped);
        }
    }
}

/// Strip surrounding ASCII whitespace (including the line terminator)
fn trim_line(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &line[start..end]
}

fn write_reply<W: Write>(writer: &mut W, reply: &MethodReply) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, reply)?;
    writer.write_all(b"\n")?;
    writer.flush()
}
