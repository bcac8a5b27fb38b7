//! Keystroke session: newline-delimited JSON over stdin/stdout.
//!
//! An interactive host sends one request per input event and applies the
//! reply before sending the next:
//!
//! ```text
//! → {"text":"12500","cursor":3}
//! ← {"text":"12,500","cursor":4}
//! ```
//!
//! A cursor past the end of the text is clamped. A request that cannot be
//! served gets `{"error":"…"}` and the session continues.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::{CursorError, CursorResult};
use crate::maintain::{CursorFormatter, Maintained};

/// Maximum size of a single request line (1 MiB); form fields are far smaller.
const MAX_LINE_BYTES: usize = 1024 * 1024;

/// One keystroke: the raw field value and the raw cursor.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct KeystrokeRequest {
    pub text: String,
    pub cursor: i64,
}

/// Error reply for a request that could not be served.
#[derive(Debug, Serialize)]
struct ErrorReply {
    error: String,
}

/// Counters reported when the session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub served: usize,
    pub rejected: usize,
}

/// Parse and serve one request line.
pub fn handle_line(formatter: &dyn CursorFormatter, line: &str) -> CursorResult<Maintained> {
    let request: KeystrokeRequest = serde_json::from_str(line)?;
    let length = request.text.chars().count();
    let cursor = usize::try_from(request.cursor).map_err(|_| CursorError::InvalidCursor {
        cursor: request.cursor,
        length,
    })?;
    if cursor > length {
        warn!(cursor, length, "cursor past end of text, clamping");
    }
    Ok(formatter.format_with_cursor(&request.text, cursor.min(length)))
}

/// Serve requests from `reader` until EOF, writing one reply line per request.
///
/// # Errors
///
/// Returns an error if reading or writing fails. Malformed requests are
/// answered with an error reply instead.
pub fn run_session(formatter: &dyn CursorFormatter, reader: &mut impl BufRead, out: &mut impl Write) -> Result<SessionStats> {
    info!("cursor session starting");
    let mut stats = SessionStats::default();
    let mut line_buf = Vec::new();

    loop {
        line_buf.clear();
        let bytes_read = match read_line_limited(reader, &mut line_buf, MAX_LINE_BYTES) {
            Ok(n) => n,
            Err(LineError::TooLong) => {
                warn!(max = MAX_LINE_BYTES, "request line too long");
                stats.rejected += 1;
                write_reply(out, &ErrorReply {
                    error: format!("line exceeds maximum size ({MAX_LINE_BYTES} bytes)"),
                })?;
                continue;
            }
            Err(LineError::Io(e)) => return Err(e),
        };

        // EOF: host closed stdin.
        if bytes_read == 0 {
            info!(served = stats.served, rejected = stats.rejected, "input closed, session ending");
            break;
        }

        let line = match std::str::from_utf8(&line_buf) {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "request line is not UTF-8");
                stats.rejected += 1;
                write_reply(out, &ErrorReply {
                    error: format!("request is not valid UTF-8: {e}"),
                })?;
                continue;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        debug!(raw = trimmed, "received request");

        match handle_line(formatter, trimmed) {
            Ok(result) => {
                stats.served += 1;
                write_reply(out, &result)?;
            }
            Err(e) => {
                warn!(error = %e, "rejected request");
                stats.rejected += 1;
                write_reply(out, &ErrorReply { error: e.to_string() })?;
            }
        }
    }

    Ok(stats)
}

/// Write a reply as a single line.
fn write_reply(out: &mut impl Write, reply: &impl Serialize) -> Result<()> {
    let json = serde_json::to_string(reply).context("failed to serialize reply")?;
    debug!(reply = json, "sending reply");
    out.write_all(json.as_bytes()).context("failed to write reply")?;
    out.write_all(b"\n").context("failed to write newline")?;
    out.flush().context("failed to flush output")?;
    Ok(())
}

enum LineError {
    TooLong,
    Io(anyhow::Error),
}

impl From<anyhow::Error> for LineError {
    fn from(e: anyhow::Error) -> Self {
        Self::Io(e)
    }
}

/// Read a line from `reader` into `buf`, stopping at newline or `max_bytes`.
///
/// Returns the number of bytes read (0 = EOF). Bytes are not decoded here, so
/// a character split across reads is kept intact. An oversized line is
/// consumed through its newline and reported as [`LineError::TooLong`].
fn read_line_limited(reader: &mut impl BufRead, buf: &mut Vec<u8>, max_bytes: usize) -> std::result::Result<usize, LineError> {
    let mut total = 0usize;
    loop {
        let available = reader.fill_buf().context("input fill_buf failed")?;
        if available.is_empty() {
            return Ok(total);
        }
        let (consumed, found_newline) = match available.iter().position(|&b| b == b'\n') {
            Some(pos) => (pos + 1, true),
            None => (available.len(), false),
        };
        if total + consumed > max_bytes {
            reader.consume(consumed);
            if !found_newline {
                skip_to_newline(reader)?;
            }
            return Err(LineError::TooLong);
        }
        buf.extend_from_slice(&available[..consumed]);
        total += consumed;
        reader.consume(consumed);
        if found_newline {
            return Ok(total);
        }
    }
}

fn skip_to_newline(reader: &mut impl BufRead) -> Result<()> {
    loop {
        let rest = reader.fill_buf().context("input fill_buf failed")?;
        if rest.is_empty() {
            return Ok(());
        }
        if let Some(pos) = rest.iter().position(|&b| b == b'\n') {
            reader.consume(pos + 1);
            return Ok(());
        }
        let len = rest.len();
        reader.consume(len);
    }
}
