//! Event classifier: one raw log line in, one typed verdict out.
//!
//! Client workers emit line-oriented logs. Most lines are completed
//! operations, but the stream also carries comments, blank lines, progress
//! noise and out-of-band scalar annotations. Classification is a pure
//! function of the line text; it holds no state.

use crate::utils::config::{COMMENT_MARKER, MIN_EVENT_TOKENS, VERIFY_KEYS_TAG};
use crate::utils::error::ParseError;
use crate::workload::Workload;
use serde::Serialize;

/// Completion status of one logged operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Status {
    Success,
    Failure,
}

impl Status {
    /// Clients log status as an integer column; 1 is success, everything
    /// else is a failure/abort.
    fn from_raw(raw: i64) -> Self {
        if raw == 1 {
            Status::Success
        } else {
            Status::Failure
        }
    }
}

/// One completed operation, as parsed from a single log line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawEvent {
    /// First token of the line; positive values mark verifiable events
    /// in the key-value workload
    pub seq: u64,
    pub completion_timestamp: f64,
    pub latency: u64,
    pub status: Status,
    pub opcode: u32,
    /// Reserved: the log format defines this column but no client
    /// populates it, so it is always 0
    pub extra_flag: i64,
}

/// Out-of-band scalar updates embedded in the event stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Annotation {
    /// Number of keys touched by subsequent verify events; weights the
    /// per-key verify metric
    VerifyKeyCount(f64),
}

/// Verdict for one log line
#[derive(Debug, Clone, PartialEq)]
pub enum Classified {
    Event(RawEvent),
    Annotation(Annotation),
    Skip,
}

/// Classify one raw log line.
///
/// **Public** - the single entry point of the classifier
///
/// A line is `Skip` when it is blank, a comment, its first token is not a
/// non-negative integer, or it has fewer than 4 tokens. A line starting
/// with the `verifynkeys` tag is an `Annotation`; only the key-value
/// workload defines that tag, so other workloads fall through to the
/// ordinary skip checks. Everything else must be a well-formed event: a
/// line that passes the skip checks but fails to parse is a
/// `MalformedLine` error, which aborts the whole file. It means the log
/// format is corrupted or incompatible, not noisy.
///
/// `line_no` is 1-based and only used for error reporting.
pub fn classify_line(
    line: &str,
    workload: Workload,
    line_no: usize,
) -> Result<Classified, ParseError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with(COMMENT_MARKER) {
        return Ok(Classified::Skip);
    }

    if workload.has_verify_weight() {
        if let Some(rest) = trimmed.strip_prefix(VERIFY_KEYS_TAG) {
            let value = rest.trim().parse::<f64>().map_err(|e| {
                ParseError::MalformedAnnotation {
                    line_no,
                    reason: format!("bad {} value: {}", VERIFY_KEYS_TAG, e),
                }
            })?;
            return Ok(Classified::Annotation(Annotation::VerifyKeyCount(value)));
        }
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().collect();

    // Progress/noise lines: first token must be a bare non-negative integer
    let Ok(seq) = tokens[0].parse::<u64>() else {
        return Ok(Classified::Skip);
    };
    if tokens.len() < MIN_EVENT_TOKENS {
        return Ok(Classified::Skip);
    }

    // From here on the line claims to be an event; every field is required
    let completion_timestamp = required_token(&tokens, 2, "completion timestamp", line_no)?;
    let latency = required_token(&tokens, 3, "latency", line_no)?;
    let status_raw: i64 = required_token(&tokens, 4, "status", line_no)?;
    let opcode = required_token(&tokens, 5, "opcode", line_no)?;

    Ok(Classified::Event(RawEvent {
        seq,
        completion_timestamp,
        latency,
        status: Status::from_raw(status_raw),
        opcode,
        extra_flag: 0,
    }))
}

/// Fetch and parse a required event token
///
/// **Private** - internal helper for classify_line
fn required_token<T: std::str::FromStr>(
    tokens: &[&str],
    index: usize,
    name: &str,
    line_no: usize,
) -> Result<T, ParseError>
where
    T::Err: std::fmt::Display,
{
    let raw = tokens.get(index).ok_or_else(|| ParseError::MalformedLine {
        line_no,
        reason: format!("missing {} (token {})", name, index),
    })?;

    raw.parse::<T>().map_err(|e| ParseError::MalformedLine {
        line_no,
        reason: format!("bad {} {:?}: {}", name, raw, e),
    })
}
