//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while classifying raw log lines
#[derive(Error, Debug)]
pub enum ParseError {
    /// A line passed the skip checks but a required field failed to parse.
    /// This is fatal for the whole file: it indicates a corrupted or
    /// incompatible log format, not ordinary noise.
    #[error("malformed event line {line_no}: {reason}")]
    MalformedLine { line_no: usize, reason: String },

    #[error("malformed annotation line {line_no}: {reason}")]
    MalformedAnnotation { line_no: usize, reason: String },
}

/// Errors that can occur during log reduction
#[derive(Error, Debug)]
pub enum ReduceError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The analysis window retained zero events. Surfaced, never silently
    /// zero-filled, since downstream ratios would divide by zero.
    #[error("empty analysis window: no events completed in steady state")]
    EmptyWindow,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur while reading or folding summary records
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("no client summaries found under {0}")]
    NoInputs(String),

    #[error("cannot aggregate zero summaries")]
    Empty,

    #[error("summaries disagree on workload schema")]
    MixedWorkloads,

    #[error("summary file {path}: expected {expected} fields, found {found}")]
    SchemaMismatch {
        path: String,
        expected: usize,
        found: usize,
    },

    #[error("summary file {path}, field {index}: {reason}")]
    BadField {
        path: String,
        index: usize,
        reason: String,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
