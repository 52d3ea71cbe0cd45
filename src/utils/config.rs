//! Configuration and constants for the CLI.

/// The steady-state window is the middle third of a run: warm-up is
/// `duration / WARMUP_DIVISOR` and the window has the same length.
pub const WARMUP_DIVISOR: f64 = 3.0;

/// Lines starting with this marker are comments
pub const COMMENT_MARKER: char = '#';

/// Minimum whitespace-delimited tokens for a line to be considered an event
pub const MIN_EVENT_TOKENS: usize = 4;

/// Annotation tag carrying the verification key count (YCSB verify weighting)
pub const VERIFY_KEYS_TAG: &str = "verifynkeys";

// Per-client summary files are discovered by name, one file per client
// worker process (e.g. client0.log, client12-log).
pub const CLIENT_LOG_PREFIX: &str = "client";
pub const CLIENT_LOG_SUFFIX: &str = "log";

/// First cell of every pivot table header row
pub const TABLE_HEADER_LABEL: &str = "#Servers";

/// Cell emitted when a coordinate's result file is missing or short.
/// Clearly invalid on purpose: a fabricated zero would plot as real data.
pub const MISSING_CELL: &str = "NA";
