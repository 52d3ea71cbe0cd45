//! Reduce command implementation.
//!
//! The reduce command:
//! 1. Opens one raw per-client event log
//! 2. Scans it once through the windowed reducer
//! 3. Writes the positional summary record

use crate::output::write_lines;
use crate::reducer::reduce_log;
use crate::workload::Workload;
use anyhow::{Context, Result};
use log::info;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

/// Arguments for the reduce command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReduceArgs {
    /// Raw event log of one (run, client) pair
    pub input: PathBuf,

    /// Total configured run duration (same time unit as the log)
    pub duration: f64,

    /// Output path for the summary record
    pub output: PathBuf,

    /// Workload the log was produced by
    pub workload: Workload,
}

/// Validate reduce arguments
pub fn validate_args(args: &ReduceArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("input path cannot be empty");
    }
    if !(args.duration > 0.0) {
        anyhow::bail!("duration must be positive, got {}", args.duration);
    }
    Ok(())
}

/// Execute the reduce command
///
/// **Public** - main entry point called from main.rs
pub fn execute_reduce(args: ReduceArgs) -> Result<()> {
    validate_args(&args)?;

    info!("Reducing {} (duration {})", args.input.display(), args.duration);

    let file = File::open(&args.input)
        .with_context(|| format!("Failed to open log {}", args.input.display()))?;

    let (record, window) = reduce_log(BufReader::new(file), args.duration, args.workload)
        .with_context(|| format!("Failed to reduce {}", args.input.display()))?;

    info!(
        "Analysis window [{}, {}]: {} events, {} successful",
        window.start, window.end, record.all.count, record.success.count
    );

    write_lines(&record.to_lines(), &args.output).context("Failed to write summary record")?;

    info!("✓ Summary written to: {}", args.output.display());
    Ok(())
}
