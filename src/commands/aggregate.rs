//! Aggregate command implementation.
//!
//! Discovers the per-client summary files of one run directory, folds them
//! into an aggregate record, and writes it as positional lines.

use crate::aggregator::aggregate_dir;
use crate::output::write_lines;
use crate::workload::Workload;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the aggregate command
#[derive(Debug, Clone)]
pub struct AggregateArgs {
    /// Directory holding the client*log summaries of one run
    pub input_dir: PathBuf,

    /// Output path for the aggregate record
    pub output: PathBuf,

    pub workload: Workload,
}

/// Validate aggregate arguments
pub fn validate_args(args: &AggregateArgs) -> Result<()> {
    if args.input_dir.as_os_str().is_empty() {
        anyhow::bail!("input directory cannot be empty");
    }
    Ok(())
}

/// Execute the aggregate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_aggregate(args: AggregateArgs) -> Result<()> {
    validate_args(&args)?;

    info!("Aggregating client summaries under {}", args.input_dir.display());

    let record = aggregate_dir(&args.input_dir, args.workload)
        .with_context(|| format!("Failed to aggregate {}", args.input_dir.display()))?;

    info!(
        "Throughput {:.2}/s (success {:.2}/s), abort rate {:.4}",
        record.throughput_all, record.throughput_success, record.abort_rate
    );

    write_lines(&record.to_lines(), &args.output).context("Failed to write aggregate record")?;

    info!("✓ Aggregate written to: {}", args.output.display());
    Ok(())
}
