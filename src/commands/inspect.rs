//! Inspect command implementation.
//!
//! Debug view: reads a positional summary or aggregate file and prints it
//! as labeled JSON. Positional text stays the pipeline contract; this is
//! for humans checking what a record actually says.

use crate::aggregator::AggregateRecord;
use crate::reducer::SummaryRecord;
use crate::workload::Workload;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Clone)]
pub struct InspectArgs {
    /// Summary or aggregate record file
    pub file: PathBuf,

    /// Workload that defines the file's schema
    pub workload: Workload,

    /// Interpret the file as an aggregate record instead of a summary
    pub aggregate: bool,
}

/// Execute the inspect command
///
/// **Public** - main entry point called from main.rs
pub fn execute_inspect(args: InspectArgs) -> Result<()> {
    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let lines: Vec<&str> = text.lines().collect();
    let origin = args.file.display().to_string();

    let rendered = if args.aggregate {
        let record = AggregateRecord::from_lines(args.workload, &lines, &origin)?;
        serde_json::to_string_pretty(&record)?
    } else {
        let record = SummaryRecord::from_lines(args.workload, &lines, &origin)?;
        serde_json::to_string_pretty(&record)?
    };

    println!("{}", rendered);
    Ok(())
}
