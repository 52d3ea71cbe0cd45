//! Op-latency report command implementation.
//!
//! Per workload mix, writes `avg_{mix}`: one block per server of mean
//! per-operation latencies across the client axis.

use crate::output::write_text;
use crate::tabulator::render_op_blocks;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the op-latency command
#[derive(Debug, Clone)]
pub struct OpLatencyArgs {
    /// Directory holding the per-operation filtered logs
    pub path: PathBuf,

    pub mixes: Vec<String>,
    pub servers: Vec<String>,
    pub clients: Vec<String>,

    /// Operation tag vocabulary (e.g. get,verify,prepare,commit,abort)
    pub ops: Vec<String>,
}

/// Validate op-latency arguments
pub fn validate_args(args: &OpLatencyArgs) -> Result<()> {
    for (name, list) in [
        ("mixes", &args.mixes),
        ("servers", &args.servers),
        ("clients", &args.clients),
        ("ops", &args.ops),
    ] {
        if list.is_empty() || list.iter().any(String::is_empty) {
            anyhow::bail!("{} labels must be a non-empty comma-separated list", name);
        }
    }
    Ok(())
}

/// Execute the op-latency command
///
/// **Public** - main entry point called from main.rs
pub fn execute_oplat(args: OpLatencyArgs) -> Result<()> {
    validate_args(&args)?;

    for mix in &args.mixes {
        let report = render_op_blocks(&args.path, mix, &args.servers, &args.clients, &args.ops);
        let out = args.path.join(format!("avg_{}", mix));
        write_text(&report, &out)
            .with_context(|| format!("Failed to write op-latency report {}", out.display()))?;
        info!("✓ Op-latency report written to: {}", out.display());
    }
    Ok(())
}
