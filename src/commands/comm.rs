//! Communication report command implementation.
//!
//! Per workload mix, writes one table per communication statistic
//! (`plat/clat/pexec/cexec/psize/csize`, named `{stat}_{mix}`) from the
//! tag-prefixed client and server sample logs.

use crate::output::write_text;
use crate::tabulator::render_comm_tables;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the communication report command
#[derive(Debug, Clone)]
pub struct CommArgs {
    /// Directory holding the client and server sample logs
    pub path: PathBuf,

    pub mixes: Vec<String>,
    pub servers: Vec<String>,
    pub clients: Vec<String>,
}

/// Validate communication report arguments
pub fn validate_args(args: &CommArgs) -> Result<()> {
    for (name, list) in [
        ("mixes", &args.mixes),
        ("servers", &args.servers),
        ("clients", &args.clients),
    ] {
        if list.is_empty() || list.iter().any(String::is_empty) {
            anyhow::bail!("{} labels must be a non-empty comma-separated list", name);
        }
    }
    Ok(())
}

/// Execute the communication report command
///
/// **Public** - main entry point called from main.rs
pub fn execute_comm(args: CommArgs) -> Result<()> {
    validate_args(&args)?;

    for mix in &args.mixes {
        for (stat, table) in render_comm_tables(&args.path, mix, &args.servers, &args.clients) {
            let out = args.path.join(format!("{}_{}", stat, mix));
            write_text(&table, &out)
                .with_context(|| format!("Failed to write comm table {}", out.display()))?;
            info!("✓ Comm table written to: {}", out.display());
        }
    }
    Ok(())
}
