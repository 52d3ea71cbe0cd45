//! Tabulate command implementation.
//!
//! For every (mix, theta) pair and every metric in the workload's
//! vocabulary, assemble one servers-by-clients pivot table from the
//! per-coordinate aggregate files and write it next to them.

use crate::output::write_text;
use crate::tabulator::{coordinate_path, read_result_field, render_pivot};
use crate::workload::Workload;
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;

/// Arguments for the tabulate command
///
/// All axis values are opaque labels: they double as path tokens and their
/// order drives row/column order.
#[derive(Debug, Clone)]
pub struct TabulateArgs {
    /// Directory holding the per-coordinate aggregate files
    pub path: PathBuf,

    /// Workload mix labels (e.g. "50" for 50% writes)
    pub mixes: Vec<String>,

    /// Server count labels (table rows)
    pub servers: Vec<String>,

    /// Client count labels (table columns)
    pub clients: Vec<String>,

    /// Contention theta labels
    pub thetas: Vec<String>,

    pub workload: Workload,
}

/// Validate tabulate arguments
pub fn validate_args(args: &TabulateArgs) -> Result<()> {
    for (name, list) in [
        ("mixes", &args.mixes),
        ("servers", &args.servers),
        ("clients", &args.clients),
        ("thetas", &args.thetas),
    ] {
        if list.is_empty() || list.iter().any(String::is_empty) {
            anyhow::bail!("{} labels must be a non-empty comma-separated list", name);
        }
    }
    Ok(())
}

/// Execute the tabulate command
///
/// **Public** - main entry point called from main.rs
pub fn execute_tabulate(args: TabulateArgs) -> Result<()> {
    validate_args(&args)?;

    let metrics = args.workload.table_metrics();
    info!(
        "Tabulating {} metrics over {} mixes x {} thetas",
        metrics.len(),
        args.mixes.len(),
        args.thetas.len()
    );

    for mix in &args.mixes {
        for theta in &args.thetas {
            for (metric, line_index) in &metrics {
                let table = render_pivot(&args.servers, &args.clients, |server, client| {
                    let path = coordinate_path(&args.path, mix, server, client, theta);
                    read_result_field(&path, *line_index)
                });

                let out = args.path.join(format!("{}_{}_{}", metric, mix, theta));
                write_text(&table, &out)
                    .with_context(|| format!("Failed to write table {}", out.display()))?;
                info!("✓ Table written to: {}", out.display());
            }
        }
    }
    Ok(())
}
