//! Pivot table rendering: servers as rows, clients as columns.

use crate::utils::config::{MISSING_CELL, TABLE_HEADER_LABEL};
use log::warn;
use std::fs;
use std::path::Path;

/// Render one metric as a 2-D pivot table.
///
/// **Public** - core table assembly, independent of where cells come from
///
/// The header row quotes every client label; each body row starts with the
/// bare server label followed by one quoted value per client. Rows and
/// columns follow the caller-supplied order exactly; labels are opaque
/// tokens, never sorted. A `None` cell renders as the missing marker so a
/// hole in the sweep stays visible instead of plotting as a zero.
pub fn render_pivot<F>(servers: &[String], clients: &[String], cell: F) -> String
where
    F: FnMut(&str, &str) -> Option<String>,
{
    render(servers, clients, true, cell)
}

/// Pivot table variant with bare (unquoted) value cells.
///
/// **Public** - used by reports whose cells are computed numbers rather
/// than strings passed through from an intermediate file
pub fn render_pivot_plain<F>(servers: &[String], clients: &[String], cell: F) -> String
where
    F: FnMut(&str, &str) -> Option<String>,
{
    render(servers, clients, false, cell)
}

fn render<F>(servers: &[String], clients: &[String], quote_values: bool, mut cell: F) -> String
where
    F: FnMut(&str, &str) -> Option<String>,
{
    let mut out = String::new();
    out.push_str(&format!("\"{}\"", TABLE_HEADER_LABEL));
    for client in clients {
        out.push_str(&format!("\t\"{}\"", client));
    }
    out.push('\n');

    for server in servers {
        out.push_str(server);
        for client in clients {
            let value = cell(server, client).unwrap_or_else(|| MISSING_CELL.to_string());
            if quote_values {
                out.push_str(&format!("\t\"{}\"", value));
            } else {
                out.push_str(&format!("\t{}", value));
            }
        }
        out.push('\n');
    }
    out
}

/// Read one positional field from a per-coordinate result file.
///
/// **Public** - the cell source used for sweep tabulation
///
/// The file at `path` is an aggregate record (one number per line); the
/// cell value is line `line_index`, passed through verbatim. A missing or
/// short file yields `None`: tabulation keeps going, the cell just reads
/// as missing.
pub fn read_result_field(path: &Path, line_index: usize) -> Option<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("missing result file {}: {}", path.display(), e);
            return None;
        }
    };
    match text.lines().nth(line_index) {
        Some(line) => Some(line.to_string()),
        None => {
            warn!("result file {} has no line {}", path.display(), line_index);
            None
        }
    }
}

/// Path of the aggregate record for one sweep coordinate:
/// `{dir}/{mix}_{server}_{client}_{theta}`
pub fn coordinate_path(
    dir: &Path,
    mix: &str,
    server: &str,
    client: &str,
    theta: &str,
) -> std::path::PathBuf {
    dir.join(format!("{}_{}_{}_{}", mix, server, client, theta))
}
