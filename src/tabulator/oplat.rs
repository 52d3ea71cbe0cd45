//! Per-operation mean latency blocks.
//!
//! A distinct report mode: instead of one table per metric, emit one block
//! per server listing mean latency per operation tag across the client
//! axis. Input files are already filtered to one operation each
//! (`{dir}/{op}_{mix}_{server}_{client}`); every matching line carries the
//! tag and one latency sample.

use crate::utils::config::MISSING_CELL;
use log::warn;
use std::fs;
use std::path::Path;

/// Mean of the tag-prefixed samples in one log.
///
/// Sample lines are `"{tag} {value}"`; anything else in the file is
/// ignored. A missing file or a file with no samples yields `None`. A
/// sample that fails to parse is skipped with a warning rather than
/// poisoning the mean. Shared by the op-latency and communication reports,
/// whose inputs are both streams of tagged scalar samples.
pub fn mean_tagged(path: &Path, tag: &str) -> Option<f64> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            warn!("missing sample log {}: {}", path.display(), e);
            return None;
        }
    };

    let prefix = format!("{} ", tag);
    let mut sum = 0.0;
    let mut count = 0u64;
    for line in text.lines() {
        let Some(rest) = line.strip_prefix(&prefix) else {
            continue;
        };
        match rest.split_whitespace().next().map(str::parse::<f64>) {
            Some(Ok(value)) => {
                sum += value;
                count += 1;
            }
            _ => warn!("unparseable {} sample in {}: {:?}", tag, path.display(), line),
        }
    }

    (count > 0).then(|| sum / count as f64)
}

/// Render the stacked per-server blocks for one workload mix.
///
/// **Public** - block report assembly
///
/// Each server contributes one block, preceded by a blank line:
/// the server label, an `Op` header over the client labels, then one row
/// per operation tag in the caller-supplied vocabulary.
pub fn render_op_blocks(
    dir: &Path,
    mix: &str,
    servers: &[String],
    clients: &[String],
    ops: &[String],
) -> String {
    let mut out = String::new();
    for server in servers {
        out.push('\n');
        out.push_str(server);
        out.push('\n');

        out.push_str("Op");
        for client in clients {
            out.push_str(&format!("\t{}", client));
        }
        out.push('\n');

        for op in ops {
            out.push_str(op);
            for client in clients {
                let path = dir.join(format!("{}_{}_{}_{}", op, mix, server, client));
                match mean_tagged(&path, op) {
                    Some(mean) => out.push_str(&format!("\t{}", mean)),
                    None => out.push_str(&format!("\t{}", MISSING_CELL)),
                }
            }
            out.push('\n');
        }
    }
    out
}
