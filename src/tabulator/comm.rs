//! Communication statistics report.
//!
//! Alongside the event logs, client workers and servers emit tag-prefixed
//! scalar samples about the commit protocol: per-phase round-trip
//! latencies and message sizes on the client side, per-phase execution
//! times on the server side. This report averages those samples per sweep
//! coordinate and emits one servers-by-clients table per statistic:
//!
//! - `plat` / `clat`: mean prepare / commit round-trip latency
//! - `psize` / `csize`: mean request+response message size per phase
//! - `pexec` / `cexec`: mean prepare / commit execution time on the server
//!
//! Client samples live in `{dir}/{mix}_{server}_{client}`, server samples
//! in `{dir}/server_{mix}_{server}_{client}`. A coordinate whose log is
//! missing or holds no samples for a tag reads as a missing cell.

use super::oplat::mean_tagged;
use super::pivot::render_pivot_plain;
use std::path::{Path, PathBuf};

/// Statistics emitted by the report, in output order
pub const COMM_STATS: &[&str] = &["plat", "clat", "pexec", "cexec", "psize", "csize"];

/// Render the six communication tables for one workload mix.
///
/// **Public** - report assembly; returns (statistic name, table) pairs in
/// `COMM_STATS` order
pub fn render_comm_tables(
    dir: &Path,
    mix: &str,
    servers: &[String],
    clients: &[String],
) -> Vec<(&'static str, String)> {
    let client_log = |server: &str, client: &str| -> PathBuf {
        dir.join(format!("{}_{}_{}", mix, server, client))
    };
    let server_log = |server: &str, client: &str| -> PathBuf {
        dir.join(format!("server_{}_{}_{}", mix, server, client))
    };

    let mean_cell = |path: PathBuf, tag: &str| mean_tagged(&path, tag).map(|m| m.to_string());
    // Message size per phase is the request mean plus the response mean;
    // if either side has no samples the cell is missing, not half a sum
    let size_cell = |path: PathBuf, req: &str, res: &str| {
        match (mean_tagged(&path, req), mean_tagged(&path, res)) {
            (Some(req), Some(res)) => Some((req + res).to_string()),
            _ => None,
        }
    };

    vec![
        (
            "plat",
            render_pivot_plain(servers, clients, |s, c| mean_cell(client_log(s, c), "plat")),
        ),
        (
            "clat",
            render_pivot_plain(servers, clients, |s, c| mean_cell(client_log(s, c), "clat")),
        ),
        (
            "pexec",
            render_pivot_plain(servers, clients, |s, c| {
                mean_cell(server_log(s, c), "prepare")
            }),
        ),
        (
            "cexec",
            render_pivot_plain(servers, clients, |s, c| {
                mean_cell(server_log(s, c), "commit")
            }),
        ),
        (
            "psize",
            render_pivot_plain(servers, clients, |s, c| {
                size_cell(client_log(s, c), "preqsize", "pressize")
            }),
        ),
        (
            "csize",
            render_pivot_plain(servers, clients, |s, c| {
                size_cell(client_log(s, c), "creqsize", "cressize")
            }),
        ),
    ]
}
