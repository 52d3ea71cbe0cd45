//! Bench Sweep
//!
//! Reduces raw per-client benchmark event logs into compact numeric
//! summaries, folds those summaries across experiment sweeps, and emits
//! pivot-style tables suitable for plotting.
//!
//! The pipeline has two reduction stages:
//!
//! 1. **reduce**: one raw client log in, one fixed-schema summary record
//!    out, measured over the steady-state middle third of the run.
//! 2. **aggregate / tabulate**: summaries folded per sweep coordinate
//!    (workload mix x servers x clients x theta) into rate metrics, then
//!    assembled into servers-by-clients tables, one per metric.
//!
//! The tool is offline, single-threaded and deterministic: re-running it
//! over the same inputs produces byte-identical outputs.

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod reducer;
pub mod tabulator;
pub mod utils;
pub mod workload;
