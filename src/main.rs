//! Bench Sweep CLI
//!
//! Reduces raw benchmark client logs to summary records, aggregates them
//! per sweep coordinate, and tabulates the sweep into pivot tables.

use anyhow::Result;
use bench_sweep::commands::{
    execute_aggregate, execute_comm, execute_inspect, execute_oplat, execute_reduce,
    execute_tabulate, AggregateArgs, CommArgs, InspectArgs, OpLatencyArgs, ReduceArgs,
    TabulateArgs,
};
use bench_sweep::workload::Workload;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

/// Bench Sweep - benchmark log reduction and sweep tabulation
#[derive(Parser, Debug)]
#[command(name = "bench-sweep")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Reduce one raw client log to a summary record
    Reduce {
        /// Raw event log of one (run, client) pair
        #[arg(short, long)]
        input: PathBuf,

        /// Total configured run duration (log time units)
        #[arg(short, long)]
        duration: f64,

        /// Output path for the summary record
        #[arg(short, long)]
        output: PathBuf,

        /// Workload the log was produced by
        #[arg(short, long, value_enum)]
        workload: Workload,
    },

    /// Fold the client*log summaries of one run into an aggregate record
    Aggregate {
        /// Directory holding the per-client summaries
        #[arg(short, long)]
        input_dir: PathBuf,

        /// Output path for the aggregate record
        #[arg(short, long)]
        output: PathBuf,

        #[arg(short, long, value_enum)]
        workload: Workload,
    },

    /// Emit one pivot table per metric per (mix, theta) pair
    Tabulate {
        /// Directory holding the per-coordinate aggregate files
        #[arg(short, long)]
        path: PathBuf,

        /// Comma-separated workload mix labels
        #[arg(short, long)]
        mixes: String,

        /// Comma-separated server count labels (rows)
        #[arg(short, long)]
        servers: String,

        /// Comma-separated client count labels (columns)
        #[arg(short, long)]
        clients: String,

        /// Comma-separated contention theta labels
        #[arg(short, long)]
        thetas: String,

        #[arg(short, long, value_enum)]
        workload: Workload,
    },

    /// Emit per-operation mean latency blocks (one block per server)
    Oplat {
        /// Directory holding the per-operation filtered logs
        #[arg(short, long)]
        path: PathBuf,

        /// Comma-separated workload mix labels
        #[arg(short, long)]
        mixes: String,

        /// Comma-separated server count labels
        #[arg(short, long)]
        servers: String,

        /// Comma-separated client count labels
        #[arg(short, long)]
        clients: String,

        /// Comma-separated operation tags to extract
        #[arg(short, long)]
        ops: String,
    },

    /// Emit communication statistic tables (latency/size/exec per phase)
    Comm {
        /// Directory holding the client and server sample logs
        #[arg(short, long)]
        path: PathBuf,

        /// Comma-separated workload mix labels
        #[arg(short, long)]
        mixes: String,

        /// Comma-separated server count labels
        #[arg(short, long)]
        servers: String,

        /// Comma-separated client count labels
        #[arg(short, long)]
        clients: String,
    },

    /// Pretty-print a summary or aggregate record as labeled JSON
    Inspect {
        /// Record file to inspect
        #[arg(short, long)]
        file: PathBuf,

        #[arg(short, long, value_enum)]
        workload: Workload,

        /// Interpret the file as an aggregate record
        #[arg(short, long)]
        aggregate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Reduce {
            input,
            duration,
            output,
            workload,
        } => execute_reduce(ReduceArgs {
            input,
            duration,
            output,
            workload,
        })?,

        Commands::Aggregate {
            input_dir,
            output,
            workload,
        } => execute_aggregate(AggregateArgs {
            input_dir,
            output,
            workload,
        })?,

        Commands::Tabulate {
            path,
            mixes,
            servers,
            clients,
            thetas,
            workload,
        } => execute_tabulate(TabulateArgs {
            path,
            mixes: split_list(&mixes),
            servers: split_list(&servers),
            clients: split_list(&clients),
            thetas: split_list(&thetas),
            workload,
        })?,

        Commands::Oplat {
            path,
            mixes,
            servers,
            clients,
            ops,
        } => execute_oplat(OpLatencyArgs {
            path,
            mixes: split_list(&mixes),
            servers: split_list(&servers),
            clients: split_list(&clients),
            ops: split_list(&ops),
        })?,

        Commands::Comm {
            path,
            mixes,
            servers,
            clients,
        } => execute_comm(CommArgs {
            path,
            mixes: split_list(&mixes),
            servers: split_list(&servers),
            clients: split_list(&clients),
        })?,

        Commands::Inspect {
            file,
            workload,
            aggregate,
        } => execute_inspect(InspectArgs {
            file,
            workload,
            aggregate,
        })?,
    }

    Ok(())
}

/// Split a comma-separated axis argument into opaque labels.
/// Labels are kept verbatim; their order drives table row/column order.
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(str::to_string).collect()
}
