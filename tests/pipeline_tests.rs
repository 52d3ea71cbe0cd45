//! End-to-end: raw logs -> summaries -> aggregate records -> pivot tables.

use bench_sweep::commands::{
    execute_aggregate, execute_reduce, execute_tabulate, AggregateArgs, ReduceArgs, TabulateArgs,
};
use bench_sweep::workload::Workload;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;

const DURATION: f64 = 30.0;

/// Synthetic client log: `events` (timestamp, latency, status, opcode)
/// rows preceded by a pinning event at t=0 so the window is [10, 20].
fn write_raw_log(path: &Path, events: &[(f64, u64, u8, u32)]) {
    let mut text = String::from("1 0 0 1 1 0\n");
    for (ts, latency, status, opcode) in events {
        text.push_str(&format!("1 0 {} {} {} {}\n", ts, latency, status, opcode));
    }
    fs::write(path, text).unwrap();
}

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn reduce_aggregate_tabulate() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();

    // One run at coordinate (mix=50, servers=1, clients=4, theta=0.9)
    // with two client workers
    let run = path.join("run_1_4");
    fs::create_dir(&run).unwrap();

    write_raw_log(&path.join("c0.raw"), &[(12.0, 5, 1, 0), (15.0, 7, 1, 1)]);
    write_raw_log(&path.join("c1.raw"), &[(13.0, 9, 0, 0)]);

    for (raw, summary) in [("c0.raw", "client0.log"), ("c1.raw", "client1.log")] {
        execute_reduce(ReduceArgs {
            input: path.join(raw),
            duration: DURATION,
            output: run.join(summary),
            workload: Workload::Tpcc,
        })
        .unwrap();
    }

    execute_aggregate(AggregateArgs {
        input_dir: run.clone(),
        output: path.join("50_1_4_0.9"),
        workload: Workload::Tpcc,
    })
    .unwrap();

    // 3 events over the 10-unit window, 2 successful
    let aggregate = fs::read_to_string(path.join("50_1_4_0.9")).unwrap();
    let lines: Vec<&str> = aggregate.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0].parse::<f64>().unwrap(), 0.2); // success throughput
    assert_eq!(lines[2].parse::<f64>().unwrap(), 0.3); // total throughput
    assert_eq!(lines[4].parse::<f64>().unwrap(), 1.0 / 3.0); // abort rate

    // Tabulate a 2x1 grid; the (2 servers, 4 clients) coordinate has no
    // aggregate file, so its cells read as missing
    execute_tabulate(TabulateArgs {
        path: path.to_path_buf(),
        mixes: labels(&["50"]),
        servers: labels(&["1", "2"]),
        clients: labels(&["4"]),
        thetas: labels(&["0.9"]),
        workload: Workload::Tpcc,
    })
    .unwrap();

    let tps = fs::read_to_string(path.join("tps_50_0.9")).unwrap();
    assert_eq!(tps, "\"#Servers\"\t\"4\"\n1\t\"0.2\"\n2\t\"NA\"\n");

    let abort = fs::read_to_string(path.join("abort_50_0.9")).unwrap();
    let abort_cell = abort.lines().nth(1).unwrap().split('\t').nth(1).unwrap();
    assert_eq!(abort_cell, format!("\"{}\"", 1.0 / 3.0));

    // Per-category tables exist for every tpcc transaction class
    for metric in ["lat", "no", "pm", "os", "dl", "sl"] {
        assert!(path.join(format!("{}_50_0.9", metric)).exists());
    }
}

#[test]
fn tabulation_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path();
    fs::write(path.join("50_1_4_0.9"), "1\n2\n3\n4\n5\n6\n7\n8\n9\n10\n").unwrap();

    let args = TabulateArgs {
        path: path.to_path_buf(),
        mixes: labels(&["50"]),
        servers: labels(&["1"]),
        clients: labels(&["4"]),
        thetas: labels(&["0.9"]),
        workload: Workload::Tpcc,
    };

    execute_tabulate(args.clone()).unwrap();
    let first = fs::read_to_string(path.join("tps_50_0.9")).unwrap();
    execute_tabulate(args).unwrap();
    let second = fs::read_to_string(path.join("tps_50_0.9")).unwrap();
    assert_eq!(first, second);
}

#[test]
fn empty_window_produces_no_summary() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("client.raw");
    // The only event pins the window and falls before it
    fs::write(&input, "1 0 100 5 1 0\n").unwrap();

    let output = dir.path().join("client0.log");
    let result = execute_reduce(ReduceArgs {
        input,
        duration: DURATION,
        output: output.clone(),
        workload: Workload::Tpcc,
    });

    assert!(result.is_err());
    assert!(!output.exists());
}
