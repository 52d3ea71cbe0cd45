use bench_sweep::reducer::{reduce_log, SummaryRecord};
use bench_sweep::workload::Workload;
use pretty_assertions::assert_eq;
use std::io::Cursor;

const DURATION: f64 = 300.0;

// A warm-up event at t=0 pins the analysis window at [100, 200]
const TPCC_LOG: &str = "\
# client 0, tpcc
1 0 0 2 1 0
1 0 100 5 1 0
2 0 150 7 1 1
3 0 400 9 0 0
";

#[test]
fn summary_counts_and_window() {
    let (record, window) = reduce_log(Cursor::new(TPCC_LOG), DURATION, Workload::Tpcc).unwrap();

    assert_eq!(window.start, 100.0);
    assert_eq!(window.end, 200.0);
    assert_eq!(record.window_len, 100.0);

    assert_eq!(record.success.count, 2);
    assert_eq!(record.success.sum, 12);
    assert_eq!(record.all.count, 2);
    assert_eq!(record.categories[0].count, 1);
    assert_eq!(record.categories[0].sum, 5);
    assert_eq!(record.categories[1].count, 1);
    assert_eq!(record.categories[1].sum, 7);
}

#[test]
fn summary_invariants_hold() {
    let (record, _) = reduce_log(Cursor::new(TPCC_LOG), DURATION, Workload::Tpcc).unwrap();

    assert!(record.success.count <= record.all.count);
    assert_eq!(record.all.count, record.success.count + record.failure.count);
    for bucket in &record.categories {
        assert!(bucket.count <= record.all.count);
    }
}

#[test]
fn reduction_is_byte_identical_across_runs() {
    let run = || {
        let (record, _) = reduce_log(Cursor::new(TPCC_LOG), DURATION, Workload::Tpcc).unwrap();
        let mut text = record.to_lines().join("\n");
        text.push('\n');
        text
    };
    assert_eq!(run(), run());
}

#[test]
fn serialized_summary_reads_back() {
    let (record, _) = reduce_log(Cursor::new(TPCC_LOG), DURATION, Workload::Tpcc).unwrap();
    let lines = record.to_lines();
    assert_eq!(lines.len(), 15);

    let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
    let reread = SummaryRecord::from_lines(Workload::Tpcc, &borrowed, "roundtrip").unwrap();
    assert_eq!(reread, record);
}

#[test]
fn noise_lines_are_skipped_without_error() {
    let log = "\
# comment

starting up
1 0 0 2 1 0
1 0 100 5 1 0
";
    let (record, _) = reduce_log(Cursor::new(log), DURATION, Workload::Tpcc).unwrap();
    assert_eq!(record.all.count, 1);
}
