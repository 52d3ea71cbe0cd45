//! Fixed-schema summary record: the unit of exchange between the reducer
//! and the aggregator/tabulator.
//!
//! On disk a summary is N lines of bare decimal numbers in the positional
//! order defined by `Workload::schema()`. Writer and readers both walk
//! that same field list, so a field's meaning cannot silently drift.

use crate::utils::error::AggregateError;
use crate::workload::{Field, Workload};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// A (count, latency sum) pair for one event category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Bucket {
    pub count: u64,
    pub sum: u64,
}

impl Bucket {
    /// Record one event's latency
    pub fn record(&mut self, latency: u64) {
        self.count += 1;
        self.sum += latency;
    }

    /// Additively merge another bucket (client summaries are associative)
    pub fn merge(&mut self, other: Bucket) {
        self.count += other.count;
        self.sum += other.sum;
    }
}

/// Reduced form of one (run, client) log: totals over the analysis window.
///
/// Written once by the reducer and immutable thereafter. The failure
/// bucket is held in memory for completeness but never serialized; it is
/// derivable as `all - success` and the positional contract omits it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRecord {
    pub workload: Workload,
    pub success: Bucket,
    pub all: Bucket,
    pub failure: Bucket,
    /// Realized window length (`end - start`)
    pub window_len: f64,
    /// One bucket per workload category, in `Workload::categories()` order
    pub categories: Vec<Bucket>,
    /// Total annotation-derived weight for verify events (Ycsb; 0 for Tpcc)
    pub verify_weight: f64,
}

impl SummaryRecord {
    /// Fresh all-zero record for the given workload
    pub fn new(workload: Workload) -> Self {
        SummaryRecord {
            workload,
            success: Bucket::default(),
            all: Bucket::default(),
            failure: Bucket::default(),
            window_len: 0.0,
            categories: vec![Bucket::default(); workload.categories().len()],
            verify_weight: 0.0,
        }
    }

    /// Serialize to the positional line format
    ///
    /// **Public** - the writer half of the summary contract
    pub fn to_lines(&self) -> Vec<String> {
        self.workload
            .schema()
            .iter()
            .map(|field| self.render_field(*field))
            .collect()
    }

    /// Parse a record from positional lines
    ///
    /// **Public** - the reader half of the summary contract
    ///
    /// `origin` is only used in error messages (typically the file path).
    pub fn from_lines(
        workload: Workload,
        lines: &[&str],
        origin: &str,
    ) -> Result<Self, AggregateError> {
        let schema = workload.schema();
        if lines.len() < schema.len() {
            return Err(AggregateError::SchemaMismatch {
                path: origin.to_string(),
                expected: schema.len(),
                found: lines.len(),
            });
        }

        let mut record = SummaryRecord::new(workload);
        for (index, field) in schema.iter().enumerate() {
            record.assign_field(*field, lines[index], index, origin)?;
        }
        // success <= all is a writer invariant; a file violating it is corrupt
        if record.success.count > record.all.count || record.success.sum > record.all.sum {
            return Err(AggregateError::BadField {
                path: origin.to_string(),
                index: 0,
                reason: "success totals exceed overall totals".to_string(),
            });
        }
        record.failure = Bucket {
            count: record.all.count - record.success.count,
            sum: record.all.sum - record.success.sum,
        };
        Ok(record)
    }

    /// Read and parse a summary file written by the reducer
    pub fn read_from(path: &Path, workload: Workload) -> Result<Self, AggregateError> {
        let text = fs::read_to_string(path)?;
        let lines: Vec<&str> = text.lines().collect();
        Self::from_lines(workload, &lines, &path.display().to_string())
    }

    fn render_field(&self, field: Field) -> String {
        match field {
            Field::SuccessCount => self.success.count.to_string(),
            Field::SuccessSum => self.success.sum.to_string(),
            Field::AllCount => self.all.count.to_string(),
            Field::AllSum => self.all.sum.to_string(),
            Field::WindowLength => self.window_len.to_string(),
            Field::CategoryCount(i) => self.categories[i].count.to_string(),
            Field::CategorySum(i) => self.categories[i].sum.to_string(),
            Field::VerifyWeight => self.verify_weight.to_string(),
        }
    }

    fn assign_field(
        &mut self,
        field: Field,
        raw: &str,
        index: usize,
        origin: &str,
    ) -> Result<(), AggregateError> {
        let bad = |reason: String| AggregateError::BadField {
            path: origin.to_string(),
            index,
            reason,
        };
        match field {
            Field::SuccessCount => self.success.count = parse_count(raw).map_err(bad)?,
            Field::SuccessSum => self.success.sum = parse_count(raw).map_err(bad)?,
            Field::AllCount => self.all.count = parse_count(raw).map_err(bad)?,
            Field::AllSum => self.all.sum = parse_count(raw).map_err(bad)?,
            Field::WindowLength => self.window_len = parse_float(raw).map_err(bad)?,
            Field::CategoryCount(i) => self.categories[i].count = parse_count(raw).map_err(bad)?,
            Field::CategorySum(i) => self.categories[i].sum = parse_count(raw).map_err(bad)?,
            Field::VerifyWeight => self.verify_weight = parse_float(raw).map_err(bad)?,
        }
        Ok(())
    }
}

fn parse_count(raw: &str) -> Result<u64, String> {
    raw.trim()
        .parse::<u64>()
        .map_err(|e| format!("bad count {:?}: {}", raw, e))
}

fn parse_float(raw: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|e| format!("bad number {:?}: {}", raw, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample(workload: Workload) -> SummaryRecord {
        let mut record = SummaryRecord::new(workload);
        record.success = Bucket { count: 2, sum: 12 };
        record.failure = Bucket { count: 1, sum: 9 };
        record.all = Bucket { count: 3, sum: 21 };
        record.window_len = 100.0;
        record.categories[0] = Bucket { count: 1, sum: 5 };
        record.categories[1] = Bucket { count: 2, sum: 16 };
        record
    }

    #[test]
    fn test_writer_and_reader_share_schema() {
        for workload in [Workload::Tpcc, Workload::Ycsb] {
            let record = sample(workload);
            let lines = record.to_lines();
            assert_eq!(lines.len(), workload.schema().len());

            let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
            let reread = SummaryRecord::from_lines(workload, &borrowed, "test").unwrap();
            assert_eq!(reread, record);
        }
    }

    #[test]
    fn test_window_length_at_fixed_position() {
        // Positional contract: line 4 is always the window length
        let lines = sample(Workload::Tpcc).to_lines();
        assert_eq!(lines[4], "100");
    }

    #[test]
    fn test_short_file_is_schema_mismatch() {
        let result = SummaryRecord::from_lines(Workload::Tpcc, &["1", "2", "3"], "short");
        assert!(matches!(
            result,
            Err(AggregateError::SchemaMismatch { expected: 15, found: 3, .. })
        ));
    }

    #[test]
    fn test_bad_field_reports_index() {
        let mut lines = sample(Workload::Tpcc).to_lines();
        lines[6] = "nope".to_string();
        let borrowed: Vec<&str> = lines.iter().map(String::as_str).collect();
        let result = SummaryRecord::from_lines(Workload::Tpcc, &borrowed, "bad");
        assert!(matches!(
            result,
            Err(AggregateError::BadField { index: 6, .. })
        ));
    }
}
