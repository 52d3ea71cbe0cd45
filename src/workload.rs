//! Workload variants and their vocabularies.
//!
//! The workload decides three things: how opcodes map onto latency
//! categories, the positional field order of the summary schema, and the
//! metric names used when tabulating a sweep. Everything else in the
//! pipeline is workload-agnostic.

use crate::parser::event::RawEvent;
use clap::ValueEnum;
use serde::Serialize;

/// Supported benchmark workloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Workload {
    /// Transactional order-entry workload (five transaction classes)
    Tpcc,
    /// Key-value workload (read/write/history plus weighted verify)
    Ycsb,
}

/// One positional field of the summary schema.
///
/// The same ordered field list drives both the writer and every reader,
/// so field meaning cannot drift between the reducer and the
/// aggregator/tabulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    SuccessCount,
    SuccessSum,
    AllCount,
    AllSum,
    WindowLength,
    CategoryCount(usize),
    CategorySum(usize),
    /// Total annotation-derived weight for the verify category (Ycsb only)
    VerifyWeight,
}

impl Workload {
    /// Latency category names, in schema and table order
    pub fn categories(self) -> &'static [&'static str] {
        match self {
            Workload::Tpcc => &["no", "pm", "os", "dl", "sl"],
            Workload::Ycsb => &["read", "write", "history", "verify"],
        }
    }

    /// Whether the schema carries a trailing verify-weight field
    pub fn has_verify_weight(self) -> bool {
        matches!(self, Workload::Ycsb)
    }

    /// Index of the category whose events accumulate annotation weight
    pub fn weighted_category(self) -> Option<usize> {
        match self {
            Workload::Tpcc => None,
            Workload::Ycsb => Some(3), // verify
        }
    }

    /// Map an event onto a latency category, if it has one.
    ///
    /// Tpcc opcodes index the five transaction classes directly; anything
    /// out of range stays uncategorized (it still counts toward the
    /// all/success totals). Ycsb reserves opcodes 0..2 for read, write and
    /// history; any other opcode is a verify event iff its sequence token
    /// is positive.
    pub fn classify_opcode(self, event: &RawEvent) -> Option<usize> {
        let op = event.opcode as usize;
        match self {
            Workload::Tpcc => (op < self.categories().len()).then_some(op),
            Workload::Ycsb => {
                if op < 3 {
                    Some(op)
                } else if event.seq > 0 {
                    self.weighted_category()
                } else {
                    None
                }
            }
        }
    }

    /// Ordered positional schema of the summary record.
    ///
    /// This is a versionless contract: consumers index by position, so the
    /// order here must never change for a given workload.
    pub fn schema(self) -> Vec<Field> {
        let mut fields = vec![
            Field::SuccessCount,
            Field::SuccessSum,
            Field::AllCount,
            Field::AllSum,
            Field::WindowLength,
        ];
        for i in 0..self.categories().len() {
            fields.push(Field::CategoryCount(i));
            fields.push(Field::CategorySum(i));
        }
        if self.has_verify_weight() {
            fields.push(Field::VerifyWeight);
        }
        fields
    }

    /// Metrics emitted by the pivot tabulator: (file name stem, line index
    /// into the aggregate record file).
    ///
    /// Lines 0..4 are throughput/latency/abort; category means start at
    /// line 5. Ycsb appends the per-key verify metric after its categories.
    pub fn table_metrics(self) -> Vec<(&'static str, usize)> {
        let mut metrics = vec![("tps", 0), ("lat", 1), ("abort", 4)];
        for (i, name) in self.categories().iter().enumerate() {
            metrics.push((*name, 5 + i));
        }
        if self.has_verify_weight() {
            metrics.push(("verifyperkey", 5 + self.categories().len()));
        }
        metrics
    }
}
