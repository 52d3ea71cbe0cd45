//! Fold per-client summaries into run-level rates.

use crate::reducer::SummaryRecord;
use crate::utils::error::AggregateError;
use crate::workload::Workload;
use serde::Serialize;

/// Run-level derived metrics for one sweep coordinate.
///
/// Serialized as 10 positional lines consumed by the pivot tabulator:
/// success throughput/latency, total throughput/latency, abort rate, then
/// one mean latency per category (Ycsb appends the per-key verify metric).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateRecord {
    pub workload: Workload,
    pub throughput_success: f64,
    pub mean_latency_success: f64,
    pub throughput_all: f64,
    pub mean_latency_all: f64,
    pub abort_rate: f64,
    /// Mean latency per category, in `Workload::categories()` order
    pub category_means: Vec<f64>,
    /// Verify latency per touched key (Ycsb only)
    pub verify_per_key: Option<f64>,
}

/// Guarded ratio: a zero denominator is a defined degenerate case, not an
/// error. Some categories legitimately never occur at a sweep point (no
/// history events in a read-only mix), and those report a literal 0.
pub fn ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        numerator / denominator
    } else {
        0.0
    }
}

/// Fold N client summaries sharing one sweep coordinate into one record.
///
/// **Public** - main entry point of the aggregator
///
/// Counts and sums combine additively field-by-field; the window length is
/// taken verbatim since every client in a run shares the configured
/// duration. Folding is associative: aggregating incrementally or all at
/// once yields the same totals.
///
/// # Errors
/// * `AggregateError::Empty` - no summaries supplied
/// * `AggregateError::MixedWorkloads` - summaries disagree on schema
pub fn aggregate(summaries: &[SummaryRecord]) -> Result<AggregateRecord, AggregateError> {
    let first = summaries.first().ok_or(AggregateError::Empty)?;
    let workload = first.workload;
    if summaries.iter().any(|s| s.workload != workload) {
        return Err(AggregateError::MixedWorkloads);
    }

    let mut total = SummaryRecord::new(workload);
    total.window_len = first.window_len;
    for summary in summaries {
        total.success.merge(summary.success);
        total.all.merge(summary.all);
        total.failure.merge(summary.failure);
        for (into, from) in total.categories.iter_mut().zip(&summary.categories) {
            into.merge(*from);
        }
        total.verify_weight += summary.verify_weight;
    }

    let category_means: Vec<f64> = total
        .categories
        .iter()
        .map(|bucket| ratio(bucket.sum as f64, bucket.count as f64))
        .collect();

    let verify_per_key = workload.weighted_category().map(|index| {
        // Per-key rule: divide by the annotation-derived weight, not the
        // event count
        ratio(total.categories[index].sum as f64, total.verify_weight)
    });

    Ok(AggregateRecord {
        workload,
        throughput_success: ratio(total.success.count as f64, total.window_len),
        mean_latency_success: ratio(total.success.sum as f64, total.success.count as f64),
        throughput_all: ratio(total.all.count as f64, total.window_len),
        mean_latency_all: ratio(total.all.sum as f64, total.all.count as f64),
        abort_rate: ratio(
            (total.all.count - total.success.count) as f64,
            total.all.count as f64,
        ),
        category_means,
        verify_per_key,
    })
}

impl AggregateRecord {
    /// Serialize to the positional line format read by the tabulator
    pub fn to_lines(&self) -> Vec<String> {
        let mut lines = vec![
            self.throughput_success.to_string(),
            self.mean_latency_success.to_string(),
            self.throughput_all.to_string(),
            self.mean_latency_all.to_string(),
            self.abort_rate.to_string(),
        ];
        lines.extend(self.category_means.iter().map(|m| m.to_string()));
        if let Some(per_key) = self.verify_per_key {
            lines.push(per_key.to_string());
        }
        lines
    }

    /// Parse a record back from positional lines (used by `inspect`)
    pub fn from_lines(
        workload: Workload,
        lines: &[&str],
        origin: &str,
    ) -> Result<Self, AggregateError> {
        let categories = workload.categories().len();
        let expected = 5 + categories + usize::from(workload.has_verify_weight());
        if lines.len() < expected {
            return Err(AggregateError::SchemaMismatch {
                path: origin.to_string(),
                expected,
                found: lines.len(),
            });
        }

        let field = |index: usize| -> Result<f64, AggregateError> {
            lines[index]
                .trim()
                .parse::<f64>()
                .map_err(|e| AggregateError::BadField {
                    path: origin.to_string(),
                    index,
                    reason: format!("bad number {:?}: {}", lines[index], e),
                })
        };

        let mut category_means = Vec::with_capacity(categories);
        for i in 0..categories {
            category_means.push(field(5 + i)?);
        }
        let verify_per_key = if workload.has_verify_weight() {
            Some(field(5 + categories)?)
        } else {
            None
        };

        Ok(AggregateRecord {
            workload,
            throughput_success: field(0)?,
            mean_latency_success: field(1)?,
            throughput_all: field(2)?,
            mean_latency_all: field(3)?,
            abort_rate: field(4)?,
            category_means,
            verify_per_key,
        })
    }
}
