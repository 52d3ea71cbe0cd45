//! Steady-state analysis window selection.

use crate::utils::config::WARMUP_DIVISOR;
use serde::Serialize;

/// The middle-third time slice of a run used for measurement.
///
/// Derived once per log from the first event's completion timestamp `t0`
/// and the configured run duration `D`: the window is `[t0 + D/3, t0 + 2D/3]`.
/// Warm-up and the trailing partial third are discarded so only
/// steady-state behavior is measured.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AnalysisWindow {
    pub start: f64,
    pub end: f64,
}

impl AnalysisWindow {
    /// Derive the window from the first event of the stream
    pub fn from_first_event(first_ts: f64, duration: f64) -> Self {
        let warmup = duration / WARMUP_DIVISOR;
        let start = first_ts + warmup;
        AnalysisWindow {
            start,
            end: start + warmup,
        }
    }

    /// Window length; constant (`duration / 3`) for a given configuration
    pub fn len(&self) -> f64 {
        self.end - self.start
    }

    /// Timestamp falls before the window (still warming up)
    pub fn before(&self, ts: f64) -> bool {
        ts < self.start
    }

    /// Timestamp falls after the window (stream can be abandoned, since
    /// timestamps are monotonically non-decreasing)
    pub fn after(&self, ts: f64) -> bool {
        ts > self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_middle_third() {
        let w = AnalysisWindow::from_first_event(100.0, 300.0);
        assert_eq!(w.start, 200.0);
        assert_eq!(w.end, 300.0);
        assert_eq!(w.len(), 100.0);
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let w = AnalysisWindow::from_first_event(0.0, 30.0);
        assert!(!w.before(10.0));
        assert!(!w.after(20.0));
        assert!(w.before(9.999));
        assert!(w.after(20.001));
    }
}
