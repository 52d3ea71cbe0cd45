//! Sweep aggregator.
//!
//! Merges the per-client summary records of one sweep coordinate into
//! run-level totals and derived rates.

pub mod sweep;

pub use sweep::{aggregate, ratio, AggregateRecord};

use crate::reducer::SummaryRecord;
use crate::utils::config::{CLIENT_LOG_PREFIX, CLIENT_LOG_SUFFIX};
use crate::utils::error::AggregateError;
use crate::workload::Workload;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

/// Enumerate the per-client summary files of one run directory.
///
/// A client file is anything named `client...log`, one per worker process.
/// The set is discovered once, eagerly, and sorted by name so repeated
/// runs see the same order.
pub fn discover_client_logs(dir: &Path) -> Result<Vec<PathBuf>, AggregateError> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if name.starts_with(CLIENT_LOG_PREFIX) && name.ends_with(CLIENT_LOG_SUFFIX) {
            files.push(entry.path());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err(AggregateError::NoInputs(dir.display().to_string()));
    }
    debug!("found {} client summaries under {}", files.len(), dir.display());
    Ok(files)
}

/// Read every client summary under `dir` and fold them into one record
pub fn aggregate_dir(dir: &Path, workload: Workload) -> Result<AggregateRecord, AggregateError> {
    let files = discover_client_logs(dir)?;
    let summaries = files
        .iter()
        .map(|path| SummaryRecord::read_from(path, workload))
        .collect::<Result<Vec<_>, _>>()?;
    aggregate(&summaries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_discovery_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["client2.log", "client0.log", "server0.log", "notes.txt"] {
            fs::write(dir.path().join(name), "").unwrap();
        }

        let files = discover_client_logs(dir.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, ["client0.log", "client2.log"]);
    }

    #[test]
    fn test_discovery_empty_dir_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            discover_client_logs(dir.path()),
            Err(AggregateError::NoInputs(_))
        ));
    }
}
