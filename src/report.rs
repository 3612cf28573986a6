//! Benchmark report ingested from a CI run
//!
//! One report covers a single branch and testbed at one point in time. Each
//! result carries the new measurement plus the history it should be judged
//! against (prior runs of the same key, excluding the new value).
//!
//! # Example report.json
//!
//! ```json
//! {
//!   "timestamp": 1700000000,
//!   "branch": "main",
//!   "testbed": "ci-linux",
//!   "results": [
//!     { "benchmark": "parse_json", "measure": "latency",
//!       "value": 120.0, "history": [100.0, 100.0] }
//!   ]
//! }
//! ```

use crate::metric::MetricKey;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// One benchmark measurement in a report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportResult {
    pub benchmark: String,
    pub measure: String,
    pub value: f64,
    #[serde(default)]
    pub history: Vec<f64>,
}

/// A performance report: measurements for one branch/testbed run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Unix timestamp (seconds) of the run
    pub timestamp: u64,
    pub branch: String,
    pub testbed: String,
    #[serde(default)]
    pub results: Vec<ReportResult>,
}

/// A report result resolved to its full metric key
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement<'a> {
    pub key: MetricKey,
    pub value: f64,
    pub history: &'a [f64],
}

impl Report {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_json_str(&content)
            .with_context(|| format!("Invalid report {}", path.display()))
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        serde_json::from_str(content).context("Failed to parse report JSON")
    }

    /// Results in report order, keyed by this report's branch and testbed
    pub fn measurements(&self) -> impl Iterator<Item = Measurement<'_>> + '_ {
        self.results.iter().map(move |r| Measurement {
            key: MetricKey::new(&r.benchmark, &r.measure, &self.branch, &self.testbed),
            value: r.value,
            history: &r.history,
        })
    }
}
