//! Metric key identifying one tracked time series

use serde::{Deserialize, Serialize};
use std::fmt;

/// (benchmark, measure, branch, testbed) tuple
///
/// Every measurement with the same key belongs to the same history series.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MetricKey {
    pub benchmark: String,
    pub measure: String,
    pub branch: String,
    pub testbed: String,
}

impl MetricKey {
    pub fn new(
        benchmark: impl Into<String>,
        measure: impl Into<String>,
        branch: impl Into<String>,
        testbed: impl Into<String>,
    ) -> Self {
        Self {
            benchmark: benchmark.into(),
            measure: measure.into(),
            branch: branch.into(),
            testbed: testbed.into(),
        }
    }
}

impl fmt::Display for MetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}@{}:{}",
            self.benchmark, self.measure, self.branch, self.testbed
        )
    }
}
