//! Threshold rules loaded from rabbitbench.toml
//!
//! Each rule targets one measure and optionally narrows to a branch and/or
//! testbed. Omitting `branch` or `testbed` makes the rule apply to all of
//! them. Rules are validated when the file is loaded, so the evaluator never
//! sees a negative boundary.
//!
//! # Example rabbitbench.toml
//!
//! ```toml
//! # Latency on main in CI may not grow by more than 10%
//! [[threshold]]
//! measure = "latency"
//! branch = "main"
//! testbed = "ci-linux"
//! upper_boundary = 10.0
//! min_sample_size = 5
//!
//! # Throughput anywhere may not drop by more than 15%
//! [[threshold]]
//! measure = "throughput"
//! lower_boundary = 15.0
//! min_sample_size = 3
//! ```

use crate::metric::MetricKey;
use crate::threshold::ThresholdConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_true() -> bool {
    true
}

/// A single `[[threshold]]` entry
///
/// Unknown keys are rejected, so a misspelled boundary fails the load
/// instead of silently disabling the check. The limit fields are spelled out
/// rather than flattened from [`ThresholdConfig`] because serde does not
/// support `deny_unknown_fields` together with `flatten`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdRule {
    /// Measure this rule applies to (e.g. "latency")
    pub measure: String,

    /// Branch filter; `None` matches every branch
    #[serde(default)]
    pub branch: Option<String>,

    /// Testbed filter; `None` matches every testbed
    #[serde(default)]
    pub testbed: Option<String>,

    #[serde(default)]
    pub upper_boundary: Option<f64>,

    #[serde(default)]
    pub lower_boundary: Option<f64>,

    pub min_sample_size: usize,

    /// If false, the rule is loaded but never resolved
    #[serde(default = "default_true")]
    pub enabled: bool,
}

impl ThresholdRule {
    pub fn config(&self) -> ThresholdConfig {
        ThresholdConfig {
            upper_boundary: self.upper_boundary,
            lower_boundary: self.lower_boundary,
            min_sample_size: self.min_sample_size,
        }
    }

    pub fn matches(&self, key: &MetricKey) -> bool {
        self.enabled
            && self.measure == key.measure
            && self.branch.as_ref().is_none_or(|b| *b == key.branch)
            && self.testbed.as_ref().is_none_or(|t| *t == key.testbed)
    }

    /// Number of non-wildcard filters; higher is more specific
    pub fn specificity(&self) -> u8 {
        u8::from(self.branch.is_some()) + u8::from(self.testbed.is_some())
    }
}

/// Root configuration for rabbitbench.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThresholdsFile {
    #[serde(default)]
    pub threshold: Vec<ThresholdRule>,
}

impl ThresholdsFile {
    /// Load and validate threshold rules from a TOML file
    ///
    /// ```no_run
    /// use rabbitbench::thresholds_file::ThresholdsFile;
    ///
    /// # fn main() -> anyhow::Result<()> {
    /// let thresholds = ThresholdsFile::from_file("rabbitbench.toml")?;
    /// println!("Loaded {} thresholds", thresholds.threshold.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::from_toml_str(&content)
            .with_context(|| format!("Invalid thresholds file {}", path.display()))
    }

    /// Parse and validate threshold rules from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let file: Self = toml::from_str(content).context("Failed to parse TOML")?;
        file.validate()?;
        Ok(file)
    }

    pub fn validate(&self) -> Result<()> {
        for (index, rule) in self.threshold.iter().enumerate() {
            rule.config().validate().with_context(|| {
                format!("threshold #{} (measure '{}')", index + 1, rule.measure)
            })?;
        }
        Ok(())
    }

    /// All enabled rules matching `key`, most specific first
    ///
    /// Ties keep file order.
    pub fn resolve(&self, key: &MetricKey) -> Vec<&ThresholdRule> {
        let mut matching: Vec<&ThresholdRule> =
            self.threshold.iter().filter(|r| r.matches(key)).collect();
        matching.sort_by_key(|r| std::cmp::Reverse(r.specificity()));
        matching
    }
}
