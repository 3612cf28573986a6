// Threshold policy for one metric key
//
// Boundaries are percentages (10.0 means 10%), not fractions. Either
// boundary may be unset, which disables checking in that direction.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Load-time validation failures for a [`ThresholdConfig`]
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("{field} must be non-negative, got {value}")]
    NegativeBoundary { field: &'static str, value: f64 },

    #[error("{field} must be a finite percentage, got {value}")]
    NonFiniteBoundary { field: &'static str, value: f64 },
}

/// Regression-detection policy for one (benchmark, measure, branch, testbed)
///
/// `None` and `Some(0.0)` are different things: `None` turns the check off,
/// while `Some(0.0)` flags any change at all in that direction.
///
/// # Example
/// ```
/// use rabbitbench::threshold::ThresholdConfig;
///
/// let config = ThresholdConfig::new(5).with_upper(10.0);
/// assert_eq!(config.upper_boundary, Some(10.0));
/// assert_eq!(config.lower_boundary, None);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdConfig {
    /// Maximum allowed positive percent change
    #[serde(default)]
    pub upper_boundary: Option<f64>,

    /// Maximum allowed magnitude of a negative percent change
    #[serde(default)]
    pub lower_boundary: Option<f64>,

    /// Number of historical samples required before evaluating at all
    #[serde(default)]
    pub min_sample_size: usize,
}

impl ThresholdConfig {
    /// Config with no boundaries set; it never reports a violation
    pub fn new(min_sample_size: usize) -> Self {
        Self {
            upper_boundary: None,
            lower_boundary: None,
            min_sample_size,
        }
    }

    pub fn with_upper(mut self, percent: f64) -> Self {
        self.upper_boundary = Some(percent);
        self
    }

    pub fn with_lower(mut self, percent: f64) -> Self {
        self.lower_boundary = Some(percent);
        self
    }

    /// True when at least one direction is checked
    pub fn has_boundaries(&self) -> bool {
        self.upper_boundary.is_some() || self.lower_boundary.is_some()
    }

    /// Validate configuration
    ///
    /// Meant for configuration-load time. The evaluator does not call this;
    /// given a negative boundary it will just compare against it as-is.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_boundary("upper_boundary", self.upper_boundary)?;
        check_boundary("lower_boundary", self.lower_boundary)?;
        Ok(())
    }
}

fn check_boundary(field: &'static str, boundary: Option<f64>) -> Result<(), ConfigError> {
    let Some(value) = boundary else {
        return Ok(());
    };

    if !value.is_finite() {
        return Err(ConfigError::NonFiniteBoundary { field, value });
    }

    if value < 0.0 {
        return Err(ConfigError::NegativeBoundary { field, value });
    }

    Ok(())
}
