//! Alert records built from threshold violations
//!
//! An [`Alert`] is what the dashboard stores and renders: the violation
//! verdict plus the metric key, the threshold that fired and when. Storing
//! it is left to the caller.

use crate::metric::MetricKey;
use crate::threshold::{BoundaryKind, ThresholdConfig, ThresholdViolation};
use serde::{Deserialize, Serialize};

/// Lifecycle state of an alert
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Active,
    Dismissed,
}

/// A threshold violation attached to the series it happened on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub key: MetricKey,

    /// Threshold that produced the violation
    pub threshold: ThresholdConfig,

    /// Boundary that was crossed
    #[serde(rename = "type")]
    pub kind: BoundaryKind,

    #[serde(with = "crate::non_finite")]
    pub percent_change: f64,

    #[serde(with = "crate::non_finite")]
    pub baseline_value: f64,

    /// The measurement that triggered the alert
    #[serde(with = "crate::non_finite")]
    pub new_value: f64,

    /// Unix timestamp (seconds) of the report containing `new_value`
    pub timestamp: u64,

    pub status: AlertStatus,
}

impl Alert {
    /// Build an active alert from an evaluator verdict
    pub fn from_violation(
        key: MetricKey,
        threshold: ThresholdConfig,
        new_value: f64,
        violation: ThresholdViolation,
        timestamp: u64,
    ) -> Self {
        Self {
            key,
            threshold,
            kind: violation.kind,
            percent_change: violation.percent_change,
            baseline_value: violation.baseline_value,
            new_value,
            timestamp,
            status: AlertStatus::Active,
        }
    }

    pub fn is_active(&self) -> bool {
        self.status == AlertStatus::Active
    }

    pub fn dismiss(&mut self) {
        self.status = AlertStatus::Dismissed;
    }

    /// The configured boundary that was exceeded, as a percentage
    pub fn boundary(&self) -> Option<f64> {
        match self.kind {
            BoundaryKind::Upper => self.threshold.upper_boundary,
            BoundaryKind::Lower => self.threshold.lower_boundary,
        }
    }

    /// One-line human-readable description
    pub fn summary(&self) -> String {
        let limit = match (self.kind, self.boundary()) {
            (BoundaryKind::Upper, Some(b)) => format!(" (limit +{:.2}%)", b),
            (BoundaryKind::Lower, Some(b)) => format!(" (limit -{:.2}%)", b),
            _ => String::new(),
        };

        format!(
            "{} {} boundary: {:+.2}%{} value={} baseline={:.4}",
            self.key, self.kind, self.percent_change, limit, self.new_value, self.baseline_value
        )
    }
}
