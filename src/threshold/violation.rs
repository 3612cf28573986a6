// Threshold violation verdict
//
// Built fresh by each evaluation and handed straight back to the caller.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which boundary a percent change crossed
///
/// Purely directional: a positive change is always `Upper` and a negative
/// change always `Lower`, whether or not a bigger number is "better" for the
/// measure. Mapping direction to regression vs. improvement happens downstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryKind {
    Upper,
    Lower,
}

impl BoundaryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            BoundaryKind::Upper => "upper",
            BoundaryKind::Lower => "lower",
        }
    }
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A new measurement exceeded a configured boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThresholdViolation {
    /// Baseline the new value was compared against (mean of the history)
    #[serde(with = "crate::non_finite")]
    pub baseline_value: f64,

    /// Signed `(new - baseline) / baseline * 100`, unclamped
    #[serde(with = "crate::non_finite")]
    pub percent_change: f64,

    /// Boundary that was crossed
    #[serde(rename = "type")]
    pub kind: BoundaryKind,
}
