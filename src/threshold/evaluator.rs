// Threshold evaluation
//
// Compares a new measurement against the baseline of its history using the
// percentage boundaries of a ThresholdConfig.
//
// "No violation" covers four different situations, none of which is a pass:
// - fewer samples than min_sample_size (not yet evaluable)
// - empty history (only reachable when min_sample_size == 0)
// - zero baseline (percent change undefined)
// - percent change within every configured boundary
//
// Upper and lower violations are mutually exclusive for non-negative
// boundaries: upper needs percent_change > upper >= 0, lower needs
// percent_change < -lower <= 0. Upper is still checked first.

use crate::threshold::baseline::{BaselineAggregator, Mean};
use crate::threshold::config::ThresholdConfig;
use crate::threshold::violation::{BoundaryKind, ThresholdViolation};

/// Signed percent difference of `new_value` from `baseline`
///
/// No absolute values are taken: with a negative baseline, a more negative
/// new value yields a *positive* change (-100 -> -150 is +50%).
///
/// # Example
/// ```
/// use rabbitbench::threshold::percent_change;
///
/// assert_eq!(percent_change(120.0, 100.0), 20.0);
/// assert_eq!(percent_change(-150.0, -100.0), 50.0);
/// ```
pub fn percent_change(new_value: f64, baseline: f64) -> f64 {
    (new_value - baseline) / baseline * 100.0
}

/// Check a new value against its history using the arithmetic mean baseline
///
/// # Arguments
/// * `config` - Boundaries and minimum sample size
/// * `new_value` - Measurement under test
/// * `baseline` - Prior measurements for the same metric key, any order,
///   excluding `new_value`
///
/// # Returns
/// `Some(ThresholdViolation)` when a boundary is strictly exceeded,
/// `None` otherwise
///
/// # Example
/// ```
/// use rabbitbench::threshold::{check_threshold, BoundaryKind, ThresholdConfig};
///
/// let config = ThresholdConfig::new(2).with_upper(10.0);
///
/// let violation = check_threshold(&config, 120.0, &[100.0, 100.0]).unwrap();
/// assert_eq!(violation.kind, BoundaryKind::Upper);
/// assert_eq!(violation.baseline_value, 100.0);
///
/// // Exactly on the boundary is not a violation
/// assert!(check_threshold(&config, 110.0, &[100.0, 100.0]).is_none());
/// ```
pub fn check_threshold(
    config: &ThresholdConfig,
    new_value: f64,
    baseline: &[f64],
) -> Option<ThresholdViolation> {
    ThresholdEvaluator::new().evaluate(config, new_value, baseline)
}

/// Stateless evaluator parameterised over the baseline statistic
#[derive(Debug, Clone, Copy, Default)]
pub struct ThresholdEvaluator<A = Mean> {
    aggregator: A,
}

impl ThresholdEvaluator<Mean> {
    pub fn new() -> Self {
        Self { aggregator: Mean }
    }
}

impl<A: BaselineAggregator> ThresholdEvaluator<A> {
    /// Use a different baseline statistic (median, trimmed mean, ...)
    pub fn with_aggregator(aggregator: A) -> Self {
        Self { aggregator }
    }

    pub fn aggregator(&self) -> &A {
        &self.aggregator
    }

    /// True when `baseline` has enough samples to be evaluated at all
    ///
    /// An empty series is never evaluable, even with `min_sample_size == 0`.
    pub fn is_evaluable(config: &ThresholdConfig, baseline: &[f64]) -> bool {
        !baseline.is_empty() && baseline.len() >= config.min_sample_size
    }

    /// Evaluate `new_value` against `baseline`; see [`check_threshold`]
    pub fn evaluate(
        &self,
        config: &ThresholdConfig,
        new_value: f64,
        baseline: &[f64],
    ) -> Option<ThresholdViolation> {
        self.assess(config, new_value, baseline).violation()
    }

    /// Like [`evaluate`](Self::evaluate), but reports why nothing fired
    pub fn assess(
        &self,
        config: &ThresholdConfig,
        new_value: f64,
        baseline: &[f64],
    ) -> Evaluation {
        if !Self::is_evaluable(config, baseline) {
            tracing::trace!(
                samples = baseline.len(),
                min_sample_size = config.min_sample_size,
                "insufficient samples, skipping threshold check"
            );
            return Evaluation::InsufficientSamples;
        }

        let baseline_value = self.aggregator.aggregate(baseline);

        // Percent change relative to zero (or an undefined baseline) is undefined
        if baseline_value.is_nan() || baseline_value == 0.0 {
            tracing::trace!(
                baseline = baseline_value,
                "undefined baseline, skipping threshold check"
            );
            return Evaluation::UndefinedBaseline;
        }

        let change = percent_change(new_value, baseline_value);

        let kind = match (config.upper_boundary, config.lower_boundary) {
            (Some(upper), _) if change > upper => BoundaryKind::Upper,
            // lower_boundary is a magnitude, compared against the negative change
            (_, Some(lower)) if change < -lower => BoundaryKind::Lower,
            _ => {
                return Evaluation::WithinBounds {
                    baseline_value,
                    percent_change: change,
                }
            }
        };

        tracing::debug!(
            baseline = baseline_value,
            new_value,
            percent_change = change,
            kind = kind.as_str(),
            "threshold violated"
        );

        Evaluation::Violated(ThresholdViolation {
            baseline_value,
            percent_change: change,
            kind,
        })
    }
}

/// Full outcome of one threshold evaluation
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Evaluation {
    /// Fewer history samples than `min_sample_size`, or none at all
    InsufficientSamples,

    /// Baseline is zero or NaN, so percent change is undefined
    UndefinedBaseline,

    /// Percent change stayed within every configured boundary
    WithinBounds {
        baseline_value: f64,
        percent_change: f64,
    },

    Violated(ThresholdViolation),
}

impl Evaluation {
    pub fn violation(self) -> Option<ThresholdViolation> {
        match self {
            Evaluation::Violated(violation) => Some(violation),
            _ => None,
        }
    }

    /// True when a percent change was actually compared to the boundaries
    pub fn was_compared(&self) -> bool {
        matches!(
            self,
            Evaluation::WithinBounds { .. } | Evaluation::Violated(_)
        )
    }
}
