// Baseline aggregation
//
// Reduces a window of historical samples to the single scalar that new
// measurements are compared against. Only the arithmetic mean ships; the
// trait keeps the reduction swappable without touching the evaluator.

/// Reduces a sample series to a baseline scalar
///
/// Implementations must return NaN for an empty series rather than panic
/// or divide by zero. The evaluator treats a NaN baseline as "no baseline".
pub trait BaselineAggregator {
    fn aggregate(&self, samples: &[f64]) -> f64;
}

/// Arithmetic mean of the sample series
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Mean;

impl BaselineAggregator for Mean {
    fn aggregate(&self, samples: &[f64]) -> f64 {
        mean(samples)
    }
}

/// Arithmetic mean, or NaN when `samples` is empty
///
/// # Example
/// ```
/// use rabbitbench::threshold::mean;
///
/// assert_eq!(mean(&[90.0, 100.0, 110.0]), 100.0);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(samples: &[f64]) -> f64 {
    if samples.is_empty() {
        return f64::NAN;
    }

    samples.iter().sum::<f64>() / samples.len() as f64
}
