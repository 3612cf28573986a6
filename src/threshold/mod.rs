// Threshold-based regression detection
//
// Decides whether a new benchmark measurement has drifted from the baseline
// formed by its prior runs by more than a configured percentage.
//
// Data flow:
//   history + new value + ThresholdConfig
//     -> BaselineAggregator (arithmetic mean)
//     -> ThresholdEvaluator (percent change vs. upper/lower boundary)
//     -> Option<ThresholdViolation>
//
// The evaluator holds no state and performs no I/O, so it can be called from
// any number of threads at once. Ordering of the history series is the
// caller's concern; the mean is permutation-invariant.

mod baseline;
mod config;
mod evaluator;
mod violation;

pub use baseline::{mean, BaselineAggregator, Mean};
pub use config::{ConfigError, ThresholdConfig};
pub use evaluator::{check_threshold, percent_change, Evaluation, ThresholdEvaluator};
pub use violation::{BoundaryKind, ThresholdViolation};

#[cfg(test)]
mod tests;
