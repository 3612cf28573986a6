//! Batch evaluation of a report against threshold rules
//!
//! Every measurement is checked against every rule resolved for its key.
//! Evaluations are independent; the output keeps report order, and within a
//! measurement the rule resolution order (most specific first).

use crate::alert::Alert;
use crate::report::Report;
use crate::threshold::{Evaluation, ThresholdEvaluator};
use crate::thresholds_file::ThresholdsFile;
use serde::{Deserialize, Serialize};

/// Outcome of evaluating one report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluationSummary {
    /// (measurement, rule) pairs whose percent change was compared to the boundaries
    pub evaluated: usize,

    /// (measurement, rule) pairs skipped for too few or no history samples
    pub skipped_insufficient: usize,

    /// (measurement, rule) pairs skipped because the baseline was zero or NaN
    pub skipped_undefined_baseline: usize,

    /// Measurements with no matching rule
    pub unmatched: usize,

    pub alerts: Vec<Alert>,
}

impl EvaluationSummary {
    pub fn has_alerts(&self) -> bool {
        !self.alerts.is_empty()
    }
}

/// Evaluate every measurement in `report` against the rules in `thresholds`
///
/// # Example
/// ```
/// use rabbitbench::pipeline::evaluate_report;
/// use rabbitbench::report::Report;
/// use rabbitbench::thresholds_file::ThresholdsFile;
///
/// let thresholds = ThresholdsFile::from_toml_str(r#"
///     [[threshold]]
///     measure = "latency"
///     upper_boundary = 10.0
///     min_sample_size = 2
/// "#).unwrap();
///
/// let report = Report::from_json_str(r#"{
///     "timestamp": 1700000000, "branch": "main", "testbed": "ci",
///     "results": [{ "benchmark": "parse", "measure": "latency",
///                   "value": 120.0, "history": [100.0, 100.0] }]
/// }"#).unwrap();
///
/// let summary = evaluate_report(&report, &thresholds);
/// assert_eq!(summary.alerts.len(), 1);
/// ```
pub fn evaluate_report(report: &Report, thresholds: &ThresholdsFile) -> EvaluationSummary {
    let evaluator = ThresholdEvaluator::new();
    let mut summary = EvaluationSummary::default();

    for measurement in report.measurements() {
        let rules = thresholds.resolve(&measurement.key);
        if rules.is_empty() {
            tracing::debug!(key = %measurement.key, "no threshold configured");
            summary.unmatched += 1;
            continue;
        }

        for rule in rules {
            let config = rule.config();

            let outcome = evaluator.assess(&config, measurement.value, measurement.history);
            let violation = match outcome {
                Evaluation::InsufficientSamples => {
                    summary.skipped_insufficient += 1;
                    continue;
                }
                Evaluation::UndefinedBaseline => {
                    summary.skipped_undefined_baseline += 1;
                    continue;
                }
                Evaluation::WithinBounds { .. } => {
                    summary.evaluated += 1;
                    continue;
                }
                Evaluation::Violated(violation) => {
                    summary.evaluated += 1;
                    violation
                }
            };

            let alert = Alert::from_violation(
                measurement.key.clone(),
                config,
                measurement.value,
                violation,
                report.timestamp,
            );
            tracing::warn!("{}", alert.summary());
            summary.alerts.push(alert);
        }
    }

    tracing::info!(
        evaluated = summary.evaluated,
        skipped = summary.skipped_insufficient,
        undefined_baseline = summary.skipped_undefined_baseline,
        unmatched = summary.unmatched,
        alerts = summary.alerts.len(),
        "report evaluated"
    );

    summary
}
