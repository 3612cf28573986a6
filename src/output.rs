//! Rendering of evaluation summaries (text and JSON)

use crate::pipeline::EvaluationSummary;
use anyhow::{Context, Result};

/// Human-readable report
pub fn to_text(summary: &EvaluationSummary) -> String {
    let mut report = String::new();

    if summary.has_alerts() {
        report.push_str(&format!(
            "❌ {} THRESHOLD ALERT(S)\n\n",
            summary.alerts.len()
        ));
        for alert in &summary.alerts {
            report.push_str(&format!("  - {}\n", alert.summary()));
        }
        report.push('\n');
    } else {
        report.push_str("✅ NO THRESHOLD ALERTS\n\n");
    }

    report.push_str(&format!("Evaluated: {}\n", summary.evaluated));
    report.push_str(&format!(
        "Skipped (insufficient samples): {}\n",
        summary.skipped_insufficient
    ));
    report.push_str(&format!(
        "Skipped (zero or undefined baseline): {}\n",
        summary.skipped_undefined_baseline
    ));
    report.push_str(&format!(
        "Measurements without threshold: {}\n",
        summary.unmatched
    ));

    report
}

/// Pretty-printed JSON of the whole summary
///
/// Infinite or NaN percent changes are written as `"inf"`, `"-inf"` or
/// `"NaN"` so the output can be read back into an [`EvaluationSummary`].
pub fn to_json(summary: &EvaluationSummary) -> Result<String> {
    serde_json::to_string_pretty(summary).context("Failed to serialize evaluation summary")
}
