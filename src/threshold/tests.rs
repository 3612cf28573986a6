// Scenario tests for threshold evaluation
//
// Realistic benchmark histories: latency in nanoseconds, throughput in
// ops/sec, and a signed delta metric that sits below zero.

use super::*;

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_upper_violation_reports_baseline_and_change() {
    let config = ThresholdConfig::new(2).with_upper(10.0);

    let violation = check_threshold(&config, 120.0, &[100.0, 100.0]).unwrap();

    assert_eq!(violation.baseline_value, 100.0);
    assert_close(violation.percent_change, 20.0);
    assert_eq!(violation.kind, BoundaryKind::Upper);
}

#[test]
fn test_exactly_at_upper_boundary_is_not_violation() {
    let config = ThresholdConfig::new(2).with_upper(10.0);
    assert_eq!(check_threshold(&config, 110.0, &[100.0, 100.0]), None);
}

#[test]
fn test_lower_violation() {
    let config = ThresholdConfig::new(2).with_lower(10.0);

    let violation = check_threshold(&config, 70.0, &[100.0, 100.0]).unwrap();

    assert_eq!(violation.baseline_value, 100.0);
    assert_close(violation.percent_change, -30.0);
    assert_eq!(violation.kind, BoundaryKind::Lower);
}

#[test]
fn test_exactly_at_lower_boundary_is_not_violation() {
    let config = ThresholdConfig::new(2).with_lower(25.0);
    assert_eq!(check_threshold(&config, 75.0, &[100.0, 100.0]), None);
}

#[test]
fn test_insufficient_samples() {
    let config = ThresholdConfig::new(5).with_upper(10.0);
    assert_eq!(check_threshold(&config, 150.0, &[100.0, 100.0, 100.0]), None);
}

#[test]
fn test_sample_size_met_exactly() {
    let config = ThresholdConfig::new(3).with_upper(10.0);
    let violation = check_threshold(&config, 150.0, &[100.0, 100.0, 100.0]).unwrap();
    assert_eq!(violation.kind, BoundaryKind::Upper);
}

#[test]
fn test_sample_size_exceeded() {
    let config = ThresholdConfig::new(2).with_upper(10.0);
    assert!(check_threshold(&config, 150.0, &[100.0, 100.0, 100.0, 100.0]).is_some());
}

#[test]
fn test_negative_baseline_more_negative_is_upper() {
    let config = ThresholdConfig::new(2).with_upper(10.0).with_lower(10.0);

    let violation = check_threshold(&config, -150.0, &[-100.0, -100.0]).unwrap();

    assert_eq!(violation.baseline_value, -100.0);
    assert_close(violation.percent_change, 50.0);
    assert_eq!(violation.kind, BoundaryKind::Upper);
}

#[test]
fn test_negative_baseline_toward_zero_is_lower() {
    let config = ThresholdConfig::new(2).with_upper(10.0).with_lower(10.0);

    // -50 vs -100: (-50 + 100) / -100 * 100 = -50%
    let violation = check_threshold(&config, -50.0, &[-100.0, -100.0]).unwrap();

    assert_close(violation.percent_change, -50.0);
    assert_eq!(violation.kind, BoundaryKind::Lower);
}

#[test]
fn test_zero_baseline() {
    let config = ThresholdConfig::new(2).with_upper(10.0);
    assert_eq!(check_threshold(&config, 100.0, &[0.0, 0.0]), None);
}

#[test]
fn test_baseline_averaging_to_zero() {
    let config = ThresholdConfig::new(2).with_upper(0.0).with_lower(0.0);
    assert_eq!(check_threshold(&config, 1e9, &[-3.0, 3.0]), None);
}

#[test]
fn test_empty_series_with_zero_min_sample_size() {
    let config = ThresholdConfig::new(0).with_upper(10.0);
    assert_eq!(check_threshold(&config, 100.0, &[]), None);
}

#[test]
fn test_unset_upper_ignores_large_increase() {
    let config = ThresholdConfig::new(2).with_lower(10.0);
    assert_eq!(check_threshold(&config, 200.0, &[100.0, 100.0]), None);
}

#[test]
fn test_unset_lower_ignores_large_decrease() {
    let config = ThresholdConfig::new(2).with_upper(10.0);
    assert_eq!(check_threshold(&config, 50.0, &[100.0, 100.0]), None);
}

#[test]
fn test_no_boundaries_never_violates() {
    let config = ThresholdConfig::new(0);
    for new_value in [-1e12, -1.0, 0.0, 1.0, 1e12] {
        assert_eq!(check_threshold(&config, new_value, &[100.0, 101.0]), None);
    }
}

#[test]
fn test_within_upper_boundary() {
    let config = ThresholdConfig::new(2).with_upper(20.0);
    assert_eq!(check_threshold(&config, 110.0, &[100.0, 100.0]), None);
}

#[test]
fn test_within_lower_boundary() {
    let config = ThresholdConfig::new(2).with_lower(20.0);
    assert_eq!(check_threshold(&config, 90.0, &[100.0, 100.0]), None);
}

#[test]
fn test_baseline_is_mean_of_varying_history() {
    let config = ThresholdConfig::new(3).with_upper(10.0);

    let violation = check_threshold(&config, 120.0, &[90.0, 100.0, 110.0]).unwrap();

    assert_eq!(violation.baseline_value, 100.0);
    assert_close(violation.percent_change, 20.0);
}

#[test]
fn test_wide_spread_history() {
    let config = ThresholdConfig::new(4).with_upper(5.0);

    let violation = check_threshold(&config, 110.0, &[80.0, 90.0, 100.0, 130.0]).unwrap();

    assert_eq!(violation.baseline_value, 100.0);
    assert_close(violation.percent_change, 10.0);
}

#[test]
fn test_decimal_values() {
    let config = ThresholdConfig::new(2).with_upper(5.0);

    let violation = check_threshold(&config, 1.15, &[1.0, 1.0]).unwrap();

    assert!((violation.percent_change - 15.0).abs() < 1e-6);
}

#[test]
fn test_both_boundaries() {
    let config = ThresholdConfig::new(2).with_upper(10.0).with_lower(10.0);
    let history = [100.0, 100.0];

    assert_eq!(
        check_threshold(&config, 120.0, &history).map(|v| v.kind),
        Some(BoundaryKind::Upper)
    );
    assert_eq!(
        check_threshold(&config, 80.0, &history).map(|v| v.kind),
        Some(BoundaryKind::Lower)
    );
    assert_eq!(check_threshold(&config, 105.0, &history), None);
}

#[test]
fn test_throughput_drop_is_lower_regardless_of_meaning() {
    // Throughput falling is a regression, but the verdict is only directional
    let config = ThresholdConfig::new(5).with_lower(15.0);
    let history = [52_000.0, 50_500.0, 49_800.0, 51_200.0, 50_000.0];

    let violation = check_threshold(&config, 38_000.0, &history).unwrap();

    assert_eq!(violation.kind, BoundaryKind::Lower);
    assert!(violation.percent_change < -15.0);
}

#[test]
fn test_evaluator_matches_free_function() {
    let config = ThresholdConfig::new(2).with_upper(10.0).with_lower(10.0);
    let evaluator = ThresholdEvaluator::new();
    let history = [98.0, 102.0, 100.0];

    for new_value in [50.0, 89.9, 100.0, 110.0, 111.0, 250.0] {
        assert_eq!(
            evaluator.evaluate(&config, new_value, &history),
            check_threshold(&config, new_value, &history)
        );
    }
}
