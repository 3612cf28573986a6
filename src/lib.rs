//! rabbitbench - continuous benchmarking regression detection
//!
//! This library decides whether a new benchmark measurement violates a
//! percentage threshold relative to the mean of its history, and wraps that
//! decision in the pieces a CI pipeline needs: threshold rules from TOML,
//! JSON benchmark reports, batch evaluation and alert records.
//!
//! ```
//! use rabbitbench::threshold::{check_threshold, BoundaryKind, ThresholdConfig};
//!
//! let config = ThresholdConfig::new(2).with_lower(10.0);
//! let violation = check_threshold(&config, 70.0, &[100.0, 100.0]).unwrap();
//! assert_eq!(violation.kind, BoundaryKind::Lower);
//! ```

pub mod alert;
pub mod cli;
pub mod metric;
mod non_finite;
pub mod output;
pub mod pipeline;
pub mod report;
pub mod threshold;
pub mod thresholds_file;
