//! Wakecheck core - report schema and threshold checks for suspend-blocker
//! test results
//!
//! This crate provides the typed data model for the JSON report a
//! power-management test harness produces, plus the pass/fail checks run
//! against it:
//! - **Report schema**: the `wakelock-data` and `wakelock-stats-from-klog`
//!   sections, deserialized into structs so a missing or ill-typed field is
//!   a structured parse error rather than a runtime lookup failure
//! - **Checks**: stateless per-record evaluators that compare recorded
//!   metrics against fixed thresholds and return the violations found
//!
//! Threshold violations are values, not errors: a run over a report full of
//! failing metrics still returns `Ok` with the violations collected.
//!
//! ## Quick Start
//!
//! ```rust
//! use wakecheck_core::{check_report, Report};
//!
//! let report: Report = serde_json::from_str(
//!     r#"{"wakelock-data": {"duration-seconds": 45.0, "wakelocks": []}}"#,
//! ).unwrap();
//!
//! for violation in check_report(&report) {
//!     println!("{}", violation);
//! }
//! ```

pub mod checks;
pub mod error;
pub mod report;

pub use checks::{check_klog_stats, check_report, check_wakelock_data, Violation};
pub use error::{Error, Result};
pub use report::{KlogStats, Report, Wakelock, WakelockData};
