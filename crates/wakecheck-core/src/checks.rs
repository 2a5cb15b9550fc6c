//! Threshold checks over a parsed report
//!
//! Two independent checkers, one per report section, each a stateless
//! per-record evaluator. Checkers collect [`Violation`]s instead of printing
//! or failing: a violation is the normal reporting mechanism for a metric
//! outside its threshold, never an error.
//!
//! All thresholds are fixed constants. Every condition is evaluated for
//! every record regardless of how many earlier conditions fired, so one
//! kernel-log record can contribute zero to six violations.

use crate::report::{KlogStats, Report, WakelockData};
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Minimum acceptable overall test duration, in seconds
pub const MIN_TEST_DURATION_SECS: f64 = 60.0;

/// Maximum acceptable share of the test duration any one wakelock may be held
pub const MAX_WAKELOCK_TOTAL_TIME_PERCENT: f64 = 5.0;

/// Maximum acceptable share of aborted suspends
pub const MAX_ABORTED_SUSPENDS_PERCENT: f64 = 25.0;

/// Minimum acceptable share of succeeded suspends
pub const MIN_SUCCEEDED_SUSPENDS_PERCENT: f64 = 75.0;

/// Minimum acceptable duration of the longest suspend, in seconds
pub const MIN_SUSPEND_MAX_DURATION_SECS: f64 = 30.0;

/// Maximum acceptable duration of the longest awake interval, in seconds
pub const MAX_AWAKE_MAX_DURATION_SECS: f64 = 10.0;

/// One threshold violation found in a report
///
/// `Display` renders the `FAILED:` line for the violation; floats print with
/// six decimal places, matching the report generator's formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "check", rename_all = "kebab-case")]
pub enum Violation {
    /// The test ran for less than [`MIN_TEST_DURATION_SECS`]
    TestDurationTooShort { duration_seconds: f64 },

    /// A wakelock was held for more than [`MAX_WAKELOCK_TOTAL_TIME_PERCENT`]
    /// of the test duration
    WakelockTotalTimeTooLarge {
        wakelock: String,
        total_time_percent: f64,
    },

    /// More than [`MAX_ABORTED_SUSPENDS_PERCENT`] of suspends were aborted
    AbortedSuspendsTooLarge { kernel_log: String, percent: f64 },

    /// Fewer than [`MIN_SUCCEEDED_SUSPENDS_PERCENT`] of suspends succeeded
    SucceededSuspendsTooSmall { kernel_log: String, percent: f64 },

    /// No suspend was attempted at all
    NoSuspendAttempted { kernel_log: String },

    /// No suspend succeeded, most likely blocked by a held wakelock
    NoSuspendSucceeded { kernel_log: String },

    /// The longest suspend was shorter than [`MIN_SUSPEND_MAX_DURATION_SECS`]
    SuspendMaxDurationTooShort { kernel_log: String, seconds: f64 },

    /// The longest awake interval exceeded [`MAX_AWAKE_MAX_DURATION_SECS`]
    AwakeMaxDurationTooLong { kernel_log: String, seconds: f64 },
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Violation::TestDurationTooShort { duration_seconds } => write!(
                f,
                "FAILED: test duration was less than 60 seconds: {:.6}",
                duration_seconds
            ),
            Violation::WakelockTotalTimeTooLarge {
                wakelock,
                total_time_percent,
            } => write!(
                f,
                "FAILED: {} total time too large: {:.6} %",
                wakelock, total_time_percent
            ),
            Violation::AbortedSuspendsTooLarge { kernel_log, percent } => write!(
                f,
                "FAILED: {}: aborted suspends too large: {:.6}",
                kernel_log, percent
            ),
            Violation::SucceededSuspendsTooSmall { kernel_log, percent } => write!(
                f,
                "FAILED: {}: succeeded suspends too small: {:.6}",
                kernel_log, percent
            ),
            Violation::NoSuspendAttempted { kernel_log } => write!(
                f,
                "FAILED: {}: did not attempt to suspend, this is unexpected.",
                kernel_log
            ),
            Violation::NoSuspendSucceeded { kernel_log } => write!(
                f,
                "FAILED: {}: did not succeed any suspends, most probably blocked by a wakelock.",
                kernel_log
            ),
            Violation::SuspendMaxDurationTooShort { kernel_log, seconds } => write!(
                f,
                "FAILED: {}: maximum duration of suspend was {:.6} seconds, way too short.",
                kernel_log, seconds
            ),
            Violation::AwakeMaxDurationTooLong { kernel_log, seconds } => write!(
                f,
                "FAILED: {}: maximum duration of awake time was {:.6} seconds, way too long.",
                kernel_log, seconds
            ),
        }
    }
}

/// Run every applicable checker over a report
///
/// Either, both, or neither section may be present; violations keep section
/// order (wakelock-data first, then klog records) and record order within a
/// section.
pub fn check_report(report: &Report) -> Vec<Violation> {
    let mut violations = Vec::new();
    if let Some(data) = &report.wakelock_data {
        violations.extend(check_wakelock_data(data));
    }
    if let Some(klogs) = &report.wakelock_stats_from_klog {
        violations.extend(check_klog_stats(klogs));
    }
    violations
}

/// Check the wakelock-data section of a report
///
/// Validates the overall test duration, then flags every wakelock held for
/// too large a share of the run. Only `total_time_percent` is checked; the
/// remaining fields are dumped at debug level for inspection.
pub fn check_wakelock_data(data: &WakelockData) -> Vec<Violation> {
    debug!("parsing results from wakelocks");
    debug!(duration_seconds = data.duration_seconds, "test duration");

    let mut violations = Vec::new();

    if data.duration_seconds < MIN_TEST_DURATION_SECS {
        violations.push(Violation::TestDurationTooShort {
            duration_seconds: data.duration_seconds,
        });
    }

    for wl in &data.wakelocks {
        debug!(
            wakelock = %wl.wakelock,
            active_count_per_second = wl.active_count_per_second,
            count_per_second = wl.count_per_second,
            expire_count_per_second = wl.expire_count_per_second,
            wakeup_count_per_second = wl.wakeup_count_per_second,
            total_time_percent = wl.total_time_percent,
            sleep_time_percent = wl.sleep_time_percent,
            prevent_time_percent = wl.prevent_time_percent,
            "wakelock record"
        );

        if wl.total_time_percent > MAX_WAKELOCK_TOTAL_TIME_PERCENT {
            violations.push(Violation::WakelockTotalTimeTooLarge {
                wakelock: wl.wakelock.clone(),
                total_time_percent: wl.total_time_percent,
            });
        }
    }

    violations
}

/// Check the klog statistics section of a report
///
/// The harness may have parsed more than one kernel log; each record is
/// evaluated against all six conditions independently.
pub fn check_klog_stats(klogs: &[KlogStats]) -> Vec<Violation> {
    debug!("parsing results from klog analysis");

    let mut violations = Vec::new();

    for klog in klogs {
        debug!(
            kernel_log = %klog.kernel_log,
            suspends_attempted = klog.suspends_attempted,
            suspends_aborted = klog.suspends_aborted,
            suspends_succeeded = klog.suspends_succeeded,
            suspends_aborted_percent = klog.suspends_aborted_percent,
            suspends_succeeded_percent = klog.suspends_succeeded_percent,
            suspends_total_time_percent = klog.suspends_total_time_percent,
            suspend_maximum_duration_seconds = klog.suspend_maximum_duration_seconds,
            awake_maximum_duration_seconds = klog.awake_maximum_duration_seconds,
            "kernel log record"
        );

        if klog.suspends_aborted_percent > MAX_ABORTED_SUSPENDS_PERCENT {
            violations.push(Violation::AbortedSuspendsTooLarge {
                kernel_log: klog.kernel_log.clone(),
                percent: klog.suspends_aborted_percent,
            });
        }
        if klog.suspends_succeeded_percent < MIN_SUCCEEDED_SUSPENDS_PERCENT {
            violations.push(Violation::SucceededSuspendsTooSmall {
                kernel_log: klog.kernel_log.clone(),
                percent: klog.suspends_succeeded_percent,
            });
        }
        if klog.suspends_attempted < 1 {
            violations.push(Violation::NoSuspendAttempted {
                kernel_log: klog.kernel_log.clone(),
            });
        }
        if klog.suspends_succeeded < 1 {
            violations.push(Violation::NoSuspendSucceeded {
                kernel_log: klog.kernel_log.clone(),
            });
        }
        if klog.suspend_maximum_duration_seconds < MIN_SUSPEND_MAX_DURATION_SECS {
            violations.push(Violation::SuspendMaxDurationTooShort {
                kernel_log: klog.kernel_log.clone(),
                seconds: klog.suspend_maximum_duration_seconds,
            });
        }
        if klog.awake_maximum_duration_seconds > MAX_AWAKE_MAX_DURATION_SECS {
            violations.push(Violation::AwakeMaxDurationTooLong {
                kernel_log: klog.kernel_log.clone(),
                seconds: klog.awake_maximum_duration_seconds,
            });
        }
    }

    violations
}
