//! Typed data model for the power test report
//!
//! The report is a JSON document with two optional top-level sections:
//! `wakelock-data`, produced from `/proc/wakelocks` style accounting for one
//! test run, and `wakelock-stats-from-klog`, produced by parsing suspend and
//! resume timing out of one or more kernel logs. Either, both, or neither
//! section may be present; unknown top-level keys are ignored.
//!
//! Every field inside a record is required. Deserialization validates the
//! record shape once, so downstream code can access fields directly.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::str::FromStr;

/// A parsed power test report
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Report {
    /// Wakelock accounting for the test run
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wakelock_data: Option<WakelockData>,

    /// Suspend/resume statistics extracted from kernel logs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wakelock_stats_from_klog: Option<Vec<KlogStats>>,
}

/// Wakelock accounting for one test run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct WakelockData {
    /// Overall test duration in seconds
    pub duration_seconds: f64,

    /// Per-wakelock activity records, in harness output order
    pub wakelocks: Vec<Wakelock>,
}

/// Activity recorded for one wakelock over the test run
///
/// All rates are normalized per second of test duration by the harness;
/// the time fields are percentages of the test duration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Wakelock {
    /// Wakelock name
    pub wakelock: String,
    pub active_count_per_second: f64,
    pub count_per_second: f64,
    pub expire_count_per_second: f64,
    pub wakeup_count_per_second: f64,
    /// Percentage of the test duration the wakelock was held
    pub total_time_percent: f64,
    pub sleep_time_percent: f64,
    pub prevent_time_percent: f64,
}

/// Suspend/resume statistics parsed from one kernel log
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KlogStats {
    /// Kernel log name the statistics were parsed from
    pub kernel_log: String,
    pub suspends_attempted: u64,
    pub suspends_aborted: u64,
    pub suspends_succeeded: u64,
    pub suspends_aborted_percent: f64,
    pub suspends_succeeded_percent: f64,
    pub suspends_total_time_percent: f64,
    pub suspend_maximum_duration_seconds: f64,
    pub awake_maximum_duration_seconds: f64,
}

impl Report {
    /// Load and parse a report from a file
    ///
    /// I/O failures and parse failures (including a record missing an
    /// expected field) are reported with the file path attached.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| Error::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl FromStr for Report {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_document() -> serde_json::Value {
        json!({
            "wakelock-data": {
                "duration-seconds": 120.5,
                "wakelocks": [
                    {
                        "wakelock": "PowerManagerService",
                        "active_count_per_second": 0.5,
                        "count_per_second": 1.0,
                        "expire_count_per_second": 0.0,
                        "wakeup_count_per_second": 0.25,
                        "total_time_percent": 3.2,
                        "sleep_time_percent": 0.1,
                        "prevent_time_percent": 2.7
                    }
                ]
            },
            "wakelock-stats-from-klog": [
                {
                    "kernel-log": "klog.1",
                    "suspends-attempted": 10,
                    "suspends-aborted": 1,
                    "suspends-succeeded": 9,
                    "suspends-aborted-percent": 10.0,
                    "suspends-succeeded-percent": 90.0,
                    "suspends-total-time-percent": 80.0,
                    "suspend-maximum-duration-seconds": 45.0,
                    "awake-maximum-duration-seconds": 5.0
                }
            ]
        })
    }

    #[test]
    fn parses_full_document() {
        let report: Report = serde_json::from_value(full_document()).unwrap();

        let data = report.wakelock_data.expect("wakelock-data present");
        assert_eq!(data.duration_seconds, 120.5);
        assert_eq!(data.wakelocks.len(), 1);
        assert_eq!(data.wakelocks[0].wakelock, "PowerManagerService");
        assert_eq!(data.wakelocks[0].total_time_percent, 3.2);

        let klogs = report.wakelock_stats_from_klog.expect("klog stats present");
        assert_eq!(klogs.len(), 1);
        assert_eq!(klogs[0].kernel_log, "klog.1");
        assert_eq!(klogs[0].suspends_attempted, 10);
        assert_eq!(klogs[0].awake_maximum_duration_seconds, 5.0);
    }

    #[test]
    fn both_sections_are_optional() {
        let report: Report = "{}".parse().unwrap();
        assert!(report.wakelock_data.is_none());
        assert!(report.wakelock_stats_from_klog.is_none());
    }

    #[test]
    fn unknown_top_level_keys_are_ignored() {
        let report: Report =
            r#"{"harness-version": "1.4", "hostname": "dut-03"}"#.parse().unwrap();
        assert!(report.wakelock_data.is_none());
        assert!(report.wakelock_stats_from_klog.is_none());
    }

    #[test]
    fn missing_record_field_is_a_parse_error() {
        let mut doc = full_document();
        doc["wakelock-data"]["wakelocks"][0]
            .as_object_mut()
            .unwrap()
            .remove("total_time_percent");

        let err = serde_json::from_value::<Report>(doc).unwrap_err();
        assert!(err.to_string().contains("total_time_percent"));
    }

    #[test]
    fn ill_typed_field_is_a_parse_error() {
        let mut doc = full_document();
        doc["wakelock-stats-from-klog"][0]["suspends-attempted"] = json!("ten");
        assert!(serde_json::from_value::<Report>(doc).is_err());
    }

    #[test]
    fn report_round_trips_with_kebab_case_keys() {
        let report: Report = serde_json::from_value(full_document()).unwrap();
        let value = serde_json::to_value(&report).unwrap();
        assert!(value.get("wakelock-data").is_some());
        assert!(value.get("wakelock-stats-from-klog").is_some());
        assert!(value["wakelock-stats-from-klog"][0].get("kernel-log").is_some());
    }
}
