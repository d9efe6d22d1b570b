//! Published report format.
//!
//! This module mirrors the JSON shape consumed by the status frontend: a
//! region tag, the generation time, and one day of per-queue hourly labels,
//! all keyed by strings because they end up as JSON object keys.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classify::Status;
use crate::error::ScanError;

/// Hour of day ("1".."24", 1-based) to status.
pub type HourlyStatus = BTreeMap<String, Status>;

/// Queue name ("queue1"..) to its hourly statuses.
pub type QueueSchedule = BTreeMap<String, HourlyStatus>;

/// Root of the published report.
#[derive(Debug, Serialize)]
pub struct Report {
    #[serde(rename = "regionId")]
    pub region_id: String,

    /// RFC 3339 UTC time the report was generated.
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,

    pub fact: Fact,
}

/// Schedule payload, keyed by the Unix timestamp of the day it covers.
#[derive(Debug, Serialize)]
pub struct Fact {
    pub data: BTreeMap<String, QueueSchedule>,
}

/// Unix timestamp of the most recent UTC midnight at or before `now`.
pub fn day_start_timestamp(now: DateTime<Utc>) -> i64 {
    now.timestamp().div_euclid(86_400) * 86_400
}

/// Wraps one day's classified schedule into the published shape.
pub fn build_report(
    region_id: &str,
    generated_at: DateTime<Utc>,
    schedule: QueueSchedule,
) -> Report {
    let mut data = BTreeMap::new();
    data.insert(day_start_timestamp(generated_at).to_string(), schedule);

    Report {
        region_id: region_id.to_owned(),
        last_updated: generated_at.to_rfc3339(),
        fact: Fact { data },
    }
}

/// Serializes the report as 2-space-indented UTF-8 JSON and overwrites
/// `path`.
///
/// A plain overwrite, attempted only once the whole report is in memory, so
/// a failed run never leaves a partial report behind.
pub fn write_report(report: &Report, path: &Path) -> Result<(), ScanError> {
    let json = serde_json::to_string_pretty(report)?;
    fs::write(path, json)?;
    Ok(())
}
