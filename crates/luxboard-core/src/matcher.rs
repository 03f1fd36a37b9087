//! Nearest-time lookup over a schedule table.
//!
//! Distances are measured within a single day: 23:59 and 00:01 are almost
//! 24 hours apart, not two minutes. Rows whose time does not parse as
//! `HH:MM` are skipped.

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::table::ScheduleTable;

pub const TIME_FORMAT: &str = "%H:%M";

/// The row closest to "now".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NearestMatch {
    pub time: String,
    pub brightness: u8,
}

/// Parse an `HH:MM` clock value.
pub fn parse_clock(text: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(text, TIME_FORMAT).ok()
}

/// Drop seconds and sub-second precision.
pub fn truncate_to_minute(time: NaiveTime) -> NaiveTime {
    time.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(time)
}

/// Find the row whose time is closest to `now`.
///
/// Ties go to the earliest row in table order. Returns `None` when no row
/// has a parsable time.
pub fn nearest_time_brightness(table: &ScheduleTable, now: NaiveTime) -> Option<NearestMatch> {
    let now = truncate_to_minute(now);
    let mut best: Option<(i64, usize)> = None;

    for (idx, row) in table.iter().enumerate() {
        let Some(at) = parse_clock(&row.time) else {
            tracing::debug!(time = %row.time, "skipping row with unparsable time");
            continue;
        };
        let diff = (now - at).num_seconds().abs();
        if best.map_or(true, |(closest, _)| diff < closest) {
            best = Some((diff, idx));
        }
    }

    best.map(|(_, idx)| {
        let row = &table.rows()[idx];
        NearestMatch {
            time: row.time.clone(),
            brightness: row.brightness,
        }
    })
}
