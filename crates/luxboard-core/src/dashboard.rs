//! Request-scoped dashboard assembly.
//!
//! A [`DashboardRequest`] carries everything one run needs: the input file,
//! the API key, the current time, and an optional brightness override.
//! Nothing is cached between runs.

use std::path::PathBuf;

use chrono::NaiveTime;
use indoc::indoc;
use serde::Serialize;

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::matcher::{nearest_time_brightness, truncate_to_minute, TIME_FORMAT};
use crate::narrator::ScheduleNarrator;
use crate::reading::load_readings;
use crate::table::{ScheduleTable, Summary};

pub const WELCOME: &str = indoc! {"
    Welcome to Luxboard!

    Luxboard sets office lighting from daylight sensor readings to improve
    efficiency and lower energy costs.

    To begin:
      1. Pass your daylight sensor data with --input <file.csv>
         (columns `time` and `lux`, e.g. 06:00,200)
      2. Provide your API key with --api-key, LUXBOARD_API_KEY,
         or `luxboard config set narrator.api_key <key>`

    The dashboard unlocks once both inputs are present.
"};

/// Largest accepted manual override, in percent.
pub const MAX_OVERRIDE: u8 = 100;

/// How the lights are currently being driven.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LightingStatus {
    /// A non-zero manual override is active.
    Override { brightness: u8 },
    /// Brightness follows the reading closest to `now`.
    Auto {
        time: String,
        brightness: u8,
        now: String,
    },
    /// No override and no row with a parsable time.
    Unmatched,
}

/// Resolve the lighting status. An override of 0 means "no override".
pub fn resolve_status(table: &ScheduleTable, now: NaiveTime, brightness_override: u8) -> LightingStatus {
    if brightness_override != 0 {
        return LightingStatus::Override {
            brightness: brightness_override,
        };
    }
    match nearest_time_brightness(table, now) {
        Some(found) => LightingStatus::Auto {
            time: found.time,
            brightness: found.brightness,
            now: truncate_to_minute(now).format(TIME_FORMAT).to_string(),
        },
        None => LightingStatus::Unmatched,
    }
}

/// Table, totals, and status for one run, without the narrated schedule.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LightingReport {
    pub status: LightingStatus,
    pub summary: Summary,
    pub readings: ScheduleTable,
}

impl LightingReport {
    pub fn build(table: ScheduleTable, now: NaiveTime, brightness_override: u8) -> Self {
        Self {
            status: resolve_status(&table, now, brightness_override),
            summary: table.summary(),
            readings: table,
        }
    }
}

/// Explicit inputs for one dashboard run.
#[derive(Debug, Clone)]
pub struct DashboardRequest {
    pub input: Option<PathBuf>,
    pub api_key: Option<String>,
    pub now: NaiveTime,
    pub brightness_override: u8,
}

/// Outcome of a dashboard run.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Dashboard {
    /// Input file or API key missing; nothing was computed.
    Welcome,
    Ready {
        report: LightingReport,
        /// Narrated schedule, or a failure message.
        schedule: String,
    },
}

impl DashboardRequest {
    /// Input path and API key, if both are present and the key is not blank.
    pub fn preconditions(&self) -> Option<(&PathBuf, &str)> {
        let input = self.input.as_ref()?;
        let api_key = self.api_key.as_deref().filter(|k| !k.trim().is_empty())?;
        Some((input, api_key))
    }

    fn validate(&self) -> Result<()> {
        if self.brightness_override > MAX_OVERRIDE {
            return Err(CoreError::Custom(format!(
                "brightness override must be between 0 and {MAX_OVERRIDE}, got {}",
                self.brightness_override
            )));
        }
        Ok(())
    }

    /// Run the whole pipeline: load, enrich, match, narrate.
    ///
    /// Returns [`Dashboard::Welcome`] without touching the input or the
    /// network when either precondition is unmet.
    ///
    /// # Errors
    ///
    /// Returns an error if the override is out of range or the input cannot
    /// be loaded. Narration failures are reported inside `schedule`.
    pub async fn run(&self, config: &Config) -> Result<Dashboard> {
        let Some((input, api_key)) = self.preconditions() else {
            tracing::info!("dashboard preconditions not met");
            return Ok(Dashboard::Welcome);
        };
        self.validate()?;

        let readings = load_readings(input)?;
        let table = ScheduleTable::enrich(readings, &config.energy);
        let report = LightingReport::build(table, self.now, self.brightness_override);

        let narrator = ScheduleNarrator::new(&config.narrator, api_key);
        let schedule = narrator.narrate(&report.readings).await;

        Ok(Dashboard::Ready { report, schedule })
    }
}
