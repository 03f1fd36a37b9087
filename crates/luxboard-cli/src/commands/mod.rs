//! Subcommand implementations and the helpers they share.

pub mod config;
pub mod dashboard;
pub mod prompt;
pub mod render;
pub mod status;
pub mod table;

use std::path::{Path, PathBuf};

use chrono::{Local, NaiveTime};
use clap::Args;
use luxboard_core::matcher::parse_clock;
use luxboard_core::{load_readings, Config, ScheduleTable};

pub type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Daylight CSV input.
#[derive(Args)]
pub struct InputArgs {
    /// Daylight CSV with `time` and `lux` columns
    #[arg(short, long)]
    pub input: PathBuf,
}

/// Manual override and clock for status resolution.
#[derive(Args)]
pub struct StatusOptions {
    /// Manual brightness override in percent (0 = follow the schedule)
    #[arg(
        long = "override",
        default_value_t = 0,
        value_parser = clap::value_parser!(u8).range(0..=100)
    )]
    pub brightness_override: u8,
    /// Evaluate the status at this time (HH:MM) instead of now
    #[arg(long)]
    pub at: Option<String>,
}

impl StatusOptions {
    /// `--at` if given, otherwise the local wall clock.
    pub fn now(&self) -> Result<NaiveTime, Box<dyn std::error::Error>> {
        match self.at.as_deref() {
            Some(text) => parse_clock(text)
                .ok_or_else(|| format!("invalid time '{text}', expected HH:MM").into()),
            None => Ok(Local::now().time()),
        }
    }
}

/// Load and enrich the input with the configured energy rates.
pub fn load_table(input: &Path, config: &Config) -> Result<ScheduleTable, Box<dyn std::error::Error>> {
    let readings = load_readings(input)?;
    Ok(ScheduleTable::enrich(readings, &config.energy))
}
