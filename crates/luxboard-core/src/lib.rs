//! # Luxboard Core Library
//!
//! This library provides the logic behind the Luxboard smart office
//! lighting dashboard. The CLI binary is a thin layer over it.
//!
//! ## Pipeline
//!
//! Data flows one way:
//!
//! raw CSV rows → [`Reading`] → brightness → energy → cost → [`ScheduleTable`]
//!
//! The nearest-time matcher and the schedule narrator are independent
//! consumers of the finished table.
//!
//! ## Key Components
//!
//! - [`load_readings`]: CSV ingestion with header normalization
//! - [`evaluate_brightness`]: lux to brightness percentage
//! - [`EnergyRates`]: brightness to kWh and cost
//! - [`nearest_time_brightness`]: row closest to the current time
//! - [`ScheduleNarrator`]: chat-completion client that never fails
//! - [`ScheduleFormatter`]: presentation of narrated text
//! - [`DashboardRequest`]: one request-scoped run of the whole pipeline
//! - [`Config`]: TOML configuration

pub mod brightness;
pub mod config;
pub mod dashboard;
pub mod energy;
pub mod error;
pub mod format;
pub mod matcher;
pub mod narrator;
pub mod reading;
pub mod table;

pub use brightness::evaluate_brightness;
pub use config::{Config, NarratorConfig};
pub use dashboard::{resolve_status, Dashboard, DashboardRequest, LightingReport, LightingStatus};
pub use energy::{calculate_cost, calculate_energy_kwh, EnergyRates};
pub use error::{ConfigError, CoreError, IngestError};
pub use format::{FormattedSchedule, LineFormatter, PlainFormatter, ScheduleFormatter, ScheduleLine};
pub use matcher::{nearest_time_brightness, NearestMatch};
pub use narrator::{build_prompt, NarratorError, ScheduleNarrator};
pub use reading::{load_readings, read_readings, Reading};
pub use table::{EnrichedReading, ScheduleTable, Summary};
