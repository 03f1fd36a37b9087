//! Energy and cost derived from a brightness level.

use serde::{Deserialize, Serialize};

/// Decimal places kept on every derived energy and cost value.
pub const PRECISION: usize = 4;

pub const DEFAULT_HOURS: f64 = 1.0;
pub const DEFAULT_WATT: f64 = 40.0;
pub const DEFAULT_RATE: f64 = 0.15;

/// Round `value` to `places` decimal places.
///
/// Rounds the exact binary value, so `0.00225` (stored just below the tie)
/// rounds down to `0.0022`.
pub fn round_to(value: f64, places: usize) -> f64 {
    format!("{value:.places$}").parse().unwrap_or(value)
}

/// Energy drawn by one fixture at `brightness_percent` for `hours`, in kWh.
pub fn calculate_energy_kwh(brightness_percent: u8, hours: f64, watt: f64) -> f64 {
    round_to(
        (f64::from(brightness_percent) / 100.0) * watt * hours / 1000.0,
        PRECISION,
    )
}

/// Cost of `kwh` at `rate` per kWh.
pub fn calculate_cost(kwh: f64, rate: f64) -> f64 {
    round_to(kwh * rate, PRECISION)
}

/// Fixture and tariff constants used to price a reading.
///
/// Stored in the `[energy]` section of the configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnergyRates {
    /// Hours each reading's brightness level is held.
    #[serde(default = "default_hours")]
    pub hours: f64,
    /// Fixture wattage at 100% brightness.
    #[serde(default = "default_watt")]
    pub watt: f64,
    /// Price per kWh.
    #[serde(default = "default_rate")]
    pub rate: f64,
}

fn default_hours() -> f64 {
    DEFAULT_HOURS
}
fn default_watt() -> f64 {
    DEFAULT_WATT
}
fn default_rate() -> f64 {
    DEFAULT_RATE
}

impl Default for EnergyRates {
    fn default() -> Self {
        Self {
            hours: DEFAULT_HOURS,
            watt: DEFAULT_WATT,
            rate: DEFAULT_RATE,
        }
    }
}

impl EnergyRates {
    pub fn energy_kwh(&self, brightness_percent: u8) -> f64 {
        calculate_energy_kwh(brightness_percent, self.hours, self.watt)
    }

    pub fn cost(&self, kwh: f64) -> f64 {
        calculate_cost(kwh, self.rate)
    }
}
