//! Enriched readings and the schedule table built from them.

use serde::{Deserialize, Serialize};

use crate::brightness::evaluate_brightness;
use crate::energy::EnergyRates;
use crate::reading::Reading;

/// A reading with its brightness, energy, and cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedReading {
    pub time: String,
    pub lux: f64,
    #[serde(skip)]
    pub lux_text: String,
    pub brightness: u8,
    pub energy_kwh: f64,
    pub cost: f64,
}

impl EnrichedReading {
    pub fn from_reading(reading: Reading, rates: &EnergyRates) -> Self {
        let brightness = evaluate_brightness(reading.lux);
        let energy_kwh = rates.energy_kwh(brightness);
        let cost = rates.cost(energy_kwh);
        Self {
            time: reading.time,
            lux: reading.lux,
            lux_text: reading.lux_text,
            brightness,
            energy_kwh,
            cost,
        }
    }
}

/// Aggregate totals over a [`ScheduleTable`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub readings: usize,
    pub total_kwh: f64,
    pub total_cost: f64,
}

/// Enriched readings in input order. Times are not required to be unique.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScheduleTable {
    rows: Vec<EnrichedReading>,
}

impl ScheduleTable {
    /// Derive brightness, energy, and cost for every reading.
    pub fn enrich(readings: impl IntoIterator<Item = Reading>, rates: &EnergyRates) -> Self {
        let rows = readings
            .into_iter()
            .map(|r| EnrichedReading::from_reading(r, rates))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[EnrichedReading] {
        &self.rows
    }

    pub fn iter(&self) -> std::slice::Iter<'_, EnrichedReading> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            readings: self.rows.len(),
            total_kwh: self.rows.iter().map(|r| r.energy_kwh).sum(),
            total_cost: self.rows.iter().map(|r| r.cost).sum(),
        }
    }
}

impl<'a> IntoIterator for &'a ScheduleTable {
    type Item = &'a EnrichedReading;
    type IntoIter = std::slice::Iter<'a, EnrichedReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Reading> {
        vec![
            Reading::new("06:00", 200.0),
            Reading::new("09:00", 450.0),
            Reading::new("12:00", 800.0),
        ]
    }

    #[test]
    fn enrich_derives_every_column() {
        let table = ScheduleTable::enrich(sample(), &EnergyRates::default());
        let rows = table.rows();
        assert_eq!(rows.len(), 3);

        assert_eq!(rows[0].brightness, 80);
        assert_eq!(rows[0].energy_kwh, 0.032);
        assert_eq!(rows[0].cost, 0.0048);

        assert_eq!(rows[1].brightness, 40);
        assert_eq!(rows[1].energy_kwh, 0.016);
        assert_eq!(rows[1].cost, 0.0024);

        assert_eq!(rows[2].brightness, 10);
        assert_eq!(rows[2].energy_kwh, 0.004);
        assert_eq!(rows[2].cost, 0.0006);
    }

    #[test]
    fn enrich_preserves_order_and_duplicates() {
        let readings = vec![
            Reading::new("09:00", 100.0),
            Reading::new("09:00", 900.0),
        ];
        let table = ScheduleTable::enrich(readings, &EnergyRates::default());
        let times: Vec<_> = table.iter().map(|r| r.time.as_str()).collect();
        assert_eq!(times, ["09:00", "09:00"]);
        assert_eq!(table.rows()[1].brightness, 10);
    }

    #[test]
    fn enrich_is_idempotent() {
        let rates = EnergyRates::default();
        let first = ScheduleTable::enrich(sample(), &rates);
        let second = ScheduleTable::enrich(sample(), &rates);
        assert_eq!(first, second);
    }

    #[test]
    fn summary_totals() {
        let table = ScheduleTable::enrich(sample(), &EnergyRates::default());
        let summary = table.summary();
        assert_eq!(summary.readings, 3);
        assert!((summary.total_kwh - 0.052).abs() < 1e-12);
        assert!((summary.total_cost - 0.0078).abs() < 1e-12);
    }

    #[test]
    fn empty_table_summary_is_zero() {
        let summary = ScheduleTable::default().summary();
        assert_eq!(summary.readings, 0);
        assert_eq!(summary.total_kwh, 0.0);
        assert_eq!(summary.total_cost, 0.0);
    }

    #[test]
    fn serializes_as_plain_array() {
        let table = ScheduleTable::enrich(vec![Reading::new("06:00", 200.0)], &EnergyRates::default());
        let json = serde_json::to_value(&table).unwrap();
        assert!(json.is_array());
        assert_eq!(json[0]["brightness"], 80);
        assert_eq!(json[0]["time"], "06:00");
    }
}
