//! Daylight reading ingestion.
//!
//! Input is a CSV with at least a `time` and a `lux` column. Header names
//! are normalized once here (trimmed, lowercased) so `" Time "` and `"LUX"`
//! both resolve; every other column is ignored.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::{Deserialize, Serialize};

use crate::error::IngestError;

pub const TIME_COLUMN: &str = "time";
pub const LUX_COLUMN: &str = "lux";

/// One sensor sample: wall-clock time of day (`HH:MM`) and ambient lux.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub time: String,
    pub lux: f64,
    /// Lux as shown in prompts. Whole numbers when every lux cell in the
    /// source column is an integer, float notation (`200.0`) otherwise.
    #[serde(skip)]
    pub lux_text: String,
}

impl Reading {
    pub fn new(time: impl Into<String>, lux: f64) -> Self {
        Self {
            time: time.into(),
            lux,
            lux_text: float_text(lux),
        }
    }
}

/// Float notation that always carries a fractional part: `200.0`, `650.5`.
pub fn float_text(value: f64) -> String {
    format!("{value:?}")
}

/// Normalize a header cell to its lookup form.
pub fn normalize_header(name: &str) -> String {
    name.trim().to_lowercase()
}

/// Load readings from a CSV file on disk.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or any row is invalid
/// (see [`read_readings`]).
pub fn load_readings(path: impl AsRef<Path>) -> Result<Vec<Reading>, IngestError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| IngestError::OpenFailed {
        path: path.to_path_buf(),
        source,
    })?;
    let readings = read_readings(file)?;
    tracing::info!(path = %path.display(), count = readings.len(), "loaded daylight readings");
    Ok(readings)
}

/// Read readings from any CSV source, preserving row order.
///
/// Negative lux values are accepted and logged; NaN and infinities are
/// rejected.
///
/// # Errors
///
/// Returns an error if the `time` or `lux` column is missing, a lux cell is
/// not numeric, or the CSV itself is malformed.
pub fn read_readings<R: Read>(input: R) -> Result<Vec<Reading>, IngestError> {
    let mut rdr = ReaderBuilder::new().trim(Trim::All).from_reader(input);

    let headers: StringRecord = rdr.headers()?.iter().map(normalize_header).collect();
    for column in [TIME_COLUMN, LUX_COLUMN] {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn {
                column: column.to_string(),
                found: headers.iter().collect::<Vec<_>>().join(", "),
            });
        }
    }

    let lux_index = headers.iter().position(|h| h == LUX_COLUMN);
    let mut whole_column = true;

    let mut readings = Vec::new();
    let mut record = StringRecord::new();
    while rdr.read_record(&mut record)? {
        let line = record.position().map_or(0, |p| p.line());
        let mut reading: Reading =
            record
                .deserialize(Some(&headers))
                .map_err(|err| IngestError::InvalidRow {
                    line,
                    message: err.to_string(),
                })?;

        if !reading.lux.is_finite() {
            return Err(IngestError::NonFiniteLux {
                line,
                value: reading.lux,
            });
        }
        if reading.lux < 0.0 {
            tracing::warn!(line, lux = reading.lux, "negative lux reading accepted");
        }

        let cell = lux_index.and_then(|i| record.get(i)).unwrap_or_default();
        match cell.parse::<i64>() {
            Ok(whole) => reading.lux_text = whole.to_string(),
            Err(_) => whole_column = false,
        }
        readings.push(reading);
    }

    // one fractional cell turns the whole column into floats
    if !whole_column {
        for reading in &mut readings {
            reading.lux_text = float_text(reading.lux);
        }
    }

    tracing::debug!(count = readings.len(), "parsed daylight rows");
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(csv: &str) -> Result<Vec<Reading>, IngestError> {
        read_readings(csv.as_bytes())
    }

    fn pairs(rows: &[Reading]) -> Vec<(&str, f64)> {
        rows.iter().map(|r| (r.time.as_str(), r.lux)).collect()
    }

    fn lux_texts(rows: &[Reading]) -> Vec<&str> {
        rows.iter().map(|r| r.lux_text.as_str()).collect()
    }

    #[test]
    fn reads_rows_in_input_order() {
        let rows = read("time,lux\n06:00,200\n12:00,650\n18:00,320\n").unwrap();
        assert_eq!(
            pairs(&rows),
            [("06:00", 200.0), ("12:00", 650.0), ("18:00", 320.0)]
        );
    }

    #[test]
    fn normalizes_header_case_and_whitespace() {
        let rows = read(" Time , LUX \n06:00, 200\n").unwrap();
        assert_eq!(pairs(&rows), [("06:00", 200.0)]);
    }

    #[test]
    fn ignores_extra_columns() {
        let rows = read("sensor,lux,time,room\nA,410.5,09:30,lobby\n").unwrap();
        assert_eq!(pairs(&rows), [("09:30", 410.5)]);
    }

    #[test]
    fn integer_column_keeps_whole_lux_text() {
        let rows = read("time,lux\n06:00,200\n07:00,007\n").unwrap();
        assert_eq!(lux_texts(&rows), ["200", "7"]);
    }

    #[test]
    fn one_fractional_cell_makes_every_lux_a_float() {
        let rows = read("time,lux\n06:00,200\n12:00,650.5\n").unwrap();
        assert_eq!(lux_texts(&rows), ["200.0", "650.5"]);
    }

    #[test]
    fn constructed_readings_use_float_text() {
        assert_eq!(Reading::new("06:00", 200.0).lux_text, "200.0");
    }

    #[test]
    fn missing_lux_column_is_reported() {
        let err = read("time,brightness\n06:00,80\n").unwrap_err();
        match err {
            IngestError::MissingColumn { column, found } => {
                assert_eq!(column, "lux");
                assert_eq!(found, "time, brightness");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn empty_input_has_no_columns() {
        let err = read("").unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn { .. }));
    }

    #[test]
    fn header_only_input_yields_no_rows() {
        let rows = read("time,lux\n").unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn non_numeric_lux_reports_line() {
        let err = read("time,lux\n06:00,200\n07:00,bright\n").unwrap_err();
        match err {
            IngestError::InvalidRow { line, .. } => assert_eq!(line, 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn nan_lux_is_rejected() {
        let err = read("time,lux\n06:00,NaN\n").unwrap_err();
        assert!(matches!(err, IngestError::NonFiniteLux { line: 2, .. }));
    }

    #[test]
    fn negative_lux_is_accepted() {
        let rows = read("time,lux\n06:00,-5\n").unwrap();
        assert_eq!(rows[0].lux, -5.0);
    }

    #[test]
    fn unparsable_time_is_kept_verbatim() {
        let rows = read("time,lux\nnoon,700\n").unwrap();
        assert_eq!(rows[0].time, "noon");
    }

    #[test]
    fn load_readings_reports_missing_file() {
        let err = load_readings("/nonexistent/daylight.csv").unwrap_err();
        assert!(matches!(err, IngestError::OpenFailed { .. }));
    }
}
