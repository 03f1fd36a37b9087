//! Plain-text rendering for terminal output.

use luxboard_core::{FormattedSchedule, LightingStatus, ScheduleLine, ScheduleTable, Summary};

pub fn table(table: &ScheduleTable) -> String {
    let mut out = format!(
        "{:<8} {:>10} {:>11} {:>11} {:>9}\n",
        "TIME", "LUX", "BRIGHTNESS", "ENERGY_KWH", "COST"
    );
    for row in table {
        out.push_str(&format!(
            "{:<8} {:>10} {:>10}% {:>11.4} {:>9.4}\n",
            row.time, row.lux, row.brightness, row.energy_kwh, row.cost
        ));
    }
    out
}

pub fn summary(summary: &Summary) -> String {
    format!(
        "Adjustments:  {} readings\nEnergy Used:  {:.4} kWh\nTotal Cost:   ${:.4}",
        summary.readings, summary.total_kwh, summary.total_cost
    )
}

pub fn status(status: &LightingStatus) -> String {
    match status {
        LightingStatus::Override { brightness } => {
            format!("Manual override active: brightness set to {brightness}%")
        }
        LightingStatus::Auto {
            time,
            brightness,
            now,
        } => format!("Auto-set: time {time} | brightness {brightness}% (now: {now})"),
        LightingStatus::Unmatched => "Could not match brightness with current time.".to_string(),
    }
}

pub fn schedule(schedule: &FormattedSchedule) -> String {
    let width = schedule
        .lines
        .iter()
        .filter_map(|line| match line {
            ScheduleLine::Entry { hour, .. } => Some(hour.chars().count()),
            ScheduleLine::Note { .. } => None,
        })
        .max()
        .unwrap_or(0);

    schedule
        .lines
        .iter()
        .map(|line| match line {
            ScheduleLine::Entry {
                hour,
                brightness,
                reason,
            } => format!("  {:>width$}: {brightness} - {reason}", hour),
            ScheduleLine::Note { text } => text.clone(),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
