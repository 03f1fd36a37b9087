//! Presentation of narrated schedule text.
//!
//! The narrator returns free text. A [`ScheduleFormatter`] turns it into
//! display lines; the CLI picks which one to use.

use serde::Serialize;

/// One display line of a narrated schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScheduleLine {
    /// `Hour: Brightness - Reason`
    Entry {
        hour: String,
        brightness: String,
        reason: String,
    },
    /// Any line that does not look like an entry, including failure messages.
    Note { text: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FormattedSchedule {
    pub lines: Vec<ScheduleLine>,
}

impl FormattedSchedule {
    pub fn entries(&self) -> impl Iterator<Item = &ScheduleLine> {
        self.lines
            .iter()
            .filter(|l| matches!(l, ScheduleLine::Entry { .. }))
    }

    /// Plain-text rendering, one line per [`ScheduleLine`].
    pub fn render_text(&self) -> String {
        self.lines
            .iter()
            .map(|line| match line {
                ScheduleLine::Entry {
                    hour,
                    brightness,
                    reason,
                } => format!("{hour}: {brightness} - {reason}"),
                ScheduleLine::Note { text } => text.clone(),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait ScheduleFormatter {
    fn format(&self, text: &str) -> FormattedSchedule;
}

/// Splits `Hour: Brightness % - Reason` lines into their parts.
///
/// A line qualifies when it contains both `:` and `-`. The hour is the text
/// before the first `:`, the brightness runs up to the first `-` after it,
/// and the reason is the rest.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormatter;

impl LineFormatter {
    fn parse_line(line: &str) -> ScheduleLine {
        if !(line.contains(':') && line.contains('-')) {
            return ScheduleLine::Note {
                text: line.to_string(),
            };
        }

        let (hour, rest) = line.split_once(':').unwrap_or((line, ""));
        let rest = rest.trim();
        let (brightness, reason) = rest.split_once('-').unwrap_or((rest, ""));

        ScheduleLine::Entry {
            hour: hour.trim().to_string(),
            brightness: brightness.trim().to_string(),
            reason: reason.trim().to_string(),
        }
    }
}

impl ScheduleFormatter for LineFormatter {
    fn format(&self, text: &str) -> FormattedSchedule {
        FormattedSchedule {
            lines: text.split('\n').map(Self::parse_line).collect(),
        }
    }
}

/// Keeps every line verbatim as a note.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainFormatter;

impl ScheduleFormatter for PlainFormatter {
    fn format(&self, text: &str) -> FormattedSchedule {
        FormattedSchedule {
            lines: text
                .split('\n')
                .map(|line| ScheduleLine::Note {
                    text: line.to_string(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(hour: &str, brightness: &str, reason: &str) -> ScheduleLine {
        ScheduleLine::Entry {
            hour: hour.into(),
            brightness: brightness.into(),
            reason: reason.into(),
        }
    }

    fn note(text: &str) -> ScheduleLine {
        ScheduleLine::Note { text: text.into() }
    }

    #[test]
    fn splits_entry_lines() {
        let out = LineFormatter.format("6 AM: 80% - Low morning daylight");
        assert_eq!(out.lines, vec![entry("6 AM", "80%", "Low morning daylight")]);
    }

    #[test]
    fn reason_keeps_later_dashes() {
        let out = LineFormatter.format("Noon: 10% - Bright sun - blinds open");
        assert_eq!(out.lines, vec![entry("Noon", "10%", "Bright sun - blinds open")]);
    }

    #[test]
    fn splits_clock_hours_at_first_colon() {
        let out = LineFormatter.format("09:00: 40% - Moderate light");
        assert_eq!(out.lines, vec![entry("09", "00: 40%", "Moderate light")]);
    }

    #[test]
    fn lines_without_both_markers_are_notes() {
        let text = "Here is your schedule:\n\nAll-day dimming";
        let out = LineFormatter.format(text);
        assert_eq!(
            out.lines,
            vec![note("Here is your schedule:"), note(""), note("All-day dimming")]
        );
        assert_eq!(out.entries().count(), 0);
    }

    #[test]
    fn failure_message_is_a_note() {
        let out = LineFormatter.format("Schedule service did not return a valid response.");
        assert_eq!(out.entries().count(), 0);
    }

    #[test]
    fn plain_formatter_keeps_lines() {
        let out = PlainFormatter.format("6 AM: 80% - Dark\nDone");
        assert_eq!(out.lines, vec![note("6 AM: 80% - Dark"), note("Done")]);
    }

    #[test]
    fn render_text_rebuilds_lines() {
        let out = LineFormatter.format("6 AM:80%-Dark\nDone");
        assert_eq!(out.render_text(), "6 AM: 80% - Dark\nDone");
    }

    #[test]
    fn serializes_with_kind_tag() {
        let out = LineFormatter.format("6 AM: 80% - Dark");
        let json = serde_json::to_value(&out).unwrap();
        assert_eq!(json["lines"][0]["kind"], "entry");
        assert_eq!(json["lines"][0]["hour"], "6 AM");
    }
}
