//! Schedule narration through a chat-completion API.
//!
//! The table is rendered into a single user prompt and posted once. Whatever
//! happens on the wire, [`ScheduleNarrator::narrate`] hands back a string:
//! either the model's text or a message describing the failure. There are
//! no retries.

use std::time::Duration;

use reqwest::Client;
use serde_json::json;
use thiserror::Error;

use crate::config::NarratorConfig;
use crate::table::{EnrichedReading, ScheduleTable};

pub const PROMPT_PREAMBLE: &str = "You are an intelligent office lighting assistant. Based on the data below, \
generate a natural-language schedule describing when and why lights change brightness:\n\n";
pub const PROMPT_FORMAT_HINT: &str = "\n\nFormat:\nHour: Brightness % - Reason";

/// Prefix of every transport or decoding failure message.
pub const FAILURE_PREFIX: &str = "Schedule request failed";
pub const INVALID_RESPONSE_MESSAGE: &str = "Schedule service did not return a valid response.";

/// Why a narration request produced no schedule text.
#[derive(Error, Debug)]
pub enum NarratorError {
    #[error("no API key provided")]
    MissingApiKey,

    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("response body is not JSON: {0}")]
    Decode(#[source] reqwest::Error),

    /// The body has no `choices` key at all.
    #[error("response has no choices")]
    NoChoices,

    #[error("response is missing choices[0].message.content")]
    MalformedChoices,
}

impl NarratorError {
    /// User-visible text for this failure.
    pub fn message(&self) -> String {
        match self {
            NarratorError::NoChoices => INVALID_RESPONSE_MESSAGE.to_string(),
            other => format!("{FAILURE_PREFIX}: {other}"),
        }
    }
}

/// One prompt line per reading.
pub fn reading_line(row: &EnrichedReading) -> String {
    format!(
        "Time: {}, Daylight: {} lux, Brightness: {}%",
        row.time, row.lux_text, row.brightness
    )
}

/// Full prompt sent to the model.
pub fn build_prompt(table: &ScheduleTable) -> String {
    let lines: Vec<String> = table.iter().map(reading_line).collect();
    format!("{PROMPT_PREAMBLE}{}{PROMPT_FORMAT_HINT}", lines.join("\n"))
}

/// Pull `choices[0].message.content` out of a chat-completion response.
///
/// # Errors
///
/// [`NarratorError::NoChoices`] when the body lacks `choices`,
/// [`NarratorError::MalformedChoices`] when the nested path is absent or
/// not a string.
pub fn extract_content(output: &serde_json::Value) -> Result<String, NarratorError> {
    if output.get("choices").is_none() {
        return Err(NarratorError::NoChoices);
    }
    output["choices"][0]["message"]["content"]
        .as_str()
        .map(String::from)
        .ok_or(NarratorError::MalformedChoices)
}

/// Client for one chat-completion endpoint and one API key.
pub struct ScheduleNarrator {
    client: Client,
    endpoint: String,
    model: String,
    temperature: f64,
    api_key: String,
}

impl ScheduleNarrator {
    pub fn new(config: &NarratorConfig, api_key: impl Into<String>) -> Self {
        let mut builder = Client::builder();
        if config.timeout_secs > 0 {
            builder = builder.timeout(Duration::from_secs(config.timeout_secs));
        }
        let client = builder.build().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "failed to build HTTP client, using defaults");
            Client::new()
        });

        Self {
            client,
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            api_key: api_key.into(),
        }
    }

    /// Narrate `table`. Never fails: errors come back as message text.
    pub async fn narrate(&self, table: &ScheduleTable) -> String {
        match self.request_schedule(&build_prompt(table)).await {
            Ok(text) => text,
            Err(err) => {
                tracing::warn!(error = %err, endpoint = %self.endpoint, "schedule narration failed");
                err.message()
            }
        }
    }

    /// Post `prompt` and return the model's reply.
    ///
    /// # Errors
    ///
    /// Returns an error on a blank API key, transport failure, non-JSON
    /// body, or unexpected response shape.
    pub async fn request_schedule(&self, prompt: &str) -> Result<String, NarratorError> {
        if self.api_key.trim().is_empty() {
            return Err(NarratorError::MissingApiKey);
        }

        let body = json!({
            "model": self.model,
            "messages": [{ "role": "user", "content": prompt }],
            "temperature": self.temperature,
        });

        tracing::debug!(endpoint = %self.endpoint, model = %self.model, "requesting schedule");
        let resp = self
            .client
            .post(&self.endpoint)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        let output: serde_json::Value = resp.json().await.map_err(NarratorError::Decode)?;
        if !status.is_success() {
            tracing::warn!(%status, "schedule service returned an error status");
        }

        extract_content(&output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::energy::EnergyRates;
    use crate::reading::{read_readings, Reading};

    fn table() -> ScheduleTable {
        ScheduleTable::enrich(
            vec![Reading::new("06:00", 200.0), Reading::new("12:00", 650.5)],
            &EnergyRates::default(),
        )
    }

    fn table_from_csv(csv: &str) -> ScheduleTable {
        ScheduleTable::enrich(read_readings(csv.as_bytes()).unwrap(), &EnergyRates::default())
    }

    #[test]
    fn reading_line_format() {
        let t = table();
        assert_eq!(
            reading_line(&t.rows()[0]),
            "Time: 06:00, Daylight: 200.0 lux, Brightness: 80%"
        );
        assert_eq!(
            reading_line(&t.rows()[1]),
            "Time: 12:00, Daylight: 650.5 lux, Brightness: 10%"
        );
    }

    #[test]
    fn prompt_wraps_lines_in_preamble_and_hint() {
        let prompt = build_prompt(&table());
        assert!(prompt.starts_with(
            "You are an intelligent office lighting assistant. Based on the data below, generate"
        ));
        assert!(prompt.contains(
            "change brightness:\n\nTime: 06:00, Daylight: 200.0 lux, Brightness: 80%\nTime: 12:00"
        ));
        assert!(prompt.ends_with("Brightness: 10%\n\nFormat:\nHour: Brightness % - Reason"));
    }

    #[test]
    fn integer_lux_column_prints_whole_numbers() {
        let t = table_from_csv("time,lux\n06:00,200\n12:00,650\n");
        assert_eq!(
            reading_line(&t.rows()[0]),
            "Time: 06:00, Daylight: 200 lux, Brightness: 80%"
        );
    }

    #[test]
    fn mixed_lux_column_prints_floats() {
        let t = table_from_csv("time,lux\n06:00,200\n12:00,650.5\n");
        let prompt = build_prompt(&t);
        assert!(prompt.contains("Time: 06:00, Daylight: 200.0 lux, Brightness: 80%"));
        assert!(prompt.contains("Time: 12:00, Daylight: 650.5 lux, Brightness: 10%"));
    }

    #[test]
    fn prompt_for_empty_table_has_no_rows() {
        let prompt = build_prompt(&ScheduleTable::default());
        assert_eq!(prompt, format!("{PROMPT_PREAMBLE}{PROMPT_FORMAT_HINT}"));
    }

    #[test]
    fn extracts_nested_content() {
        let output = json!({
            "choices": [{ "message": { "role": "assistant", "content": "6 AM: 80% - Dark" } }]
        });
        assert_eq!(extract_content(&output).unwrap(), "6 AM: 80% - Dark");
    }

    #[test]
    fn missing_choices_is_invalid_response() {
        let output = json!({ "error": { "message": "Invalid API Key" } });
        let err = extract_content(&output).unwrap_err();
        assert!(matches!(err, NarratorError::NoChoices));
        assert_eq!(err.message(), INVALID_RESPONSE_MESSAGE);
    }

    #[test]
    fn empty_choices_is_a_failure() {
        let err = extract_content(&json!({ "choices": [] })).unwrap_err();
        assert!(matches!(err, NarratorError::MalformedChoices));
        assert!(err.message().starts_with(FAILURE_PREFIX));
    }

    #[tokio::test]
    async fn blank_api_key_short_circuits() {
        let narrator = ScheduleNarrator::new(&NarratorConfig::default(), "  ");
        let text = narrator.narrate(&table()).await;
        assert_eq!(text, "Schedule request failed: no API key provided");
    }
}
