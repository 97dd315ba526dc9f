use super::{GrammarChecker, GrammarMatch};
use crate::engine::config::GrammarConfig;
use crate::engine::error::{AssistError, Result, Service};
use log::{debug, warn};
use reqwest::blocking::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CheckResponse {
    matches: Vec<RawMatch>,
}

#[derive(Debug, Deserialize)]
struct RawMatch {
    message: String,
    offset: usize,
    length: usize,
    #[serde(default)]
    replacements: Vec<RawReplacement>,
    rule: Option<RawRule>,
}

#[derive(Debug, Deserialize)]
struct RawReplacement {
    value: String,
}

#[derive(Debug, Deserialize)]
struct RawRule {
    id: String,
}

/// Client for a LanguageTool server (`/v2/check`).
pub struct LanguageToolClient {
    endpoint: String,
    language: String,
    http: Client,
}

impl LanguageToolClient {
    pub fn new(config: &GrammarConfig) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| AssistError::unavailable(Service::Grammar, e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            language: config.language.clone(),
            http,
        })
    }

    pub fn check_url(&self) -> String {
        format!("{}/v2/check", self.endpoint)
    }
}

impl GrammarChecker for LanguageToolClient {
    fn check(&self, text: &str) -> Result<Vec<GrammarMatch>> {
        if text.trim().is_empty() {
            return Ok(Vec::new());
        }

        let url = self.check_url();
        debug!("checking {} chars against {}", text.chars().count(), url);

        let body = self
            .http
            .post(&url)
            .form(&[("text", text), ("language", self.language.as_str())])
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
            .map_err(|e| {
                warn!("LanguageTool request to {} failed: {}", url, e);
                AssistError::unavailable(Service::Grammar, e.to_string())
            })?;

        parse_response(text, &body)
    }
}

/// Decodes a `/v2/check` response body, converting LanguageTool's UTF-16
/// offsets into character offsets of `text`.
pub fn parse_response(text: &str, body: &str) -> Result<Vec<GrammarMatch>> {
    let response: CheckResponse = serde_json::from_str(body).map_err(|e| {
        AssistError::unavailable(Service::Grammar, format!("malformed response: {}", e))
    })?;

    let index = utf16_to_char_index(text);
    let to_char = |utf16: usize| index.get(utf16).copied().unwrap_or(utf16);

    Ok(response
        .matches
        .into_iter()
        .map(|raw| {
            let start = to_char(raw.offset);
            let end = to_char(raw.offset.saturating_add(raw.length));
            GrammarMatch {
                message: raw.message,
                replacements: raw.replacements.into_iter().map(|r| r.value).collect(),
                offset: start,
                length: end.saturating_sub(start),
                rule_id: raw.rule.map(|r| r.id),
            }
        })
        .collect())
}

/// Maps every UTF-16 code unit position (plus the end) to a char index.
fn utf16_to_char_index(text: &str) -> Vec<usize> {
    let mut index = Vec::with_capacity(text.len() + 1);
    let mut chars = 0;
    for c in text.chars() {
        for _ in 0..c.len_utf16() {
            index.push(chars);
        }
        chars += 1;
    }
    index.push(chars);
    index
}
