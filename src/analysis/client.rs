use regex::Regex;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Duration;

use super::settings::AnalysisSettings;
use super::types::AnalysisReport;
use crate::error::AppError;

/// Seam between the requester and the hosted model, so the request
/// lifecycle can be exercised without a network.
pub trait TextGenerator {
    fn generate(&self, prompt: &str, response_schema: &Value) -> Result<String, AppError>;
}

#[derive(Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
    #[serde(rename = "responseSchema")]
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateResponse {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    parts: Vec<CandidatePart>,
}

#[derive(Deserialize)]
struct CandidatePart {
    text: String,
}

pub struct GeminiClient {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(settings: &AnalysisSettings) -> Result<Self, AppError> {
        let api_key = settings.resolve_api_key()?;
        let client = Client::builder()
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| AppError::Upstream(e.to_string()))?;
        Ok(Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            model: settings.model.clone(),
            api_key,
        })
    }
}

impl TextGenerator for GeminiClient {
    /// Exactly one attempt per call: no retry, no backoff. Transport
    /// failures, non-2xx statuses, and replies without candidate text
    /// all surface as upstream errors.
    fn generate(&self, prompt: &str, response_schema: &Value) -> Result<String, AppError> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
                response_schema: response_schema.clone(),
            },
        };

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| AppError::Upstream(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().unwrap_or_default();
            return Err(AppError::Upstream(format!("API error ({status}): {text}")));
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| AppError::Upstream(format!("Unable to parse response: {e}")))?;

        parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.parts.first())
            .map(|part| part.text.clone())
            .ok_or_else(|| AppError::Upstream("Response carried no candidate text".to_string()))
    }
}

/// Parses model output into a report. Some models wrap JSON in Markdown
/// code fences even under a structured-output constraint, so fences are
/// stripped before parsing.
pub fn parse_report(text: &str) -> Result<AnalysisReport, AppError> {
    let fenced = Regex::new(r"(?s)^\s*```(?:json)?\s*(.*?)\s*```\s*$").expect("regex");
    let body = fenced
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|m| m.as_str())
        .unwrap_or_else(|| text.trim());
    serde_json::from_str(body)
        .map_err(|e| AppError::Upstream(format!("Response was not a valid report: {e}")))
}
