//! Gemini `generateContent` REST client.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::{GenerationConfig, SafetySetting, TextGenerator};
use crate::{
    config::Settings,
    error::{PlannerError, Result},
};

/// Text generator backed by the Gemini REST API.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    settings: Settings,
    client: Client,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    generation_config: &'a GenerationConfig,
    safety_settings: &'a [SafetySetting],
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<CandidateContent>,
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PromptFeedback {
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
}

impl GeminiClient {
    /// Creates a client for the configured model.
    ///
    /// # Errors
    ///
    /// Returns `PlannerError::Configuration` if the HTTP client cannot be
    /// initialized.
    pub fn new(settings: Settings) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = settings.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| {
            PlannerError::configuration(format!("Failed to initialize generative model client: {e}"))
        })?;
        Ok(Self { settings, client })
    }

    /// The settings this client was built with.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.settings.endpoint.trim_end_matches('/'),
            self.settings.model
        )
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    fn model_name(&self) -> &str {
        &self.settings.model
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part { text: prompt }],
            }],
            generation_config: &self.settings.generation,
            safety_settings: &self.settings.safety,
        };

        debug!("POST {} ({} prompt bytes)", self.url(), prompt.len());

        let response = self
            .client
            .post(self.url())
            .header("x-goog-api-key", &self.settings.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| PlannerError::generation("Request to Gemini failed").with_source(e))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PlannerError::generation("Failed to read Gemini response").with_source(e))?;

        if !status.is_success() {
            warn!("Gemini returned {status}");
            return Err(PlannerError::generation(api_error_message(status, &text)).build());
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)?;
        extract_text(parsed)
    }
}

fn api_error_message(status: reqwest::StatusCode, body: &str) -> String {
    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(ApiErrorBody { error }) => match error.status {
            Some(code) => format!("Gemini returned {status} ({code}): {}", error.message),
            None => format!("Gemini returned {status}: {}", error.message),
        },
        Err(_) => format!("Gemini returned {status}: {}", body.trim()),
    }
}

/// Concatenates the text parts of the first candidate, or explains why
/// there are none.
fn extract_text(response: GenerateContentResponse) -> Result<String> {
    let Some(candidate) = response.candidates.into_iter().next() else {
        let reason = response
            .prompt_feedback
            .and_then(|feedback| feedback.block_reason)
            .map_or_else(
                || "Gemini response contained no candidates".to_string(),
                |reason| format!("Prompt blocked by the safety policy ({reason})"),
            );
        return Err(PlannerError::generation(reason).build());
    };

    let text: String = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        let reason = candidate.finish_reason.unwrap_or_else(|| "UNKNOWN".to_string());
        return Err(PlannerError::generation(format!(
            "Gemini returned no text (finish reason: {reason})"
        ))
        .build());
    }
    Ok(text)
}
