//! Generation Client: the single call to the letter-generation service.
//!
//! One request per submission, no retries, no streaming, no cache. Whatever
//! goes wrong on the wire is collapsed into one fixed, language-selected
//! message; the underlying detail is logged to stderr only.

use anyhow::{Context, Result, anyhow, bail};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

use super::form::Language;
use super::prompt::LetterRequest;
use super::sanitize::sanitize;
use crate::ui::Style;

/// Terminal failure of one generation attempt.
///
/// Displays as exactly one of two fixed messages chosen by the letter
/// language. Transport detail is never carried here; the client logs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationError {
    language: Language,
}

impl GenerationError {
    pub const fn new(language: Language) -> Self {
        Self { language }
    }

    /// The fixed user-facing message for the given language.
    pub const fn message(language: Language) -> &'static str {
        match language {
            Language::En => "Connection to AI service failed. Please try again.",
            Language::Sw => "Muunganisho na huduma ya AI umefeli. Tafadhali jaribu tena.",
        }
    }
}

impl std::fmt::Display for GenerationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(Self::message(self.language))
    }
}

impl std::error::Error for GenerationError {}

// Use Cow to avoid cloning strings that are only borrowed for serialization
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<Message<'a>>,
    temperature: f32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message<'a> {
    role: &'static str,
    content: Cow<'a, str>,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

pub struct GenerationClient {
    client: Client,
    endpoint: String,
    api_key: Option<String>,
}

impl GenerationClient {
    pub fn new(endpoint: String, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
            api_key,
        }
    }

    /// Issues the single generation request and returns the sanitized letter.
    ///
    /// Any transport error, service error, or empty payload becomes a
    /// `GenerationError` with the fixed message for `language`; the raw
    /// failure is written to stderr for diagnostics.
    pub async fn generate(
        &self,
        request: &LetterRequest,
        language: Language,
    ) -> Result<String, GenerationError> {
        match self.request_letter(request).await {
            Ok(letter) => Ok(letter),
            Err(detail) => {
                eprintln!("{} {detail:#}", Style::error("Generation error:"));
                Err(GenerationError::new(language))
            }
        }
    }

    async fn request_letter(&self, request: &LetterRequest) -> Result<String> {
        let url = format!(
            "{}/v1/chat/completions",
            self.endpoint.trim_end_matches('/')
        );

        let chat_request = ChatCompletionRequest {
            model: &request.model,
            messages: vec![
                Message {
                    role: "system",
                    content: Cow::Borrowed(&request.system_instruction),
                },
                Message {
                    role: "user",
                    content: Cow::Borrowed(&request.prompt),
                },
            ],
            temperature: request.temperature,
            stream: false,
        };

        let mut http_request = self.client.post(&url).json(&chat_request);

        if let Some(api_key) = &self.api_key {
            http_request = http_request.header("Authorization", format!("Bearer {api_key}"));
        }

        let response = http_request
            .send()
            .await
            .with_context(|| format!("Failed to connect to API endpoint: {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("API request failed with status {status}: {body}");
        }

        let completion: ChatCompletionResponse = response
            .json()
            .await
            .context("Failed to decode service response")?;

        normalize_payload(extract_text(completion))
    }
}

/// Pulls the text payload out of the first choice, if any.
fn extract_text(response: ChatCompletionResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

/// Rejects empty payloads and sanitizes the rest.
///
/// A payload that sanitizes down to nothing (e.g. whitespace or bare fences)
/// counts as empty; success never carries empty text.
fn normalize_payload(text: Option<String>) -> Result<String> {
    let raw = text.ok_or_else(|| anyhow!("Empty response from AI"))?;

    let letter = sanitize(&raw);
    if letter.is_empty() {
        bail!("Empty response from AI");
    }

    Ok(letter)
}
