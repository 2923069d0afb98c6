//! Client for an OpenAI-compatible chat completions endpoint.
//!
//! One request per brief, no retries. Every failure, from transport errors to
//! a payload that does not match the identity schema, surfaces as
//! [`RemoteGenerationError`] so the selector can fall back.

use std::time::Duration;

use brandai_core::{
    AppConfig, BrandBrief, BrandIdentity, ColorPalette, SocialMediaPost, Typography,
};
use reqwest::Client;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

use crate::error::RemoteGenerationError;
use crate::prompt::{build_prompt, SYSTEM_PROMPT};

/// Longest error body kept in [`RemoteGenerationError::Status`].
const MAX_ERROR_BODY_CHARS: usize = 500;

/// Settings for [`RemoteBackend`], usually taken from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct RemoteSettings {
    pub base_url: String,
    pub model: String,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl RemoteSettings {
    #[must_use]
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url: config.openai_base_url.clone(),
            model: config.openai_model.clone(),
            temperature: config.openai_temperature,
            max_tokens: config.openai_max_tokens,
            timeout_secs: config.openai_timeout_secs,
        }
    }
}

/// Remote generation backend.
pub struct RemoteBackend {
    client: Client,
    api_key: String,
    endpoint: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
    max_tokens: u32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatChoiceMessage,
}

#[derive(Deserialize)]
struct ChatChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}

/// The exact JSON object the model is asked to return.
///
/// Unknown keys are rejected. A `brand_name` key is tolerated and dropped:
/// the brand name always comes from the brief.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RemotePayload {
    #[serde(default, rename = "brand_name")]
    _brand_name: Option<IgnoredAny>,
    slogan: String,
    color_palette: ColorPalette,
    typography: Typography,
    social_media_posts: Vec<SocialMediaPost>,
    captions: Vec<String>,
    brand_description: String,
    recommendations: Vec<String>,
}

impl RemoteBackend {
    /// Creates a backend with a bounded request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`RemoteGenerationError::Http`] if the underlying
    /// `reqwest::Client` cannot be constructed.
    pub fn new(api_key: &str, settings: RemoteSettings) -> Result<Self, RemoteGenerationError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("brandai/0.1 (identity-generator)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            endpoint: format!("{}/chat/completions", settings.base_url.trim_end_matches('/')),
            model: settings.model,
            temperature: settings.temperature,
            max_tokens: settings.max_tokens,
        })
    }

    /// Generates an identity for `brief` through the completions endpoint.
    ///
    /// # Errors
    ///
    /// - [`RemoteGenerationError::Http`] on network failure or timeout.
    /// - [`RemoteGenerationError::Status`] on a non-2xx response.
    /// - [`RemoteGenerationError::Envelope`] / [`RemoteGenerationError::EmptyCompletion`]
    ///   when the completion envelope has no usable content.
    /// - [`RemoteGenerationError::MalformedJson`] when the content is not JSON.
    /// - [`RemoteGenerationError::Schema`] when the JSON does not match the
    ///   identity schema.
    pub async fn generate(&self, brief: &BrandBrief) -> Result<BrandIdentity, RemoteGenerationError> {
        let prompt = build_prompt(brief);
        let request = ChatRequest {
            model: &self.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: SYSTEM_PROMPT,
                },
                ChatMessage {
                    role: "user",
                    content: &prompt,
                },
            ],
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(brand = %brief.nome, model = %self.model, "sending completion request");
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(RemoteGenerationError::Status {
                status: status.as_u16(),
                body: body.chars().take(MAX_ERROR_BODY_CHARS).collect(),
            });
        }

        let content = extract_content(&body)?;
        tracing::debug!(brand = %brief.nome, chars = content.len(), "completion received");
        parse_identity(&content, brief)
    }
}

/// Pull `choices[0].message.content` out of a completions response body.
fn extract_content(body: &str) -> Result<String, RemoteGenerationError> {
    let envelope: ChatResponse =
        serde_json::from_str(body).map_err(RemoteGenerationError::Envelope)?;
    envelope
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(RemoteGenerationError::EmptyCompletion)
}

/// Remove Markdown code fences and any prose around the JSON object.
fn strip_code_fences(content: &str) -> &str {
    let mut text = content.trim();
    if let Some(rest) = text.strip_prefix("```") {
        // Drop the info string (`json`, `JSON`, ...) up to the first newline.
        text = rest.split_once('\n').map_or_else(
            || rest.trim_start_matches(|c: char| c.is_ascii_alphabetic()),
            |(_, body)| body,
        );
    }
    if let Some(rest) = text.trim_end().strip_suffix("```") {
        text = rest;
    }
    let text = text.trim();

    match (text.find('{'), text.rfind('}')) {
        (Some(start), Some(end)) if start < end => &text[start..=end],
        _ => text,
    }
}

/// Parse model output into an identity for `brief`.
fn parse_identity(content: &str, brief: &BrandBrief) -> Result<BrandIdentity, RemoteGenerationError> {
    let value: serde_json::Value = serde_json::from_str(strip_code_fences(content))
        .map_err(RemoteGenerationError::MalformedJson)?;
    let payload: RemotePayload = serde_json::from_value(value)
        .map_err(|e| RemoteGenerationError::Schema(e.to_string()))?;

    let identity = BrandIdentity {
        brand_name: brief.nome.clone(),
        slogan: payload.slogan,
        color_palette: payload.color_palette,
        typography: payload.typography,
        social_media_posts: payload.social_media_posts,
        captions: payload.captions,
        brand_description: payload.brand_description,
        recommendations: payload.recommendations,
    };
    identity.validate()?;
    Ok(identity)
}

#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;
