//! Google Gemini generateContent API driver.
//!
//! - Request: `contents=[{role, parts:[{text}]}]`, parameters under `generationConfig`.
//! - JSON mode: `responseMimeType` + `responseSchema` inside `generationConfig`.
//! - Response: `candidates[0].content.parts[0].text`.
//! - API key is passed as `?key=` query parameter, not in headers.

use async_trait::async_trait;
use serde_json::{json, Value};
use tracing::debug;

use crate::error::{Error, ErrorContext};
use crate::structured::JsonModeConfig;
use crate::transport::HttpTransport;

use super::ModelDriver;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Google Gemini generateContent API driver.
#[derive(Debug)]
pub struct GeminiDriver {
    transport: HttpTransport,
    model: String,
    api_key: String,
}

impl GeminiDriver {
    pub fn new(transport: HttpTransport, model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    fn path(&self) -> String {
        format!("/v1beta/models/{}:generateContent", self.model)
    }

    /// Request body for a single-turn prompt.
    pub fn build_request(prompt: &str, json_mode: &JsonModeConfig) -> Value {
        json!({
            "contents": [{
                "role": "user",
                "parts": [{ "text": prompt }],
            }],
            "generationConfig": json_mode.to_gemini_generation_config(),
        })
    }

    /// Extract the reply text from a successful response body.
    pub fn parse_response(body: &Value) -> Result<String, Error> {
        if let Some(reason) = body.pointer("/candidates/0/finishReason").and_then(|v| v.as_str()) {
            debug!(finish_reason = reason, "gemini response finished");
        }

        body.pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(String::from)
            .ok_or_else(|| {
                let blocked = body
                    .pointer("/promptFeedback/blockReason")
                    .and_then(|v| v.as_str())
                    .map(|r| format!("prompt blocked: {}", r));
                Error::runtime_with_context(
                    "Gemini response contains no candidate text",
                    ErrorContext::new()
                        .with_field_path("candidates[0].content.parts[0].text")
                        .with_details(blocked.unwrap_or_else(|| "empty candidates".to_string()))
                        .with_source("gemini_driver"),
                )
            })
    }

    /// Message of a Gemini error body (`{"error": {"message": ...}}`), or the raw body.
    fn error_message(body: &Value) -> String {
        body.pointer("/error/message")
            .and_then(|v| v.as_str())
            .map(String::from)
            .unwrap_or_else(|| match body {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
    }
}

#[async_trait]
impl ModelDriver for GeminiDriver {
    fn provider_id(&self) -> &str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_json(&self, prompt: &str, json_mode: &JsonModeConfig) -> Result<String, Error> {
        let body = Self::build_request(prompt, json_mode);
        let (status, response) = self
            .transport
            .post_json(&self.path(), &[("key", self.api_key.as_str())], &body)
            .await?;

        if !status.is_success() {
            return Err(Error::Remote {
                status: status.as_u16(),
                message: Self::error_message(&response),
            });
        }

        Self::parse_response(&response)
    }
}
