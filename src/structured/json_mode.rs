//! JSON mode support for structured output.
//!
//! Describes the response schema the model is held to, and renders that request
//! into Gemini's `generationConfig` fields.

use serde_json::{json, Value};

/// Schema-constrained JSON output request.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonModeConfig {
    /// Response schema, in Gemini's OpenAPI subset
    pub schema: Value,

    /// Sampling temperature forwarded with the request
    pub temperature: Option<f64>,
}

impl JsonModeConfig {
    /// Example:
    ///
    /// ```
    /// use chat2vis_ai::structured::JsonModeConfig;
    /// use serde_json::json;
    ///
    /// let config = JsonModeConfig::from_schema(json!({"type": "object"}));
    /// assert_eq!(config.to_gemini_generation_config()["responseSchema"], json!({"type": "object"}));
    /// ```
    pub fn from_schema(schema: Value) -> Self {
        Self {
            schema,
            temperature: None,
        }
    }

    /// Constrain output to the fixed answer schema.
    pub fn answer() -> Self {
        Self::from_schema(crate::structured::schema::answer_schema())
    }

    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Render as Gemini `generationConfig`.
    ///
    /// ```json
    /// {
    ///   "temperature": 0.3,
    ///   "responseMimeType": "application/json",
    ///   "responseSchema": { ... }
    /// }
    /// ```
    pub fn to_gemini_generation_config(&self) -> Value {
        let mut config = json!({
            "responseMimeType": "application/json",
            "responseSchema": self.schema.clone(),
        });
        if let Some(t) = self.temperature {
            config["temperature"] = json!(t);
        }
        config
    }
}
