//! Model driver abstraction — the "call the model" capability behind a trait.
//!
//! The answer generator only needs one thing from a provider: given a prompt and a
//! JSON mode config, return the model's raw text. `Arc<dyn ModelDriver>` keeps the
//! generator independent of the provider and lets tests plug in canned replies.

pub mod gemini;

use async_trait::async_trait;

use crate::error::Error;
use crate::structured::JsonModeConfig;

pub use gemini::GeminiDriver;

/// Core trait for provider-specific model calls.
#[async_trait]
pub trait ModelDriver: Send + Sync + std::fmt::Debug {
    /// Provider identifier, for logs.
    fn provider_id(&self) -> &str;

    /// Model name, for logs.
    fn model(&self) -> &str;

    /// Send `prompt` with the JSON constraints in `json_mode`; return the raw reply text.
    ///
    /// The text is not guaranteed to be valid JSON.
    async fn generate_json(&self, prompt: &str, json_mode: &JsonModeConfig) -> Result<String, Error>;
}
