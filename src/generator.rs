//! `generate(question)`: prompt, one model call, normalize or fall back.

use std::sync::Arc;

use tracing::{debug, info, info_span, Instrument};

use crate::config::ServiceConfig;
use crate::drivers::{GeminiDriver, ModelDriver};
use crate::prompt::{PromptBuilder, StyleGuide};
use crate::scene::{Normalizer, ShapeDefaults};
use crate::structured::{JsonModeConfig, SchemaDiagnostics};
use crate::transport::HttpTransport;
use crate::types::Answer;
use crate::Result;

/// Stateless answer pipeline. Shared across request handlers via `Arc`.
#[derive(Debug)]
pub struct AnswerGenerator {
    prompts: PromptBuilder,
    normalizer: Normalizer,
    json_mode: JsonModeConfig,
    diagnostics: Option<SchemaDiagnostics>,
    driver: Arc<dyn ModelDriver>,
}

impl AnswerGenerator {
    /// Built-in shape defaults, the answer schema, no diagnostics.
    pub fn new(driver: Arc<dyn ModelDriver>, guide: StyleGuide) -> Self {
        Self {
            prompts: PromptBuilder::new(guide),
            normalizer: Normalizer::new(ShapeDefaults::builtin()),
            json_mode: JsonModeConfig::answer(),
            diagnostics: None,
            driver,
        }
    }

    /// Wire a Gemini-backed generator from configuration. Loads the style guide.
    pub fn from_config(config: &ServiceConfig) -> Result<Self> {
        let transport = HttpTransport::new(config.base_url_str(), config.http_timeout)?;
        let driver = GeminiDriver::new(transport, config.model.clone(), config.require_api_key()?);
        let guide = StyleGuide::load(&config.guide_path);

        Ok(Self::new(Arc::new(driver), guide)
            .with_json_mode(JsonModeConfig::answer().with_temperature(config.temperature))
            .with_diagnostics(SchemaDiagnostics::for_answer()?))
    }

    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_json_mode(mut self, json_mode: JsonModeConfig) -> Self {
        self.json_mode = json_mode;
        self
    }

    pub fn with_diagnostics(mut self, diagnostics: SchemaDiagnostics) -> Self {
        self.diagnostics = Some(diagnostics);
        self
    }

    pub fn prompts(&self) -> &PromptBuilder {
        &self.prompts
    }

    /// Answer `question`. Unusable model output yields the fallback answer;
    /// only a failed model call is an error.
    pub async fn generate(&self, question: &str) -> Result<Answer> {
        let request_id = uuid::Uuid::new_v4();
        let span = info_span!(
            "generate",
            %request_id,
            provider = self.driver.provider_id(),
            model = self.driver.model()
        );

        async {
            let prompt = self.prompts.build(question);
            let raw = self.driver.generate_json(&prompt, &self.json_mode).await?;
            debug!(raw = %raw, "raw model response");

            if let Some(diagnostics) = &self.diagnostics {
                diagnostics.inspect(&raw);
            }

            let answer = self.normalizer.normalize_or_fallback(&raw, question);
            info!(
                scene = ?answer.visualization.id,
                layers = answer.visualization.layers.len(),
                duration = %answer.visualization.duration,
                "answer ready"
            );
            Ok::<_, crate::Error>(answer)
        }
        .instrument(span)
        .await
    }
}
