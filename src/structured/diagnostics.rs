//! Advisory schema conformance check for model output.
//!
//! Violations are only logged. Normalization decides what the caller gets.

use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

use crate::error::{Error, ErrorContext};

pub struct SchemaDiagnostics {
    schema: JSONSchema,
}

impl SchemaDiagnostics {
    pub fn new(schema: &Value) -> crate::Result<Self> {
        let schema = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|e| {
                Error::configuration_with_context(
                    format!("Failed to compile response schema: {}", e),
                    ErrorContext::new().with_source("schema_diagnostics"),
                )
            })?;
        Ok(Self { schema })
    }

    /// Diagnostics against the fixed answer schema.
    pub fn for_answer() -> crate::Result<Self> {
        Self::new(&crate::structured::schema::answer_schema())
    }

    /// Human-readable violations of `instance`, empty when it conforms.
    pub fn violations(&self, instance: &Value) -> Vec<String> {
        match self.schema.validate(instance) {
            Ok(()) => Vec::new(),
            Err(errors) => errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        e.to_string()
                    } else {
                        format!("{}: {}", path, e)
                    }
                })
                .collect(),
        }
    }

    /// Log violations of raw model output at debug level. Non-JSON text is skipped;
    /// the normalizer reports that case itself.
    pub fn inspect(&self, raw: &str) {
        let Ok(instance) = serde_json::from_str::<Value>(raw) else {
            return;
        };
        for violation in self.violations(&instance) {
            tracing::debug!(%violation, "model output deviates from response schema");
        }
    }
}

impl std::fmt::Debug for SchemaDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SchemaDiagnostics").finish_non_exhaustive()
    }
}
