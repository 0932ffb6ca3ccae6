//! Structured output support: the answer schema, JSON mode request config and
//! advisory schema diagnostics.
//!
//! # Examples
//!
//! ```
//! use chat2vis_ai::structured::{answer_schema, JsonModeConfig};
//!
//! let config = JsonModeConfig::answer().with_temperature(0.3);
//! let generation_config = config.to_gemini_generation_config();
//! assert_eq!(generation_config["responseSchema"], answer_schema());
//! ```

pub mod diagnostics;
pub mod json_mode;
pub mod schema;

pub use diagnostics::SchemaDiagnostics;
pub use json_mode::JsonModeConfig;
pub use schema::{answer_schema, schema_from_type_name, SchemaGenerator};
