//! # chat2vis-ai
//!
//! AI answer service for Chat2Vis: forwards a student's question to a hosted
//! generative model, asks for a structured JSON answer (explanation text plus a
//! declarative 2D animation scene), fills in missing defaults and returns the result.
//!
//! ## Overview
//!
//! One request flows through two components:
//!
//! - **Prompt Builder** ([`prompt`]): question + animation style guide + output format rules.
//! - **Response Normalizer** ([`scene`]): parses the model's JSON, fills a missing
//!   `duration` and per-shape default props, and substitutes a fixed fallback scene
//!   when the output is unusable.
//!
//! The model call itself sits behind the [`drivers::ModelDriver`] trait, with a
//! Google Gemini implementation. [`structured`] holds the response schema the model
//! is constrained with.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use chat2vis_ai::{config::ServiceConfig, server, AnswerGenerator};
//!
//! #[tokio::main]
//! async fn main() -> chat2vis_ai::Result<()> {
//!     let config = ServiceConfig::from_env()?;
//!     let generator = Arc::new(AnswerGenerator::from_config(&config)?);
//!     server::serve(config.bind_addr, generator).await
//! }
//! ```
//!
//! ## Normalizing model output directly
//!
//! ```rust
//! use chat2vis_ai::scene::Normalizer;
//!
//! let normalizer = Normalizer::default();
//! let answer = normalizer.normalize_or_fallback("not json at all", "gravity");
//! assert_eq!(answer.visualization.id_str(), Some("fallback_vis"));
//! assert_eq!(answer.visualization.duration.as_u64(), Some(4000));
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Answer / Scene / Layer / Animation data model |
//! | [`scene`] | Shape defaults, normalizer, fallback scene |
//! | [`prompt`] | Prompt builder and style guide loading |
//! | [`structured`] | Response schema, JSON mode config, schema diagnostics |
//! | [`drivers`] | Model driver trait and Gemini driver |
//! | [`transport`] | HTTP transport for drivers |
//! | [`generator`] | The `generate(question)` pipeline |
//! | [`config`] | Environment configuration |
//! | [`server`] | axum HTTP surface |

pub mod config;
pub mod drivers;
pub mod generator;
pub mod prompt;
pub mod scene;
pub mod server;
pub mod structured;
pub mod transport;
pub mod types;

pub use generator::AnswerGenerator;
pub use types::{Animation, Answer, Layer, Scene, ShapeKind};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext};
