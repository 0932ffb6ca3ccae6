//! Response normalizer: model output text in, renderable [`Answer`] out.
//!
//! The model is asked for schema-constrained JSON, but nothing guarantees it complies.
//! Normalization repairs what it can (missing or non-numeric `duration`, missing
//! per-shape props) and passes everything else through as the model wrote it:
//! animations, ids, unknown kinds and extra fields are never rewritten. Only output
//! whose structure cannot be walked is a [`NormalizeError`], which callers turn into
//! the fallback scene via [`Normalizer::normalize_or_fallback`].

use serde_json::{Number, Value};
use thiserror::Error;
use tracing::{debug, warn};

use crate::scene::defaults::ShapeDefaults;
use crate::scene::fallback::fallback_answer;
use crate::types::{Answer, Layer, RawAnswer, RawScene, Scene};

/// Duration used when the model gives neither a duration nor any animation ending after `0`.
pub const DEFAULT_DURATION: i64 = 2000;

/// Slack appended after the last animation when deriving a duration.
pub const DURATION_TAIL: i64 = 500;

/// Why model output could not be normalized.
#[derive(Debug, Error)]
pub enum NormalizeError {
    /// Not JSON, not an object, or a field of the wrong container type
    /// (`layers` not an array, `props` not an object, ...).
    #[error("model output is not valid JSON for an answer: {0}")]
    Decode(#[from] serde_json::Error),

    /// A duration had to be derived but an animation `end` is not a number.
    #[error("layers[{layer}].animations[{animation}].end is not a number: {value}")]
    NonNumericEnd {
        layer: usize,
        animation: usize,
        value: Value,
    },
}

/// Turns raw model output into a renderable answer.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    defaults: ShapeDefaults,
}

impl Normalizer {
    pub fn new(defaults: ShapeDefaults) -> Self {
        Self { defaults }
    }

    pub fn defaults(&self) -> &ShapeDefaults {
        &self.defaults
    }

    /// Decode `raw` and fill in duration and per-shape props.
    pub fn normalize(&self, raw: &str) -> Result<Answer, NormalizeError> {
        let decoded: RawAnswer = serde_json::from_str(raw)?;
        self.normalize_answer(decoded)
    }

    /// Like [`normalize`](Self::normalize), substituting the fallback answer on failure.
    pub fn normalize_or_fallback(&self, raw: &str, question: &str) -> Answer {
        match self.normalize(raw) {
            Ok(answer) => answer,
            Err(e) => {
                warn!(error = %e, "unusable model output, returning fallback scene");
                fallback_answer(question)
            }
        }
    }

    pub fn normalize_answer(&self, raw: RawAnswer) -> Result<Answer, NormalizeError> {
        Ok(Answer {
            text: raw.text.unwrap_or_else(|| Value::String(String::new())),
            visualization: self.normalize_scene(raw.visualization)?,
            extra: raw.extra,
        })
    }

    pub fn normalize_scene(&self, raw: RawScene) -> Result<Scene, NormalizeError> {
        let duration = match raw.duration {
            Some(Value::Number(duration)) => duration,
            Some(other) => {
                warn!(duration = %other, "non-numeric scene duration, deriving one");
                derive_duration(&raw.layers)?
            }
            None => derive_duration(&raw.layers)?,
        };

        let layers = raw
            .layers
            .into_iter()
            .map(|mut layer| {
                let shape = layer.shape();
                if shape.is_none() {
                    debug!(layer = ?layer.id, kind = ?layer.kind, "unknown shape kind, no defaults applied");
                }
                for anim in layer.animations.iter().filter(|a| !a.is_ordered()) {
                    warn!(
                        layer = ?layer.id,
                        property = ?anim.property,
                        start = ?anim.start_ms(),
                        end = ?anim.end_ms(),
                        "animation ends before it starts"
                    );
                }
                let given = std::mem::take(&mut layer.props);
                layer.props = self.defaults.resolve(shape, given);
                layer
            })
            .collect();

        Ok(Scene {
            id: raw.id,
            duration,
            layers,
            extra: raw.extra,
        })
    }
}

/// `max(end) + 500`, or [`DEFAULT_DURATION`] when no animation ends after `0`.
///
/// A missing `end` counts as `0`. The result stays an integer when the largest `end` is.
fn derive_duration(layers: &[Layer]) -> Result<Number, NormalizeError> {
    let mut max_end: Option<&Number> = None;
    for (layer, l) in layers.iter().enumerate() {
        for (animation, a) in l.animations.iter().enumerate() {
            let end = match &a.end {
                None => continue,
                Some(Value::Number(end)) => end,
                Some(other) => {
                    return Err(NormalizeError::NonNumericEnd {
                        layer,
                        animation,
                        value: other.clone(),
                    })
                }
            };
            if max_end.map_or(true, |max| millis(end) > millis(max)) {
                max_end = Some(end);
            }
        }
    }

    match max_end {
        Some(end) if millis(end) > 0.0 => Ok(with_tail(end)),
        _ => Ok(Number::from(DEFAULT_DURATION)),
    }
}

fn millis(n: &Number) -> f64 {
    n.as_f64().unwrap_or_default()
}

fn with_tail(end: &Number) -> Number {
    if let Some(ms) = end.as_i64().and_then(|e| e.checked_add(DURATION_TAIL)) {
        return Number::from(ms);
    }
    Number::from_f64(millis(end) + DURATION_TAIL as f64).unwrap_or_else(|| Number::from(DEFAULT_DURATION))
}
