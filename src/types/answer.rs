//! Top-level answer returned to the caller: explanation text plus one scene.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::scene::{present, RawScene, Scene};

/// Normalized answer. `visualization.duration` is always present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    /// Explanation for the student, as the model wrote it.
    #[serde(default)]
    pub text: Value,
    pub visualization: Scene,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Answer {
    pub fn new(text: impl Into<String>, visualization: Scene) -> Self {
        Self {
            text: Value::String(text.into()),
            visualization,
            extra: Map::new(),
        }
    }

    pub fn text_str(&self) -> Option<&str> {
        self.text.as_str()
    }
}

/// Answer as decoded from model output, before defaulting.
///
/// Missing `text` and `visualization` are tolerated here; the normalizer fills them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAnswer {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub text: Option<Value>,
    #[serde(default)]
    pub visualization: RawScene,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Inbound request body of `POST /api/generate`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub question: Option<String>,
}

impl GenerateRequest {
    /// The question exactly as sent, or `None` when it is absent or blank.
    pub fn question(&self) -> Option<&str> {
        self.question.as_deref().filter(|q| !q.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_raw_answer_tolerates_missing_fields() {
        let raw: RawAnswer = serde_json::from_value(json!({})).unwrap();
        assert_eq!(raw.text, None);
        assert!(raw.visualization.layers.is_empty());
        assert!(raw.visualization.duration.is_none());
    }

    #[test]
    fn test_raw_answer_text_of_any_json_type() {
        let raw: RawAnswer = serde_json::from_value(json!({"text": ["a", "b"], "visualization": {}})).unwrap();
        assert_eq!(raw.text, Some(json!(["a", "b"])));
    }

    #[test]
    fn test_raw_answer_rejects_non_object() {
        assert!(serde_json::from_value::<RawAnswer>(json!([1, 2, 3])).is_err());
        assert!(serde_json::from_value::<RawAnswer>(json!("hello")).is_err());
    }

    #[test]
    fn test_generate_request_question() {
        let req: GenerateRequest = serde_json::from_value(json!({"question": "  Why is the sky blue? "})).unwrap();
        assert_eq!(req.question(), Some("  Why is the sky blue? "));

        let blank: GenerateRequest = serde_json::from_value(json!({"question": "   "})).unwrap();
        assert_eq!(blank.question(), None);

        let missing: GenerateRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(missing.question(), None);
    }
}
