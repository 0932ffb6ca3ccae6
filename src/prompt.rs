//! Prompt assembly for the answer model.

use std::io::ErrorKind;
use std::path::Path;

use tracing::{info, warn};

/// Text used in place of a style guide that could not be loaded.
pub const MISSING_GUIDE_PLACEHOLDER: &str = "Animation guide not found.";

const OUTPUT_FORMAT: &str = r#"CRITICAL OUTPUT FORMAT (follow exactly):
{
  "text": "string",
  "visualization": {
    "id": "string",
    "duration": number,
    "layers": [
      {
        "id": "string",
        "type": "circle | rect | line | text | arrow",
        "props": {"x": number, "y": number, ... },
        "animations": [
          {"property": "x | y | opacity | orbit", "from": number, "to": number, "start": number, "end": number}
        ]
      }
    ]
  }
}"#;

const RULES: &str = r#"Rules:
1. Always include "duration". If unsure, set to 2000.
2. Always include "props" with numeric positions and required values.
3. At least one layer must have an animation.
4. If you can't think of anything, output a rectangle and a text label with duration=2000."#;

/// Animation engine style guide, loaded once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleGuide {
    text: String,
}

impl StyleGuide {
    pub fn from_text(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// The placeholder guide.
    pub fn missing() -> Self {
        Self::from_text(MISSING_GUIDE_PLACEHOLDER)
    }

    /// Read the guide from `path`. A missing or unreadable file yields the placeholder.
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(text) => {
                info!(path = %path.display(), bytes = text.len(), "loaded animation guide");
                Self::from_text(text)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                warn!(path = %path.display(), "animation guide not found, using placeholder");
                Self::missing()
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read animation guide, using placeholder");
                Self::missing()
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for StyleGuide {
    fn default() -> Self {
        Self::missing()
    }
}

/// Builds the instruction sent to the model for a question.
#[derive(Debug, Clone, Default)]
pub struct PromptBuilder {
    guide: StyleGuide,
}

impl PromptBuilder {
    pub fn new(guide: StyleGuide) -> Self {
        Self { guide }
    }

    pub fn guide(&self) -> &StyleGuide {
        &self.guide
    }

    /// Role preamble, style guide, output format and rules, in that order.
    pub fn build(&self, question: &str) -> String {
        format!(
            "You are a teacher. Answer this question for a school student: \"{question}\"\n\n\
             ANIMATION ENGINE REQUIREMENTS:\n{guide}\n\n\
             {format}\n\n\
             {rules}\n",
            question = question,
            guide = self.guide.as_str(),
            format = OUTPUT_FORMAT,
            rules = RULES,
        )
    }
}
