//! Fixed scene returned when model output cannot be used.

use crate::types::{Animation, Answer, Layer, Scene, ShapeKind};

pub const FALLBACK_SCENE_ID: &str = "fallback_vis";
pub const FALLBACK_DURATION: u64 = 4000;

/// Build the fallback answer for `question`.
///
/// Deterministic: the question only appears in the text, the scene never changes.
pub fn fallback_answer(question: &str) -> Answer {
    Answer::new(
        format!(
            "I can help explain {}. This is a fundamental concept that can be visualized.",
            question
        ),
        fallback_scene(),
    )
}

/// A fading-in title over a growing circle.
pub fn fallback_scene() -> Scene {
    Scene::new(FALLBACK_SCENE_ID, FALLBACK_DURATION)
        .with_layer(
            Layer::new("title", ShapeKind::Text)
                .with_prop("x", 200)
                .with_prop("y", 100)
                .with_prop("text", "Concept Visualization")
                .with_prop("fill", "#2c3e50")
                .with_prop("fontSize", 24)
                .with_animation(Animation::new("opacity", 0, 1, 0, 1000)),
        )
        .with_layer(
            Layer::new("circle1", ShapeKind::Circle)
                .with_prop("x", 150)
                .with_prop("y", 200)
                .with_prop("r", 30)
                .with_prop("fill", "#3498db")
                .with_animation(Animation::new("r", 10, 30, 500, 1500)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Number};

    #[test]
    fn test_fallback_text_mentions_question() {
        let answer = fallback_answer("photosynthesis");
        assert_eq!(
            answer.text,
            "I can help explain photosynthesis. This is a fundamental concept that can be visualized."
        );
    }

    #[test]
    fn test_fallback_text_keeps_question_verbatim() {
        let answer = fallback_answer("  what is  inertia?\n");
        assert_eq!(
            answer.text_str(),
            Some("I can help explain   what is  inertia?\n. This is a fundamental concept that can be visualized.")
        );
    }

    #[test]
    fn test_fallback_scene_shape() {
        let scene = fallback_scene();
        assert_eq!(scene.id_str(), Some("fallback_vis"));
        assert_eq!(scene.duration, Number::from(4000));
        let ids: Vec<&str> = scene.layers.iter().filter_map(|l| l.id_str()).collect();
        assert_eq!(ids, vec!["title", "circle1"]);
        assert_eq!(scene.layers[0].shape(), Some(ShapeKind::Text));
        assert_eq!(scene.layers[1].shape(), Some(ShapeKind::Circle));
        assert_eq!(scene.layers[1].animations[0].end, Some(json!(1500)));
    }

    #[test]
    fn test_fallback_scene_is_deterministic() {
        assert_eq!(fallback_answer("a").visualization, fallback_answer("b").visualization);
    }
}
