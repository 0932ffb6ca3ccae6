//! Declarative 2D animation scene, as produced by the model and consumed by the client renderer.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

/// Free-form property bag of a layer (`x`, `y`, `r`, `fill`, ...).
///
/// Values are kept as raw JSON so an unexpected value type never breaks a scene.
pub type Props = Map<String, Value>;

/// Drawable shape kinds understood by the client renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShapeKind {
    Rect,
    Circle,
    Text,
    Line,
    Arrow,
}

impl ShapeKind {
    /// All kinds, in the order the response schema enumerates them.
    pub const ALL: [ShapeKind; 5] = [
        ShapeKind::Circle,
        ShapeKind::Rect,
        ShapeKind::Arrow,
        ShapeKind::Line,
        ShapeKind::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Rect => "rect",
            ShapeKind::Circle => "circle",
            ShapeKind::Text => "text",
            ShapeKind::Line => "line",
            ShapeKind::Arrow => "arrow",
        }
    }
}

impl std::fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ShapeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rect" => Ok(ShapeKind::Rect),
            "circle" => Ok(ShapeKind::Circle),
            "text" => Ok(ShapeKind::Text),
            "line" => Ok(ShapeKind::Line),
            "arrow" => Ok(ShapeKind::Arrow),
            _ => Err(format!("Unknown shape kind: {}", s)),
        }
    }
}

/// Deserialize a field that is present in the input, keeping an explicit `null`.
///
/// Paired with `#[serde(default)]`, an absent field stays `None` and is not written back.
pub(crate) fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// A timed linear change of one property of the owning layer.
///
/// Animations are carried through normalization untouched: fields keep whatever JSON
/// the model wrote, absent fields stay absent and unknown keys (`easing`, orbit
/// parameters) are kept in `extra`. `property` may be any prop name; `orbit` is
/// treated like any other numeric property.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Animation {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub property: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub from: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub to: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub start: Option<Value>,
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub end: Option<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Animation {
    pub fn new<N: Into<Number>>(property: impl Into<String>, from: N, to: N, start: N, end: N) -> Self {
        Self {
            property: Some(Value::String(property.into())),
            from: Some(Value::Number(from.into())),
            to: Some(Value::Number(to.into())),
            start: Some(Value::Number(start.into())),
            end: Some(Value::Number(end.into())),
            extra: Map::new(),
        }
    }

    pub fn property_name(&self) -> Option<&str> {
        self.property.as_ref().and_then(Value::as_str)
    }

    pub fn start_ms(&self) -> Option<f64> {
        self.start.as_ref().and_then(Value::as_f64)
    }

    pub fn end_ms(&self) -> Option<f64> {
        self.end.as_ref().and_then(Value::as_f64)
    }

    /// `start <= end` whenever both are numbers. Not enforced anywhere; renderers cope
    /// with reversed windows.
    pub fn is_ordered(&self) -> bool {
        match (self.start_ms(), self.end_ms()) {
            (Some(start), Some(end)) => start <= end,
            _ => true,
        }
    }
}

/// One drawable shape instance within a scene.
///
/// `id` and `type` are kept as the model wrote them, whatever their JSON type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Layer {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    /// Raw shape kind; see [`Layer::shape`].
    #[serde(
        rename = "type",
        default,
        deserialize_with = "present",
        skip_serializing_if = "Option::is_none"
    )]
    pub kind: Option<Value>,
    #[serde(default)]
    pub props: Props,
    #[serde(default)]
    pub animations: Vec<Animation>,
    /// Fields the renderer may understand but this service does not model.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Layer {
    pub fn new(id: impl Into<String>, kind: ShapeKind) -> Self {
        Self {
            id: Some(Value::String(id.into())),
            kind: Some(Value::from(kind.as_str())),
            ..Default::default()
        }
    }

    pub fn with_prop(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    pub fn with_animation(mut self, animation: Animation) -> Self {
        self.animations.push(animation);
        self
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }

    /// Parsed shape kind, or `None` for a missing, non-string or unknown `type`.
    pub fn shape(&self) -> Option<ShapeKind> {
        self.kind
            .as_ref()
            .and_then(Value::as_str)
            .and_then(|s| s.parse().ok())
    }
}

/// A scene exactly as the model returned it: `duration` may be missing or malformed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawScene {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// A renderable scene. Later layers draw on top of earlier ones.
///
/// `duration` is milliseconds, kept as the JSON number the model sent (`3210` stays an
/// integer).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default, deserialize_with = "present", skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub duration: Number,
    #[serde(default)]
    pub layers: Vec<Layer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Scene {
    pub fn new(id: impl Into<String>, duration: impl Into<Number>) -> Self {
        Self {
            id: Some(Value::String(id.into())),
            duration: duration.into(),
            layers: Vec::new(),
            extra: Map::new(),
        }
    }

    pub fn with_layer(mut self, layer: Layer) -> Self {
        self.layers.push(layer);
        self
    }

    pub fn id_str(&self) -> Option<&str> {
        self.id.as_ref().and_then(Value::as_str)
    }

    pub fn layer(&self, id: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.id_str() == Some(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_shape_kind_from_str() {
        assert_eq!("circle".parse::<ShapeKind>().unwrap(), ShapeKind::Circle);
        assert_eq!("arrow".parse::<ShapeKind>().unwrap(), ShapeKind::Arrow);
        assert!("hexagon".parse::<ShapeKind>().is_err());
        assert!("Circle".parse::<ShapeKind>().is_err());
    }

    #[test]
    fn test_layer_keeps_unknown_kind_and_extra_fields() {
        let layer: Layer = serde_json::from_value(json!({
            "id": "h",
            "type": "hexagon",
            "props": {"x": 1},
            "animations": [],
            "zIndex": 3
        }))
        .unwrap();
        assert_eq!(layer.kind, Some(json!("hexagon")));
        assert!(layer.shape().is_none());
        assert_eq!(layer.extra["zIndex"], 3);

        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back["type"], "hexagon");
        assert_eq!(back["zIndex"], 3);
    }

    #[test]
    fn test_layer_id_and_type_of_any_json_type() {
        let layer: Layer = serde_json::from_value(json!({"id": 1, "type": null, "props": {}})).unwrap();
        assert_eq!(layer.id, Some(json!(1)));
        assert_eq!(layer.id_str(), None);
        assert_eq!(layer.kind, Some(Value::Null));
        assert!(layer.shape().is_none());

        let back = serde_json::to_value(&layer).unwrap();
        assert_eq!(back, json!({"id": 1, "type": null, "props": {}, "animations": []}));

        let untyped: Layer = serde_json::from_value(json!({"props": {}})).unwrap();
        assert_eq!(untyped.kind, None);
        assert!(serde_json::to_value(&untyped).unwrap().get("type").is_none());
    }

    #[test]
    fn test_animation_passes_through_unchanged() {
        let raw = r#"{"property":"x","to":5,"end":800,"easing":"easeIn"}"#;
        let anim: Animation = serde_json::from_str(raw).unwrap();
        assert_eq!(anim.from, None);
        assert_eq!(anim.start, None);
        assert_eq!(anim.extra["easing"], "easeIn");
        assert_eq!(serde_json::to_string(&anim).unwrap(), raw);
    }

    #[test]
    fn test_animation_without_property() {
        let anim: Animation = serde_json::from_value(json!({"from": 0, "to": 1})).unwrap();
        assert_eq!(anim.property, None);
        assert_eq!(anim.property_name(), None);
        assert_eq!(serde_json::to_value(&anim).unwrap(), json!({"from": 0, "to": 1}));
    }

    #[test]
    fn test_animation_ordering() {
        assert!(Animation::new("x", 0, 1, 100, 900).is_ordered());
        assert!(!Animation::new("x", 0, 1, 900, 100).is_ordered());

        let open: Animation = serde_json::from_value(json!({"property": "x", "start": 400})).unwrap();
        assert!(open.is_ordered());
    }

    #[test]
    fn test_scene_keeps_integer_duration() {
        let scene = Scene::new("s", 3210);
        assert_eq!(serde_json::to_string(&scene).unwrap(), r#"{"id":"s","duration":3210,"layers":[]}"#);
    }
}
