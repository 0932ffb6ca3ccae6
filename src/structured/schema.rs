//! Schema generation utilities and the fixed answer schema sent to the model.

use serde_json::json;

use crate::types::ShapeKind;

/// Generator for object schemas in the OpenAPI subset model providers accept.
///
/// Never emits `additionalProperties`, which Gemini rejects.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    properties: Vec<(String, serde_json::Value)>,
    required: Vec<String>,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_property(mut self, name: impl Into<String>, schema: serde_json::Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    pub fn set_required(mut self, required: &[&str]) -> Self {
        self.required = required.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn build(self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = serde_json::Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }

        map.into()
    }
}

pub fn schema_from_type_name(type_name: &str) -> serde_json::Value {
    match type_name {
        "string" => json!({"type": "string"}),
        "integer" => json!({"type": "integer"}),
        "number" => json!({"type": "number"}),
        "boolean" => json!({"type": "boolean"}),
        "array" => json!({"type": "array"}),
        "object" => json!({"type": "object"}),
        "null" => json!({"type": "null"}),
        _ => json!({"type": "object"}),
    }
}

fn array_of(items: serde_json::Value) -> serde_json::Value {
    json!({"type": "array", "items": items})
}

const NUMERIC_PROPS: [&str; 11] = [
    "x", "y", "width", "height", "r", "x1", "y1", "x2", "y2", "fontSize", "opacity",
];
const STRING_PROPS: [&str; 3] = ["fill", "stroke", "text"];

/// Schema of a layer's `props` bag.
pub fn props_schema() -> serde_json::Value {
    let mut gen = SchemaGenerator::new();
    for name in NUMERIC_PROPS {
        gen = gen.add_property(name, schema_from_type_name("number"));
    }
    for name in STRING_PROPS {
        gen = gen.add_property(name, schema_from_type_name("string"));
    }
    gen.build()
}

pub fn animation_schema() -> serde_json::Value {
    SchemaGenerator::new()
        .add_property("property", schema_from_type_name("string"))
        .add_property("from", schema_from_type_name("number"))
        .add_property("to", schema_from_type_name("number"))
        .add_property("start", schema_from_type_name("number"))
        .add_property("end", schema_from_type_name("number"))
        .set_required(&["property", "from", "to", "start", "end"])
        .build()
}

pub fn layer_schema() -> serde_json::Value {
    let kinds: Vec<&str> = ShapeKind::ALL.iter().map(|k| k.as_str()).collect();
    SchemaGenerator::new()
        .add_property("id", schema_from_type_name("string"))
        .add_property("type", json!({"type": "string", "enum": kinds}))
        .add_property("props", props_schema())
        .add_property("animations", array_of(animation_schema()))
        .set_required(&["id", "type", "props", "animations"])
        .build()
}

/// The structural contract the model is asked to follow.
///
/// Advisory only: the normalizer repairs violations instead of rejecting them.
pub fn answer_schema() -> serde_json::Value {
    let visualization = SchemaGenerator::new()
        .add_property("id", schema_from_type_name("string"))
        .add_property("duration", schema_from_type_name("number"))
        .add_property("layers", array_of(layer_schema()))
        .set_required(&["id", "duration", "layers"])
        .build();

    SchemaGenerator::new()
        .add_property("text", schema_from_type_name("string"))
        .add_property("visualization", visualization)
        .set_required(&["text", "visualization"])
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_generator_basic() {
        let schema = SchemaGenerator::new()
            .add_property("name", json!({"type": "string"}))
            .add_property("age", json!({"type": "integer"}))
            .build();
        assert_eq!(schema["type"], "object");
        assert_eq!(schema["properties"]["name"]["type"], "string");
        assert_eq!(schema["properties"]["age"]["type"], "integer");
        assert!(schema.get("additionalProperties").is_none());
        assert!(schema.get("required").is_none());
    }

    #[test]
    fn test_answer_schema_required_fields() {
        let schema = answer_schema();
        assert_eq!(schema["required"], json!(["text", "visualization"]));

        let vis = &schema["properties"]["visualization"];
        assert_eq!(vis["required"], json!(["id", "duration", "layers"]));

        let layer = &vis["properties"]["layers"]["items"];
        assert_eq!(layer["required"], json!(["id", "type", "props", "animations"]));
        assert_eq!(
            layer["properties"]["type"]["enum"],
            json!(["circle", "rect", "arrow", "line", "text"])
        );

        let anim = &layer["properties"]["animations"]["items"];
        assert_eq!(anim["required"], json!(["property", "from", "to", "start", "end"]));
        assert_eq!(anim["properties"]["property"]["type"], "string");
        for field in ["from", "to", "start", "end"] {
            assert_eq!(anim["properties"][field]["type"], "number");
        }
    }

    #[test]
    fn test_props_schema_types() {
        let props = props_schema();
        assert_eq!(props["properties"]["fontSize"]["type"], "number");
        assert_eq!(props["properties"]["fill"]["type"], "string");
        assert_eq!(props["properties"].as_object().unwrap().len(), 14);
    }
}
