//! Per-shape default properties used to fill in what the model leaves out.

use std::collections::HashMap;

use serde_json::json;

use crate::types::{Props, ShapeKind};

/// Immutable table of default props per [`ShapeKind`].
///
/// Every kind has an entry, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDefaults {
    table: HashMap<ShapeKind, Props>,
}

impl ShapeDefaults {
    /// Table with the built-in renderer defaults.
    pub fn builtin() -> Self {
        let mut table = HashMap::new();
        table.insert(
            ShapeKind::Rect,
            props(json!({"x": 50, "y": 100, "width": 80, "height": 50, "fill": "#e74c3c"})),
        );
        table.insert(
            ShapeKind::Circle,
            props(json!({"x": 100, "y": 100, "r": 20, "fill": "#3498db"})),
        );
        table.insert(
            ShapeKind::Text,
            props(json!({"x": 50, "y": 50, "text": "Label", "fontSize": 16, "fill": "#2c3e50"})),
        );
        table.insert(
            ShapeKind::Line,
            props(json!({"x1": 0, "y1": 0, "x2": 100, "y2": 0, "stroke": "#34495e"})),
        );
        table.insert(
            ShapeKind::Arrow,
            props(json!({"x1": 0, "y1": 0, "x2": 100, "y2": 0, "stroke": "#34495e"})),
        );
        Self { table }
    }

    /// Table with no defaults at all. Every kind still has an (empty) entry.
    pub fn empty() -> Self {
        Self {
            table: ShapeKind::ALL.iter().map(|k| (*k, Props::new())).collect(),
        }
    }

    /// Replace the defaults of one kind.
    pub fn with_kind(mut self, kind: ShapeKind, defaults: Props) -> Self {
        self.table.insert(kind, defaults);
        self
    }

    pub fn get(&self, kind: ShapeKind) -> &Props {
        // ALL kinds are inserted by every constructor.
        &self.table[&kind]
    }

    /// Defaults overlaid with `given`. Values in `given` always win.
    ///
    /// `kind` is `None` for layers whose `type` is missing or unknown; their props are
    /// returned as given.
    pub fn resolve(&self, kind: Option<ShapeKind>, given: Props) -> Props {
        let Some(kind) = kind else {
            return given;
        };
        let mut merged = self.get(kind).clone();
        for (k, v) in given {
            merged.insert(k, v);
        }
        merged
    }
}

impl Default for ShapeDefaults {
    fn default() -> Self {
        Self::builtin()
    }
}

fn props(value: serde_json::Value) -> Props {
    match value {
        serde_json::Value::Object(map) => map,
        _ => Props::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_an_entry() {
        for table in [ShapeDefaults::builtin(), ShapeDefaults::empty()] {
            for kind in ShapeKind::ALL {
                let _ = table.get(kind);
            }
        }
    }

    #[test]
    fn test_builtin_circle_defaults() {
        let defaults = ShapeDefaults::builtin();
        let circle = defaults.get(ShapeKind::Circle);
        assert_eq!(
            serde_json::Value::Object(circle.clone()),
            json!({"x": 100, "y": 100, "r": 20, "fill": "#3498db"})
        );
    }

    #[test]
    fn test_resolve_given_values_win() {
        let defaults = ShapeDefaults::builtin();
        let given = props(json!({"width": 200, "label": "box"}));
        let merged = defaults.resolve(Some(ShapeKind::Rect), given);
        assert_eq!(merged["width"], 200);
        assert_eq!(merged["height"], 50);
        assert_eq!(merged["fill"], "#e74c3c");
        assert_eq!(merged["label"], "box");
        assert_eq!(merged.len(), 6);
    }

    #[test]
    fn test_resolve_unknown_kind_is_untouched() {
        let defaults = ShapeDefaults::builtin();
        let given = props(json!({"sides": 6}));
        assert_eq!(defaults.resolve("hexagon".parse().ok(), given.clone()), given);
    }

    #[test]
    fn test_with_kind_overrides_table() {
        let defaults = ShapeDefaults::empty().with_kind(ShapeKind::Line, props(json!({"stroke": "red"})));
        assert_eq!(defaults.get(ShapeKind::Line)["stroke"], "red");
        assert!(defaults.get(ShapeKind::Arrow).is_empty());
    }
}
