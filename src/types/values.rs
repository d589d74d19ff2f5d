// src/types/values.rs
//! Entry property values as a closed, shape-driven union.
//!
//! Values arrive as loose JSON written by several generations of clients,
//! so their shape is the source of truth, not the property's declared
//! type. A checkbox column may still hold a string from before the column
//! changed type; formatting and grouping stay total over every variant
//! instead of trusting the schema.

use crate::types::PropertyType;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One property value on an entry. Untagged: the JSON shape picks the
/// variant, with `Other` as the catch-all for nulls and exotic payloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Checkbox(bool),
    Number(f64),
    Text(String),
    MultiSelect(Vec<PropertyValue>),
    Select(ObjectValue),
    Other(Value),
}

/// An object-shaped value: a selected option, a relation stub, or any
/// other record-like payload. Unknown fields ride along in `extra` so a
/// value written by a newer client survives a round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ObjectValue {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, Value>,
}

impl PropertyValue {
    /// A plain text value.
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    /// A selected option with an id and a display name.
    pub fn option(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Select(ObjectValue {
            id: Some(id.into()),
            name: Some(name.into()),
            ..ObjectValue::default()
        })
    }

    /// A multi-select value from (id, name) pairs.
    pub fn options<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self::MultiSelect(
            pairs
                .into_iter()
                .map(|(id, name)| Self::option(id, name))
                .collect(),
        )
    }

    /// The blank draft value an editor seeds for a property of this type.
    pub fn empty_for(property_type: PropertyType) -> Self {
        match property_type {
            PropertyType::Checkbox => Self::Checkbox(false),
            PropertyType::MultiSelect => Self::MultiSelect(Vec::new()),
            _ => Self::Text(String::new()),
        }
    }

    /// Whether the value holds nothing worth displaying.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Text(s) => s.is_empty(),
            Self::MultiSelect(items) => items.is_empty(),
            Self::Other(Value::Null) => true,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(json: &str) -> PropertyValue {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_shapes_pick_the_variant() {
        assert_eq!(decode("true"), PropertyValue::Checkbox(true));
        assert_eq!(decode("3.5"), PropertyValue::Number(3.5));
        assert_eq!(decode("\"hello\""), PropertyValue::text("hello"));
        assert_eq!(decode("null"), PropertyValue::Other(Value::Null));
    }

    #[test]
    fn test_object_shape_keeps_extra_fields() {
        let value = decode(r#"{"id":"todo","name":"To Do","color":"blue"}"#);
        let PropertyValue::Select(object) = &value else {
            panic!("expected object shape, got {:?}", value);
        };
        assert_eq!(object.id.as_deref(), Some("todo"));
        assert_eq!(object.name.as_deref(), Some("To Do"));
        assert_eq!(object.extra["color"], Value::from("blue"));

        let json = serde_json::to_value(&value).unwrap();
        assert_eq!(json["color"], Value::from("blue"));
    }

    #[test]
    fn test_array_shape_nests_values() {
        let value = decode(r#"[{"id":"t1","name":"Home"},"loose"]"#);
        let PropertyValue::MultiSelect(items) = value else {
            panic!("expected array shape");
        };
        assert_eq!(items.len(), 2);
        assert_eq!(items[1], PropertyValue::text("loose"));
    }

    #[test]
    fn test_empty_drafts_follow_the_property_type() {
        assert_eq!(
            PropertyValue::empty_for(PropertyType::Checkbox),
            PropertyValue::Checkbox(false)
        );
        assert_eq!(
            PropertyValue::empty_for(PropertyType::MultiSelect),
            PropertyValue::MultiSelect(Vec::new())
        );
        assert_eq!(
            PropertyValue::empty_for(PropertyType::Text),
            PropertyValue::text("")
        );
        assert!(PropertyValue::empty_for(PropertyType::Select).is_blank());
    }
}
