//! Loosely-typed document access.
//!
//! Documents come back from the store as JSON-shaped records with no fixed
//! schema: a field may be a string, null, a nested mapping, or a list of
//! nested mappings, and may differ in shape between collections. Every
//! accessor here is total — a missing field or a shape mismatch yields
//! `None`, never an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque record as returned by the backing store.
///
/// Wraps a JSON object and exposes shape-checked accessors for the fields the
/// projection pipeline cares about. Empty strings are treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawDocument(Map<String, Value>);

impl RawDocument {
    /// Wrap an existing JSON object.
    pub fn new(fields: Map<String, Value>) -> Self {
        Self(fields)
    }

    /// Convert a JSON value into a document. Non-object values yield `None`.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw access to a field value.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// A field's value as a non-empty string.
    ///
    /// `None` if the field is missing, not a string, or empty.
    pub fn text(&self, name: &str) -> Option<&str> {
        match self.0.get(name) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// The `text` sub-field of the first entry of the `content` list.
    ///
    /// Only returns a value when `content` is a non-empty list whose first
    /// element is a mapping with a non-empty string `text` field. Any shape
    /// mismatch along the way is treated as absent.
    pub fn first_content_text(&self) -> Option<&str> {
        let entries = self.0.get("content")?.as_array()?;
        let first = entries.first()?.as_object()?;
        match first.get("text") {
            Some(Value::String(s)) if !s.is_empty() => Some(s.as_str()),
            _ => None,
        }
    }

    /// A copy of this document restricted to the named fields.
    ///
    /// Fields absent from the document are simply not carried over.
    pub fn project(&self, fields: &[&str]) -> Self {
        let mut map = Map::new();
        for &name in fields {
            if let Some(value) = self.0.get(name) {
                map.insert(name.to_string(), value.clone());
            }
        }
        Self(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> RawDocument {
        RawDocument::from_value(value).expect("test document must be an object")
    }

    #[test]
    fn text_rejects_empty_and_non_string() {
        let d = doc(json!({"a": "hello", "b": "", "c": 42, "d": null}));
        assert_eq!(d.text("a"), Some("hello"));
        assert_eq!(d.text("b"), None);
        assert_eq!(d.text("c"), None);
        assert_eq!(d.text("d"), None);
        assert_eq!(d.text("missing"), None);
    }

    #[test]
    fn first_content_text_happy_path() {
        let d = doc(json!({"content": [{"text": "Hello world"}, {"text": "second"}]}));
        assert_eq!(d.first_content_text(), Some("Hello world"));
    }

    #[test]
    fn first_content_text_shape_mismatches_are_absent() {
        for value in [
            json!({}),
            json!({"content": null}),
            json!({"content": "not a list"}),
            json!({"content": []}),
            json!({"content": ["plain string"]}),
            json!({"content": [{"text": 7}]}),
            json!({"content": [{"text": ""}]}),
            json!({"content": [{"other": "field"}]}),
        ] {
            assert_eq!(doc(value).first_content_text(), None);
        }
    }

    #[test]
    fn project_keeps_only_requested_fields() {
        let d = doc(json!({"id": "x", "headline": "h", "secret": "s"}));
        let projected = d.project(&["id", "headline", "missing"]);
        assert_eq!(projected.text("id"), Some("x"));
        assert_eq!(projected.text("headline"), Some("h"));
        assert_eq!(projected.get("secret"), None);
        assert_eq!(projected.get("missing"), None);
    }

    #[test]
    fn from_value_rejects_non_objects() {
        assert!(RawDocument::from_value(json!("string")).is_none());
        assert!(RawDocument::from_value(json!([1, 2])).is_none());
        assert!(RawDocument::from_value(json!(null)).is_none());
    }
}
