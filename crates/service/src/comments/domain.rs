use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A comment document. Everything except `id` is opaque and passed through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: String,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Comment {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self { id: id.into(), fields }
    }

    /// Build from a JSON object; a non-object value yields no extra fields.
    pub fn from_document(id: impl Into<String>, document: Value) -> Self {
        let mut fields = match document {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        fields.remove("id");
        Self::new(id, fields)
    }
}

impl From<models::comment::Model> for Comment {
    fn from(m: models::comment::Model) -> Self {
        Comment::from_document(m.id, m.document)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_flat_with_id() {
        let c = Comment::from_document("a", json!({ "text": "hi", "likes": 3 }));
        let v = serde_json::to_value(&c).unwrap();
        assert_eq!(v, json!({ "id": "a", "text": "hi", "likes": 3 }));
    }

    #[test]
    fn embedded_id_does_not_shadow_identifier() {
        let c = Comment::from_document("a", json!({ "id": "b", "text": "yo" }));
        assert_eq!(c.id, "a");
        assert_eq!(serde_json::to_value(&c).unwrap(), json!({ "id": "a", "text": "yo" }));
    }

    #[test]
    fn deserializes_unknown_fields_into_map() {
        let c: Comment = serde_json::from_value(json!({ "id": "x", "nested": { "k": [1] } })).unwrap();
        assert_eq!(c.id, "x");
        assert_eq!(c.fields.get("nested"), Some(&json!({ "k": [1] })));
    }
}
