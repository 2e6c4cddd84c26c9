//! Opaque JSON documents as stored in a collection.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Name of the identifier field.
pub const ID_FIELD: &str = "_id";

/// A single stored document.
///
/// The store does not interpret document contents. The only field with
/// special handling is `_id`, which may arrive as a string, a number or
/// Mongo extended JSON (`{"$oid": "..."}`) and is always exposed as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Wrap a JSON value; returns `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Builder-style field insertion.
    pub fn with(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(field.into(), value.into());
        self
    }

    /// Insert or overwrite a field.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(field.into(), value.into());
    }

    /// Look up a field.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Whether the document has the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// Document identifier rendered as a string.
    pub fn id(&self) -> Option<String> {
        self.0.get(ID_FIELD).and_then(id_to_string)
    }

    /// Replace `_id` with its string form so it serializes as plain JSON.
    pub fn with_string_id(mut self) -> Self {
        if let Some(id) = self.id() {
            self.0.insert(ID_FIELD.to_string(), Value::String(id));
        }
        self
    }
}

impl From<Document> for Value {
    fn from(doc: Document) -> Self {
        Value::Object(doc.0)
    }
}

fn id_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Object(map) => map.get("$oid").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}
