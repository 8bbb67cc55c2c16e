//! Defensive view over a VIES response body.

use serde_json::{Map, Value};

/// A decoded VIES response body.
///
/// Always an object: bodies that are empty, malformed, or decode to
/// something other than a JSON object are treated as `{}`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResponseData {
    fields: Map<String, Value>,
}

impl ResponseData {
    /// Decode a response body. Never fails.
    pub fn from_body(body: &str) -> Self {
        Self::from_bytes(body.as_bytes())
    }

    /// Decode a raw response body. Never fails.
    pub fn from_bytes(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(fields)) => Self { fields },
            Ok(other) => {
                tracing::debug!(kind = json_kind(&other), "VIES body is not an object, treating as empty");
                Self::default()
            }
            Err(e) => {
                tracing::debug!(error = %e, "VIES body is not valid JSON, treating as empty");
                Self::default()
            }
        }
    }

    /// Value stored under `key`. `None` means absent; a present JSON `null`
    /// is `Some(&Value::Null)`.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// First key in `keys` that is present.
    pub fn get_any(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|k| self.fields.get(*k))
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }
}

impl From<Map<String, Value>> for ResponseData {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
