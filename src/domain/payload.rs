use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PayloadError {
    #[error("Request body is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("Request body must be a JSON object, got {0}")]
    NotAnObject(&'static str),
}

/// Incoming webhook body. No schema is enforced: the mapping worksheet defines which keys
/// are used.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Payload(Map<String, Value>);

impl Payload {
    pub fn from_slice(body: &[u8]) -> Result<Self, PayloadError> {
        match serde_json::from_slice::<Value>(body)? {
            Value::Object(fields) => Ok(Payload(fields)),
            other => Err(PayloadError::NotAnObject(json_kind(&other))),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl From<Map<String, Value>> for Payload {
    fn from(fields: Map<String, Value>) -> Self {
        Payload(fields)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
