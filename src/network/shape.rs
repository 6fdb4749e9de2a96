use serde_json::{Map, Value};

use crate::error::QueryError;

/// Name of the envelope key wrapping price and game info payloads
pub const ENVELOPE_KEY: &str = "data";

/// Root of a parsed response, classified once after parsing
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    /// `[...]`
    Array(Vec<Value>),

    /// `{"data": ...}`
    Enveloped(Value),

    /// Any other object
    Object(Map<String, Value>)
}

impl Shape {
    pub fn classify(value: Value) -> Result<Self, QueryError> {
        match value {
            Value::Array(values) => Ok(Self::Array(values)),

            Value::Object(mut object) => match object.shift_remove(ENVELOPE_KEY) {
                Some(data) => Ok(Self::Enveloped(data)),
                None => Ok(Self::Object(object))
            }

            other => Err(QueryError::malformed(format!("expected json array or object, got `{other}`")))
        }
    }

    #[inline]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Array(_) => "array",
            Self::Enveloped(_) => "enveloped object",
            Self::Object(_) => "object"
        }
    }

    #[inline]
    pub fn into_value(self) -> Value {
        match self {
            Self::Array(values) => Value::Array(values),
            Self::Enveloped(data) => data,
            Self::Object(object) => Value::Object(object)
        }
    }
}

/// Shape an endpoint is documented to respond with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentShape {
    /// Payload is wrapped into the `data` key. Anything else is malformed
    Envelope,

    /// Payload is a bare array. Anything else is malformed
    Array,

    /// Depends on the parameters: the `data` envelope is unwrapped if present,
    /// arrays and other objects are passed as-is
    Detect
}

impl ContentShape {
    /// Extract caller-facing content from the parsed response
    pub fn extract(&self, json: Value) -> Result<Value, QueryError> {
        let shape = Shape::classify(json)?;

        match (self, shape) {
            (Self::Detect, shape) |
            (Self::Envelope, shape @ Shape::Enveloped(_)) |
            (Self::Array, shape @ Shape::Array(_)) => Ok(shape.into_value()),

            (expected, shape) => Err(QueryError::malformed(format!("expected {expected:?} response, got {}", shape.kind())))
        }
    }
}
