//! Per-kind response shaping.
//!
//! The emulated API is inconsistent between resource kinds: some kinds take
//! their create payload bare while others expect it under a named field, and
//! toggle responses are either the entity itself or a status envelope around
//! it. Each kind declares a [`ResponsePolicy`] and the generic handlers read
//! it instead of branching on the kind.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::ports::CoreError;

/// How a create request body carries the resource payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestEnvelope {
    /// The body is the payload.
    Bare,
    /// The payload lives under the named top-level field.
    Field(&'static str),
}

impl RequestEnvelope {
    /// Decode a raw request body into the kind's create payload.
    ///
    /// Any parse failure, including a missing envelope field, is reported as
    /// [`CoreError::MalformedPayload`] carrying the raw parser message.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<T, CoreError> {
        match self {
            Self::Bare => serde_json::from_slice(body)
                .map_err(|e| CoreError::MalformedPayload(e.to_string())),
            Self::Field(field) => {
                let mut value: Value = serde_json::from_slice(body)
                    .map_err(|e| CoreError::MalformedPayload(e.to_string()))?;
                let inner = value
                    .as_object_mut()
                    .and_then(|obj| obj.remove(*field))
                    .ok_or_else(|| CoreError::MalformedPayload(format!("missing field `{field}`")))?;
                serde_json::from_value(inner).map_err(|e| CoreError::MalformedPayload(e.to_string()))
            }
        }
    }
}

/// Shape of a toggle response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleShape {
    /// The updated entity at the top level.
    Entity,
    /// `{"status": "success", "message": ..., <field>: entity}`.
    StatusEnvelope {
        /// Field holding the entity.
        field: &'static str,
    },
}

impl ToggleShape {
    /// Wrap a serialized entity according to this shape.
    pub fn wrap(&self, entity: Value, message: String) -> Value {
        match self {
            Self::Entity => entity,
            Self::StatusEnvelope { field } => {
                let mut body = Map::new();
                body.insert("status".to_string(), Value::from("success"));
                body.insert("message".to_string(), Value::from(message));
                body.insert((*field).to_string(), entity);
                Value::Object(body)
            }
        }
    }
}

/// Response-shaping rules for one resource kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponsePolicy {
    /// How create bodies are unwrapped.
    pub create_body: RequestEnvelope,
    /// How toggle responses are wrapped.
    pub toggle_response: ToggleShape,
    /// Whether `team_id` / `visibility` list filters apply.
    pub scoped_listing: bool,
}
