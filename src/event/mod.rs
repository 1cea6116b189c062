use serde::{Deserialize, Serialize};
use serde_json::Value;

#[cfg(test)]
mod tests;

/// Event represents a typed payload published to a channel.
///
/// Built per publish call and serialized as the request body.
/// The client never retains it after the request is sent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    /// Event type (e.g., "message", "typing")
    #[serde(rename = "type")]
    pub event_type: String,

    /// Domain-specific event data (opaque to the client)
    /// Not validated locally; the engine decides what it accepts
    pub data: Value,
}

impl Event {
    pub fn new(event_type: impl Into<String>, data: Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }
}

/// Response body of a successful publish.
///
/// Only `id` is read; any other fields the engine returns are ignored.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PublishResult {
    /// Identifier assigned by the engine (passed through unchanged)
    pub id: String,
}

/// A previously published event, as returned by the history endpoint.
///
/// Kept as the raw JSON the engine sent, so an entry serializes back exactly
/// as it was received. `type` and `data` are read through accessors; an entry
/// missing either (or with an odd shape) is still returned, never rejected.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HistoryEntry(Value);

impl HistoryEntry {
    /// The entry's `type`, if present and a string
    pub fn event_type(&self) -> Option<&str> {
        self.0.get("type").and_then(Value::as_str)
    }

    /// The entry's `data`, if present
    pub fn data(&self) -> Option<&Value> {
        self.0.get("data")
    }

    /// Any other field the engine attached (`id`, `channel`, `meta`, ...)
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }
}

impl From<Value> for HistoryEntry {
    fn from(value: Value) -> Self {
        Self(value)
    }
}

/// Wire shape of the history response: `{ "events": [...] }`
#[derive(Debug, Deserialize)]
pub struct HistoryResponse {
    pub events: Vec<HistoryEntry>,
}
