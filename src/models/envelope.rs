// ============================================================================
// ENVELOPE - Normalised view over the backend's response bodies
// ============================================================================
// Each endpoint wraps its payload under a different key (`alldepartments`,
// `additional.sales`, `quizzes[0].questions`, or the bare root). The envelope
// keeps the raw body and hands out payloads by JSON pointer.
// ============================================================================

use serde::de::DeserializeOwned;
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Envelope {
    pub body: Value,
    /// Server-provided message, shown to the admin when present
    pub message: Option<String>,
    /// Explicit `success` flag; absent on most endpoints
    pub success: Option<bool>,
}

impl Envelope {
    pub fn from_body(body: Value) -> Self {
        let message = body
            .get("message")
            .and_then(Value::as_str)
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);
        let success = body.get("success").and_then(Value::as_bool);
        Self { body, message, success }
    }

    /// `true` unless the server explicitly answered `success: false`
    pub fn is_success(&self) -> bool {
        self.success != Some(false)
    }

    /// Raw value under `pointer` (`""` is the whole body)
    pub fn at(&self, pointer: &str) -> Option<&Value> {
        self.body.pointer(pointer).filter(|v| !v.is_null())
    }

    /// Decode a list payload. Missing or null payloads are an empty list.
    pub fn list<T: DeserializeOwned>(&self, pointer: &str) -> Result<Vec<T>, serde_json::Error> {
        match self.at(pointer) {
            Some(value) => serde_json::from_value(value.clone()),
            None => Ok(Vec::new()),
        }
    }

    /// Decode a single record payload, if one is present
    pub fn record<T: DeserializeOwned>(&self, pointer: &str) -> Option<T> {
        let value = self.at(pointer)?;
        match serde_json::from_value(value.clone()) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("⚠️ [ENVELOPE] Payload at `{}` did not decode: {}", pointer, e);
                None
            }
        }
    }

    /// Numeric value (e.g. a total count) under `pointer`
    pub fn count(&self, pointer: &str) -> Option<u64> {
        match self.at(pointer)? {
            Value::Number(n) => n.as_u64().or_else(|| n.as_f64().map(|f| f.max(0.0) as u64)),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// String value under `pointer`, used for ids returned outside the record
    pub fn text(&self, pointer: &str) -> Option<String> {
        match self.at(pointer)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }
}
