// ============================================================================
// DRAFT - Form state for create-or-edit
// ============================================================================

use serde_json::{Map, Number, Value};
use std::collections::BTreeMap;

use super::record::RecordId;

/// A file picked in a form, already read into memory
#[derive(Debug, Clone, PartialEq)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn new(file_name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
    File(FileUpload),
    /// Structured values (answer lists, nested objects)
    Json(Value),
    Null,
}

impl FieldValue {
    pub fn text(value: impl Into<String>) -> Self {
        FieldValue::Text(value.into())
    }

    /// Empty text and `Null` count as blank
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::Null => true,
            FieldValue::Json(value) => value.is_null(),
            _ => false,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_file(&self) -> Option<&FileUpload> {
        match self {
            FieldValue::File(file) => Some(file),
            _ => None,
        }
    }

    /// Numeric reading of the field; numeric text counts
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(text) => text.trim().parse().ok(),
            FieldValue::Json(Value::Number(n)) => n.as_f64(),
            _ => None,
        }
    }

    /// JSON form of the value. Files have none.
    pub fn to_json(&self) -> Option<Value> {
        match self {
            FieldValue::Text(text) => Some(Value::String(text.clone())),
            FieldValue::Number(n) => Some(number_value(*n)),
            FieldValue::Bool(b) => Some(Value::Bool(*b)),
            FieldValue::Json(value) => Some(value.clone()),
            FieldValue::Null => Some(Value::Null),
            FieldValue::File(_) => None,
        }
    }

    /// Plain-text form used for multipart text parts
    pub fn to_form_text(&self) -> Option<String> {
        match self {
            FieldValue::Text(text) => Some(text.clone()),
            FieldValue::Number(n) => Some(number_text(*n)),
            FieldValue::Bool(b) => Some(b.to_string()),
            FieldValue::Json(Value::String(s)) => Some(s.clone()),
            FieldValue::Json(value) => Some(value.to_string()),
            FieldValue::Null | FieldValue::File(_) => None,
        }
    }

    /// Field value seeded from a record's JSON (used when editing)
    pub fn from_json(value: &Value) -> Self {
        match value {
            Value::String(s) => FieldValue::Text(s.clone()),
            Value::Number(n) => n.as_f64().map(FieldValue::Number).unwrap_or(FieldValue::Null),
            Value::Bool(b) => FieldValue::Bool(*b),
            Value::Null => FieldValue::Null,
            other => FieldValue::Json(other.clone()),
        }
    }
}

fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number(Number::from(n as i64))
    } else {
        Number::from_f64(n).map(Value::Number).unwrap_or(Value::Null)
    }
}

fn number_text(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        (n as i64).to_string()
    } else {
        n.to_string()
    }
}

/// Draft of a record being created or edited. `editing_id` set means edit mode.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub fields: BTreeMap<String, FieldValue>,
    pub editing_id: Option<RecordId>,
}

impl Draft {
    pub fn is_editing(&self) -> bool {
        self.editing_id.is_some()
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    pub fn set(&mut self, name: &str, value: FieldValue) {
        self.fields.insert(name.to_string(), value);
    }

    pub fn has_file(&self) -> bool {
        self.fields.values().any(|v| matches!(v, FieldValue::File(_)))
    }

    /// Name shown next to a file input
    pub fn file_display_name(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(FieldValue::as_file)
            .map(|file| file.file_name.as_str())
    }

    /// Non-file fields as a JSON object. Null fields are dropped.
    pub fn to_json_object(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .filter_map(|(name, value)| match value.to_json() {
                Some(Value::Null) | None => None,
                Some(json) => Some((name.clone(), json)),
            })
            .collect()
    }
}
