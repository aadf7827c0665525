// ============================================================================
// RECORD - Identity shared by every resource the admin manages
// ============================================================================

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Backend record id. The API hands out both string and numeric ids; both
/// are kept as their string form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecordId(String);

impl RecordId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for RecordId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Serialize for RecordId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Int(i64),
    Float(f64),
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = match RawId::deserialize(deserializer)? {
            RawId::Text(text) => text,
            RawId::Int(n) => n.to_string(),
            RawId::Float(n) => n.to_string(),
        };
        Ok(Self(id))
    }
}

/// A record that can be listed, edited and deleted by id
pub trait Resource: Clone + Serialize + DeserializeOwned + 'static {
    fn id(&self) -> &RecordId;
}

/// Implements `Resource` for structs whose id lives in an `id` field
macro_rules! impl_resource {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl $crate::models::record::Resource for $ty {
                fn id(&self) -> &$crate::models::record::RecordId {
                    &self.id
                }
            }
        )+
    };
}
pub(crate) use impl_resource;

// Lenient numeric fields: form-data backends echo numbers back as strings.

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Num(f64),
    Text(String),
    Null(()),
}

pub(crate) fn lenient_f64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(match RawNumber::deserialize(deserializer)? {
        RawNumber::Num(n) => n,
        RawNumber::Text(text) => text.trim().parse().unwrap_or_default(),
        RawNumber::Null(()) => 0.0,
    })
}

pub(crate) fn lenient_u32<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u32, D::Error> {
    let value = lenient_f64(deserializer)?;
    Ok(if value.is_finite() && value > 0.0 { value as u32 } else { 0 })
}
