//! Field values for partial updates and typed conversions of raw field reads
//!
//! A write is described by a [`FieldValues`] list: field name to a closed set
//! of scalar variants, each with a fixed JSON representation. Reads come
//! back as raw text and are converted at the call site through
//! [`FromFieldText`].

use serde::ser::{Error as _, SerializeMap};
use serde::{Serialize, Serializer};

use crate::{ApiError, Result};

/// A scalar value written to a single resource field
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Encoded as a JSON string
    String(String),
    /// Encoded as a JSON integer
    Int(i64),
    /// Encoded as a JSON number; must be finite
    Float(f64),
    /// Encoded as a JSON boolean
    Bool(bool),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            FieldValue::String(value) => serializer.serialize_str(value),
            FieldValue::Int(value) => serializer.serialize_i64(*value),
            FieldValue::Float(value) if value.is_finite() => serializer.serialize_f64(*value),
            FieldValue::Float(value) => Err(S::Error::custom(format!(
                "cannot encode non-finite number {}",
                value
            ))),
            FieldValue::Bool(value) => serializer.serialize_bool(*value),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::String(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::String(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

/// Widened through the shortest decimal form, so `21.3f32` is sent as `21.3`
impl From<f32> for FieldValue {
    fn from(value: f32) -> Self {
        let widened = value
            .to_string()
            .parse::<f64>()
            .unwrap_or_else(|_| f64::from(value));
        FieldValue::Float(widened)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

macro_rules! int_field_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    FieldValue::Int(i64::from(value))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

/// Ordered field name to value list sent as one partial update
///
/// Entries keep their insertion order, so the encoded body is deterministic.
/// Inserting a field twice replaces the earlier value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldValues {
    entries: Vec<(String, FieldValue)>,
}

impl FieldValues {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style [`insert`](Self::insert)
    pub fn with(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(field, value);
        self
    }

    /// Set `field`, replacing any earlier value for it
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<FieldValue>) {
        let field = field.into();
        let value = value.into();

        match self.entries.iter_mut().find(|(name, _)| *name == field) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((field, value)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Encode as a JSON object; an empty list encodes as `{}`
    pub fn encode(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| ApiError::InvalidParameter(e.to_string()))
    }
}

impl Serialize for FieldValues {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for FieldValues {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut values = FieldValues::new();
        for (field, value) in iter {
            values.insert(field, value);
        }
        values
    }
}

/// Conversion from the raw text of a single-field read
pub trait FromFieldText: Sized {
    fn from_field_text(raw: &str) -> Result<Self>;
}

/// Returned verbatim, quotes and all
impl FromFieldText for String {
    fn from_field_text(raw: &str) -> Result<Self> {
        Ok(raw.to_string())
    }
}

impl FromFieldText for bool {
    fn from_field_text(raw: &str) -> Result<Self> {
        match unquote(raw) {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(ApiError::Decode(format!("expected true or false, got '{}'", other))),
        }
    }
}

/// Parsed from a JSON array literal such as `["123","456"]`
impl FromFieldText for Vec<String> {
    fn from_field_text(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw.trim())?)
    }
}

/// Strip surrounding whitespace and one pair of JSON string quotes
pub(crate) fn unquote(raw: &str) -> &str {
    let trimmed = raw.trim();
    trimmed
        .strip_prefix('"')
        .and_then(|rest| rest.strip_suffix('"'))
        .unwrap_or(trimmed)
}
