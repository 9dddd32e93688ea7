//! Dynamic schema objects.
//!
//! Most schema types describe themselves through generated
//! [`Describe`](crate::Describe) impls. Subsystems that only know their
//! shape at runtime (ad-hoc state dumps, counters keyed by name) build a
//! [`DynObject`] instead and hand it to the same encoder.
//!
//! ## Core Types
//!
//! - [`Value`]: any member value, including confidential text and bytes
//! - [`DynObject`]: a discriminant plus insertion-ordered members
//!
//! ## Examples
//!
//! ```rust
//! use tl_inspect::{to_string, DynObject, Value};
//!
//! let state = DynObject::new("fileManagerState")
//!     .with("pending_downloads", 3)
//!     .with("paused", false)
//!     .with("auth_key", Value::secret_bytes(vec![0xAA; 8]));
//!
//! let json = to_string(&state).unwrap();
//! assert!(json.contains("\"pending_downloads\": 3"));
//! assert!(json.contains("\"auth_key\": \"<secret>\""));
//! ```
//!
//! Members keep the order they were inserted in, so the rendered text is
//! deterministic.

use crate::{
    Bytes, Describe, Encoder, Field, FieldKind, Result, Route, SecretBytes, SecretString,
};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;

/// A dynamically-typed member value.
///
/// Confidential variants carry their classification with them; they render
/// as the placeholder exactly like the static [`SecretString`] and
/// [`SecretBytes`] fields.
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Bytes(Bytes),
    Date(DateTime<Utc>),
    SecretText(SecretString),
    SecretBytes(SecretBytes),
    Array(Vec<Value>),
    Object(DynObject),
}

impl Value {
    /// Creates a confidential text value.
    pub fn secret_text(value: impl Into<String>) -> Self {
        Value::SecretText(SecretString::new(value))
    }

    /// Creates a confidential binary value.
    pub fn secret_bytes(value: impl Into<Vec<u8>>) -> Self {
        Value::SecretBytes(SecretBytes::new(value))
    }

    /// Runtime classification of this value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tl_inspect::{FieldKind, Value};
    ///
    /// assert_eq!(Value::from(1).kind(), FieldKind::Scalar);
    /// assert_eq!(Value::secret_text("pw").kind(), FieldKind::ConfidentialText);
    /// ```
    #[must_use]
    pub fn kind(&self) -> FieldKind {
        match self {
            Value::Null | Value::Array(_) | Value::Object(_) => FieldKind::Compound,
            Value::Bool(_) | Value::Integer(_) | Value::Float(_) => FieldKind::Scalar,
            Value::Text(_) | Value::Date(_) => FieldKind::Text,
            Value::Bytes(_) => FieldKind::Binary,
            Value::SecretText(_) => FieldKind::ConfidentialText,
            Value::SecretBytes(_) => FieldKind::ConfidentialBinary,
        }
    }
}

// The static kind is Compound; the real classification is per variant.
impl Field for Value {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        if self.kind().route() == Route::Redact {
            encoder.emit_confidential(name);
            return Ok(());
        }
        match self {
            Value::Null => {
                encoder.emit_null_object(name);
                Ok(())
            }
            Value::Bool(b) => b.store_field(encoder, name),
            Value::Integer(i) => i.store_field(encoder, name),
            Value::Float(f) => f.store_field(encoder, name),
            Value::Text(s) => s.store_field(encoder, name),
            Value::Bytes(bytes) => {
                encoder.emit_binary(name, bytes.as_slice());
                Ok(())
            }
            Value::Date(date) => date.store_field(encoder, name),
            Value::SecretText(_) | Value::SecretBytes(_) => {
                encoder.emit_confidential(name);
                Ok(())
            }
            Value::Array(values) => encoder.emit_field(name, values),
            Value::Object(object) => object.store(encoder, name),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

macro_rules! impl_from_integer {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<Bytes> for Value {
    fn from(value: Bytes) -> Self {
        Value::Bytes(value)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Value::Date(value)
    }
}

impl From<SecretString> for Value {
    fn from(value: SecretString) -> Self {
        Value::SecretText(value)
    }
}

impl From<SecretBytes> for Value {
    fn from(value: SecretBytes) -> Self {
        Value::SecretBytes(value)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(values: Vec<T>) -> Self {
        Value::Array(values.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

impl From<DynObject> for Value {
    fn from(value: DynObject) -> Self {
        Value::Object(value)
    }
}

/// An object assembled at runtime.
///
/// Setting a member that already exists replaces its value in place.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct DynObject {
    type_name: String,
    members: IndexMap<String, Value>,
}

impl DynObject {
    pub fn new(type_name: impl Into<String>) -> Self {
        DynObject {
            type_name: type_name.into(),
            members: IndexMap::new(),
        }
    }

    /// Builder form of [`DynObject::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Sets a member, returning the previous value if there was one.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.members.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Describe for DynObject {
    fn type_name(&self) -> &str {
        &self.type_name
    }

    fn describe_fields(&self, encoder: &mut Encoder) -> Result<()> {
        for (name, value) in &self.members {
            encoder.emit_field(name, value)?;
        }
        Ok(())
    }
}

impl Field for DynObject {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        self.store(encoder, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::to_string;

    #[test]
    fn test_members_keep_insertion_order() {
        let object = DynObject::new("stats")
            .with("zeta", 1)
            .with("alpha", 2)
            .with("mid", 3);
        let names: Vec<_> = object.iter().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut object = DynObject::new("stats").with("a", 1).with("b", 2);
        let old = object.insert("a", 10);
        assert_eq!(old, Some(Value::Integer(1)));
        assert_eq!(object.iter().next(), Some(("a", &Value::Integer(10))));
    }

    #[test]
    fn test_render_nested() {
        let object = DynObject::new("chat")
            .with("title", "Rust \"fans\"")
            .with("photo", Value::Null)
            .with("ids", vec![1, 2])
            .with("owner", DynObject::new("user").with("id", 7));

        let json = to_string(&object).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["@type"], "chat");
        assert_eq!(parsed["title"], "Rust \"fans\"");
        assert!(parsed["photo"].is_null());
        assert_eq!(parsed["ids"][1], 2);
        assert_eq!(parsed["owner"]["@type"], "user");
        assert_eq!(parsed["owner"]["id"], 7);
    }

    #[test]
    fn test_secret_values_redacted() {
        let object = DynObject::new("session")
            .with("token", Value::secret_text("tok-123"))
            .with("keys", vec![Value::secret_bytes(b"k1".to_vec())]);
        let json = to_string(&object).unwrap();
        assert!(!json.contains("tok-123"));
        assert!(!json.contains("azE"));
        assert_eq!(json.matches("<secret>").count(), 2);
    }

    #[test]
    fn test_kind_drives_rendering() {
        let values = vec![
            Value::from(3),
            Value::from("text"),
            Value::Bytes(Bytes(vec![0xFF])),
            Value::secret_text("pw-1"),
            Value::secret_bytes(vec![0xFF]),
        ];
        let kinds: Vec<_> = values.iter().map(Value::kind).collect();
        assert_eq!(
            kinds,
            vec![
                FieldKind::Scalar,
                FieldKind::Text,
                FieldKind::Binary,
                FieldKind::ConfidentialText,
                FieldKind::ConfidentialBinary,
            ]
        );

        let json = to_string(&DynObject::new("mixed").with("values", values)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            parsed["values"],
            serde_json::json!([3, "text", "/w==", "<secret>", "<secret>"])
        );
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Text("x".to_string()));
    }
}
