//! Declared field value types.
//!
//! [`Field`] ties each type that can appear as a schema member to its
//! [`FieldKind`] and to the encoder call that renders it. The kind is an
//! associated constant, so whether a member is redacted is fixed by its
//! declared type and checked at compile time.
//!
//! Beyond the std scalars this module defines the schema's own leaf types:
//!
//! - [`Bytes`]: opaque blob, rendered as base64
//! - [`UInt128`] / [`UInt256`]: fixed-width integer blocks, rendered as base64
//!   of their raw bytes
//! - [`SecretString`] / [`SecretBytes`]: confidential values, always rendered
//!   as the placeholder

use crate::{Describe, Encoder, FieldKind, Result};
use chrono::{DateTime, SecondsFormat, Utc};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can be declared as a schema member.
pub trait Field {
    /// Redaction classification of the declared type.
    const KIND: FieldKind;

    /// Renders the value under `name` (empty for array elements).
    ///
    /// Call through [`Encoder::emit_field`], which applies the redaction
    /// route before this method runs.
    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()>;
}

macro_rules! impl_scalar_field {
    ($($ty:ty),*) => {
        $(
            impl Field for $ty {
                const KIND: FieldKind = FieldKind::Scalar;

                fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
                    encoder.emit_scalar(name, self);
                    Ok(())
                }
            }
        )*
    };
}

impl_scalar_field!(bool, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, char);

impl Field for str {
    const KIND: FieldKind = FieldKind::Text;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_scalar(name, self);
        Ok(())
    }
}

impl Field for String {
    const KIND: FieldKind = FieldKind::Text;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_scalar(name, self.as_str());
        Ok(())
    }
}

impl Field for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::Text;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_scalar(name, &self.to_rfc3339_opts(SecondsFormat::Secs, true));
        Ok(())
    }
}

/// An opaque byte blob, rendered as base64.
///
/// Declare blob members as `Bytes`. A member declared as `Vec<u8>` is a
/// sequence of small integers and renders as a JSON array of numbers.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bytes(pub Vec<u8>);

impl Bytes {
    #[must_use]
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }
}

impl From<Vec<u8>> for Bytes {
    fn from(bytes: Vec<u8>) -> Self {
        Bytes(bytes)
    }
}

impl From<&[u8]> for Bytes {
    fn from(bytes: &[u8]) -> Self {
        Bytes(bytes.to_vec())
    }
}

impl Field for Bytes {
    const KIND: FieldKind = FieldKind::Binary;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_binary(name, self.as_slice());
        Ok(())
    }
}

/// 128-bit integer block (e.g. a nonce).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt128(pub [u8; 16]);

/// 256-bit integer block (e.g. a key fingerprint).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct UInt256(pub [u8; 32]);

impl Field for UInt128 {
    const KIND: FieldKind = FieldKind::FixedBlock;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_binary(name, &self.0);
        Ok(())
    }
}

impl Field for UInt256 {
    const KIND: FieldKind = FieldKind::FixedBlock;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_binary(name, &self.0);
        Ok(())
    }
}

/// Confidential text such as a password or login code.
///
/// `Debug` never prints the contents either.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        SecretString(value.into())
    }

    /// Borrows the secret. Never pass the result to an encoder.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SecretString(<secret>)")
    }
}

impl Field for SecretString {
    const KIND: FieldKind = FieldKind::ConfidentialText;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_confidential(name);
        Ok(())
    }
}

/// Confidential binary payload such as key material.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SecretBytes(Vec<u8>);

impl SecretBytes {
    pub fn new(value: impl Into<Vec<u8>>) -> Self {
        SecretBytes(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for SecretBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretBytes(<{} secret bytes>)", self.0.len())
    }
}

impl Field for SecretBytes {
    const KIND: FieldKind = FieldKind::ConfidentialBinary;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_confidential(name);
        Ok(())
    }
}

// Nullable references: an absent value renders as `null`.
impl<T: Field> Field for Option<T> {
    const KIND: FieldKind = T::KIND;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        match self {
            Some(value) => encoder.emit_field(name, value),
            None => {
                encoder.emit_null_object(name);
                Ok(())
            }
        }
    }
}

impl<T: Field + ?Sized> Field for &T {
    const KIND: FieldKind = T::KIND;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_field(name, *self)
    }
}

impl<T: Field + ?Sized> Field for Box<T> {
    const KIND: FieldKind = T::KIND;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_field(name, &**self)
    }
}

impl<T: Field + ?Sized> Field for Arc<T> {
    const KIND: FieldKind = T::KIND;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_field(name, &**self)
    }
}

impl<T: Field + ?Sized> Field for Rc<T> {
    const KIND: FieldKind = T::KIND;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.emit_field(name, &**self)
    }
}

impl<T: Field> Field for [T] {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        encoder.begin_array(name, self.len())?;
        for element in self {
            encoder.emit_field("", element)?;
        }
        encoder.end_array();
        Ok(())
    }
}

impl<T: Field> Field for Vec<T> {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        self.as_slice().store_field(encoder, name)
    }
}

// Polymorphic object behind a trait object.
impl Field for dyn Describe + '_ {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        self.store(encoder, name)
    }
}

impl Field for dyn Describe + Send + Sync + '_ {
    const KIND: FieldKind = FieldKind::Compound;

    fn store_field(&self, encoder: &mut Encoder, name: &str) -> Result<()> {
        self.store(encoder, name)
    }
}
