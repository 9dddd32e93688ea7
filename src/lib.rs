//! # tl_inspect
//!
//! Renders live Type Language schema objects into deterministic, indented
//! JSON for diagnostics, debug dumps and state snapshots.
//!
//! ## How it works
//!
//! Every schema type describes itself, member by member, to one shared
//! [`Encoder`]. Nested objects describe themselves to the same encoder, one
//! level deeper. The encoder writes straight into its output buffer in a
//! single pass and owns every formatting decision:
//!
//! - **Separators and indentation**: decided in one place, per nesting level
//! - **Discriminants**: every object opens with `"@type": "<type name>"`
//! - **Escaping**: quotes, backslashes and control characters in text
//! - **Binary data**: blobs and 128/256-bit blocks become base64 strings
//! - **Redaction**: confidential members become `"<secret>"`; whether a
//!   member is confidential is fixed by its declared type
//!
//! ## Quick Start
//!
//! ```rust
//! use tl_inspect::{describe, to_string, Bytes, SecretString};
//!
//! struct Photo {
//!     id: i64,
//!     thumbnail: Bytes,
//! }
//!
//! struct User {
//!     name: String,
//!     password: SecretString,
//!     photos: Vec<Photo>,
//! }
//!
//! describe!(Photo => "photo" { id, thumbnail });
//! describe!(User => "user" { name, password, photos });
//!
//! let user = User {
//!     name: "Bob".to_string(),
//!     password: SecretString::new("hunter2"),
//!     photos: vec![Photo { id: 1, thumbnail: Bytes(vec![0xFF]) }],
//! };
//!
//! let json = to_string(&user).unwrap();
//! assert!(json.starts_with("{\n  \"@type\": \"user\",\n  \"name\": \"Bob\""));
//! assert!(json.contains("\"password\": \"<secret>\""));
//! assert!(!json.contains("hunter2"));
//! ```
//!
//! ## Reports
//!
//! [`Report`] collects fragments rendered by independent subsystems into a
//! single `{"memory_stats":{...}}` document.
//!
//! ## Safety Guarantees
//!
//! - No `unsafe` code blocks
//! - The output buffer grows as needed; nothing is truncated
//! - Nesting is bounded by [`EncoderOptions::max_depth`] and reported as an
//!   error, not a stack overflow
//! - Unbalanced `begin_*`/`end_*` calls panic instead of producing invalid
//!   JSON

pub mod binary;
pub mod describe;
pub mod encoder;
pub mod error;
pub mod escape;
pub mod field;
pub mod macros;
pub mod options;
pub mod policy;
pub mod report;
pub mod value;

pub use describe::Describe;
pub use encoder::{Encoder, Scalar, TYPE_KEY};
pub use error::{Error, Result};
pub use field::{Bytes, Field, SecretBytes, SecretString, UInt128, UInt256};
pub use options::EncoderOptions;
pub use policy::{FieldKind, Route};
pub use report::{MemoryStats, Report, StatsSource};
pub use value::{DynObject, Value};

use std::io;

/// Renders a schema object to a JSON string with default options.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::{to_string, DynObject};
///
/// let json = to_string(&DynObject::new("ok")).unwrap();
/// assert_eq!(json, "{\n  \"@type\": \"ok\"\n}");
/// ```
///
/// # Errors
///
/// Returns an error if the object nests deeper than the default depth bound
/// or a self-description method fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string<T>(value: &T) -> Result<String>
where
    T: ?Sized + Describe,
{
    to_string_with_options(value, EncoderOptions::default())
}

/// Renders a schema object to a JSON string with custom options.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::{to_string_with_options, DynObject, EncoderOptions, Error};
///
/// let deep = DynObject::new("a").with("b", DynObject::new("b").with("c", DynObject::new("c")));
/// let err = to_string_with_options(&deep, EncoderOptions::new().with_max_depth(2)).unwrap_err();
/// assert_eq!(err, Error::DepthLimitExceeded { limit: 2 });
/// ```
///
/// # Errors
///
/// Returns an error if the object nests deeper than `options.max_depth` or
/// a self-description method fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options<T>(value: &T, options: EncoderOptions) -> Result<String>
where
    T: ?Sized + Describe,
{
    let mut encoder = Encoder::new(options);
    value.store(&mut encoder, "")?;
    Ok(encoder.finish())
}

/// Renders a schema object into a writer.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W, T>(writer: W, value: &T) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Describe,
{
    to_writer_with_options(writer, value, EncoderOptions::default())
}

/// Renders a schema object into a writer with custom options.
///
/// # Errors
///
/// Returns an error if rendering fails or writing to the writer fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W, T>(mut writer: W, value: &T, options: EncoderOptions) -> Result<()>
where
    W: io::Write,
    T: ?Sized + Describe,
{
    let json = to_string_with_options(value, options)?;
    writer.write_all(json.as_bytes())?;
    Ok(())
}
