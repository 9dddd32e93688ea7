//! Streaming JSON encoder for schema objects.
//!
//! This module provides the [`Encoder`], the single piece of mutable state a
//! rendering request threads through every self-description method. Each
//! schema type describes itself field by field; the encoder decides where
//! separators, newlines and indentation go, escapes text, transcodes binary
//! data and redacts confidential values.
//!
//! ## Layout
//!
//! ```text
//! {
//!   "@type": "user",
//!   "id": 7,
//!   "photos": [
//!     {
//!       "@type": "photo",
//!       "id": 1
//!     }
//!   ],
//!   "password": "<secret>"
//! }
//! ```
//!
//! Every member sits on its own line, indented by
//! [`EncoderOptions::indent`] spaces per level. Objects always open with
//! their `@type` discriminant. Empty arrays are written as `[]`.
//!
//! ## Nesting bookkeeping
//!
//! Each open compound owns one entry on a level stack recording its kind and
//! how many members it has received. The separator decision reads only that
//! counter, and the parent's counter is bumped when the compound's own
//! field-begin runs, before descent. Closing a compound never touches the
//! parent level, so no emission path can leave a stale separator flag behind.
//!
//! ## Direct Usage
//!
//! ```rust
//! use tl_inspect::{Encoder, EncoderOptions};
//!
//! let mut encoder = Encoder::new(EncoderOptions::default());
//! encoder.begin_object("", "user").unwrap();
//! encoder.emit_scalar("name", "Bob");
//! encoder.emit_confidential("password");
//! encoder.end_object();
//!
//! assert_eq!(
//!     encoder.finish(),
//!     "{\n  \"@type\": \"user\",\n  \"name\": \"Bob\",\n  \"password\": \"<secret>\"\n}"
//! );
//! ```

use crate::escape::write_quoted;
use crate::{binary, Describe, EncoderOptions, Error, Field, Result, Route};
use std::fmt::Write as _;

/// Key of the discriminant member written first in every object.
pub const TYPE_KEY: &str = "@type";

// Upper bound on what a length hint may reserve up front.
const MAX_HINT_RESERVE: usize = 1 << 20;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Compound {
    Object,
    Array,
}

impl Compound {
    const fn name(self) -> &'static str {
        match self {
            Compound::Object => "object",
            Compound::Array => "array",
        }
    }
}

#[derive(Debug)]
struct Level {
    compound: Compound,
    members: usize,
}

/// A value that renders as a bare JSON scalar.
///
/// Numbers and booleans are written in canonical decimal form; text is
/// quoted and escaped.
pub trait Scalar {
    fn write_json(&self, out: &mut String);
}

impl Scalar for bool {
    fn write_json(&self, out: &mut String) {
        out.push_str(if *self { "true" } else { "false" });
    }
}

macro_rules! impl_integer_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn write_json(&self, out: &mut String) {
                    // Writing into a String cannot fail
                    let _ = write!(out, "{}", self);
                }
            }
        )*
    };
}

impl_integer_scalar!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

// Each width prints with its own shortest round-trip Display.
macro_rules! impl_float_scalar {
    ($($ty:ty),*) => {
        $(
            impl Scalar for $ty {
                fn write_json(&self, out: &mut String) {
                    // JSON has no literal for these; keep them readable as strings
                    if self.is_nan() {
                        out.push_str("\"NaN\"");
                    } else if self.is_infinite() {
                        out.push_str(if *self > 0.0 {
                            "\"Infinity\""
                        } else {
                            "\"-Infinity\""
                        });
                    } else {
                        let _ = write!(out, "{}", self);
                    }
                }
            }
        )*
    };
}

impl_float_scalar!(f32, f64);

impl Scalar for str {
    fn write_json(&self, out: &mut String) {
        write_quoted(out, self);
    }
}

impl Scalar for String {
    fn write_json(&self, out: &mut String) {
        self.as_str().write_json(out);
    }
}

impl Scalar for char {
    fn write_json(&self, out: &mut String) {
        let mut buf = [0u8; 4];
        self.encode_utf8(&mut buf).write_json(out);
    }
}

/// The structured-text encoder.
///
/// One instance serves exactly one rendering request: it is created empty,
/// driven through `begin_*`/`emit_*`/`end_*` calls, and consumed by
/// [`Encoder::finish`].
///
/// # Panics
///
/// Mismatched calls are bugs in the calling self-description code and
/// panic: closing a compound that is not open, closing an object with
/// `end_array` (or the reverse), writing a second value at the document
/// root, or finishing while compounds are still open.
#[derive(Debug)]
pub struct Encoder {
    output: String,
    options: EncoderOptions,
    levels: Vec<Level>,
    root_written: bool,
}

impl Encoder {
    pub fn new(options: EncoderOptions) -> Self {
        Encoder {
            output: String::with_capacity(options.initial_capacity),
            options,
            levels: Vec::new(),
            root_written: false,
        }
    }

    /// Current nesting depth; 0 at the document root.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Bytes written so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }

    #[must_use]
    pub fn options(&self) -> &EncoderOptions {
        &self.options
    }

    /// Opens an object and writes its `@type` member.
    ///
    /// `field_name` is ignored at the document root.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] if the object would nest deeper
    /// than [`EncoderOptions::max_depth`]. Nothing is written in that case.
    pub fn begin_object(&mut self, field_name: &str, type_tag: &str) -> Result<()> {
        self.begin_compound(field_name, Compound::Object, '{')?;
        self.emit_scalar(TYPE_KEY, type_tag);
        Ok(())
    }

    pub fn end_object(&mut self) {
        self.end_compound(Compound::Object, '}');
    }

    /// Opens an array. `length_hint` only pre-sizes the buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DepthLimitExceeded`] like [`Encoder::begin_object`].
    pub fn begin_array(&mut self, field_name: &str, length_hint: usize) -> Result<()> {
        self.begin_compound(field_name, Compound::Array, '[')?;
        let per_element = self.levels.len() * self.options.indent + 8;
        self.output
            .reserve(length_hint.saturating_mul(per_element).min(MAX_HINT_RESERVE));
        Ok(())
    }

    pub fn end_array(&mut self) {
        self.end_compound(Compound::Array, ']');
    }

    /// Writes a scalar member (or array element when `name` is empty).
    pub fn emit_scalar<T: Scalar + ?Sized>(&mut self, name: &str, value: &T) {
        self.field_begin(name);
        value.write_json(&mut self.output);
    }

    /// Writes `bytes` as a quoted base64 string.
    pub fn emit_binary(&mut self, name: &str, bytes: &[u8]) {
        self.field_begin(name);
        self.output.push('"');
        binary::encode_into(&mut self.output, bytes);
        self.output.push('"');
    }

    /// Writes the secret placeholder. The value itself is never passed in.
    pub fn emit_confidential(&mut self, name: &str) {
        self.field_begin(name);
        write_quoted(&mut self.output, &self.options.secret_placeholder);
    }

    /// Writes `null` for an absent object reference.
    pub fn emit_null_object(&mut self, name: &str) {
        self.field_begin(name);
        self.output.push_str("null");
    }

    /// Writes a declared field, routing confidential kinds to the placeholder.
    ///
    /// # Errors
    ///
    /// Propagates errors from nested objects.
    pub fn emit_field<F: Field + ?Sized>(&mut self, name: &str, value: &F) -> Result<()> {
        match F::KIND.route() {
            Route::Redact => {
                self.emit_confidential(name);
                Ok(())
            }
            Route::Render => value.store_field(self, name),
        }
    }

    /// Writes a nested object through its self-description.
    ///
    /// # Errors
    ///
    /// Propagates errors from the object's `describe_fields`.
    pub fn emit_object<D: Describe + ?Sized>(&mut self, name: &str, value: &D) -> Result<()> {
        value.store(self, name)
    }

    /// Writes an object whose members are produced by `body`.
    ///
    /// The object is closed only if `body` succeeds; on error the encoder is
    /// left mid-document and should be dropped.
    ///
    /// # Errors
    ///
    /// Returns the depth error or whatever `body` returns.
    pub fn object<F>(&mut self, name: &str, type_tag: &str, body: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        self.begin_object(name, type_tag)?;
        body(self)?;
        self.end_object();
        Ok(())
    }

    /// Writes an array whose elements are produced by `body`.
    ///
    /// # Errors
    ///
    /// Returns the depth error or whatever `body` returns.
    pub fn array<F>(&mut self, name: &str, length_hint: usize, body: F) -> Result<()>
    where
        F: FnOnce(&mut Encoder) -> Result<()>,
    {
        self.begin_array(name, length_hint)?;
        body(self)?;
        self.end_array();
        Ok(())
    }

    /// Consumes the encoder and returns the document.
    ///
    /// # Panics
    ///
    /// Panics if any object or array is still open.
    #[must_use]
    pub fn finish(self) -> String {
        if let Some(level) = self.levels.last() {
            panic!(
                "finish() called with {} unclosed compound(s); innermost is an {}",
                self.levels.len(),
                level.compound.name()
            );
        }
        if self.output.len() > self.options.initial_capacity {
            tracing::debug!(
                len = self.output.len(),
                initial_capacity = self.options.initial_capacity,
                "encoder buffer grew past its initial capacity"
            );
        }
        tracing::trace!(len = self.output.len(), "finished document");
        self.output
    }

    fn begin_compound(&mut self, field_name: &str, compound: Compound, open: char) -> Result<()> {
        if self.levels.len() >= self.options.max_depth {
            tracing::warn!(
                limit = self.options.max_depth,
                field = field_name,
                "nesting depth limit exceeded"
            );
            return Err(Error::depth_limit_exceeded(self.options.max_depth));
        }
        self.field_begin(field_name);
        self.output.push(open);
        self.levels.push(Level {
            compound,
            members: 0,
        });
        Ok(())
    }

    fn end_compound(&mut self, compound: Compound, close: char) {
        let level = match self.levels.pop() {
            Some(level) => level,
            None => panic!("end_{}() called with no open compound", compound.name()),
        };
        assert!(
            level.compound == compound,
            "end_{}() called while an {} is open",
            compound.name(),
            level.compound.name()
        );
        // An empty compound closes on the same line: `[]`
        if level.members > 0 {
            self.output.push('\n');
            self.write_indent();
        }
        self.output.push(close);
    }

    // The only place separators are written.
    fn field_begin(&mut self, name: &str) {
        let preceding = match self.levels.last_mut() {
            Some(level) => {
                level.members += 1;
                level.members - 1
            }
            None => {
                assert!(
                    !self.root_written,
                    "a second value was written at the document root"
                );
                self.root_written = true;
                return;
            }
        };
        if preceding > 0 {
            self.output.push(',');
        }
        self.output.push('\n');
        self.write_indent();
        if !name.is_empty() {
            write_quoted(&mut self.output, name);
            self.output.push_str(": ");
        }
    }

    fn write_indent(&mut self) {
        let width = self.levels.len() * self.options.indent;
        self.output.extend(std::iter::repeat(' ').take(width));
    }
}
