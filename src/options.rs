//! Configuration options for the encoder.
//!
//! [`EncoderOptions`] controls layout and the limits the encoder enforces.
//! The struct is `serde`-enabled so it can sit inside a larger service
//! configuration file.
//!
//! ## Examples
//!
//! ```rust
//! use tl_inspect::EncoderOptions;
//!
//! let options = EncoderOptions::new()
//!     .with_indent(4)
//!     .with_max_depth(32);
//! assert_eq!(options.indent, 4);
//! assert_eq!(options.max_depth, 32);
//! ```

use serde::{Deserialize, Serialize};

/// Default scratch size for the output buffer.
pub const DEFAULT_INITIAL_CAPACITY: usize = 1 << 14;

/// Default bound on compound nesting.
pub const DEFAULT_MAX_DEPTH: usize = 100;

/// Placeholder written in place of confidential values.
pub const DEFAULT_SECRET_PLACEHOLDER: &str = "<secret>";

/// Configuration options for rendering schema objects.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::EncoderOptions;
///
/// // Default layout: 2-space indent
/// let options = EncoderOptions::new();
/// assert_eq!(options.indent, 2);
///
/// // No indentation, one member per line
/// let options = EncoderOptions::compact();
/// assert_eq!(options.indent, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderOptions {
    pub indent: usize,
    pub max_depth: usize,
    pub initial_capacity: usize,
    pub secret_placeholder: String,
}

impl Default for EncoderOptions {
    fn default() -> Self {
        EncoderOptions {
            indent: 2,
            max_depth: DEFAULT_MAX_DEPTH,
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            secret_placeholder: DEFAULT_SECRET_PLACEHOLDER.to_string(),
        }
    }
}

impl EncoderOptions {
    /// Creates default options (2-space indent, depth bound of 100, 16 KiB buffer).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates options without indentation.
    ///
    /// Members still go on their own lines; only the leading spaces are dropped.
    #[must_use]
    pub fn compact() -> Self {
        EncoderOptions {
            indent: 0,
            ..Default::default()
        }
    }

    /// Sets the number of spaces per nesting level.
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the maximum compound nesting depth.
    ///
    /// The document root object counts as depth 1.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tl_inspect::EncoderOptions;
    ///
    /// let options = EncoderOptions::new().with_max_depth(8);
    /// assert_eq!(options.max_depth, 8);
    /// ```
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Sets the initial buffer capacity. The buffer still grows past it.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    /// Sets the literal written for confidential fields.
    #[must_use]
    pub fn with_secret_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.secret_placeholder = placeholder.into();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = EncoderOptions::default();
        assert_eq!(options.indent, 2);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.initial_capacity, 16384);
        assert_eq!(options.secret_placeholder, "<secret>");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let options: EncoderOptions = serde_json::from_str(r#"{"indent": 4}"#).unwrap();
        assert_eq!(options.indent, 4);
        assert_eq!(options.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(options.secret_placeholder, "<secret>");
    }
}
