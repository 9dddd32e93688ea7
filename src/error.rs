//! Error types for schema object rendering.
//!
//! Rendering itself cannot fail on data: every text value and every byte
//! sequence has a JSON representation. The variants here cover the few
//! conditions that are reported to the caller instead:
//!
//! - **Depth limit**: the object graph nests deeper than
//!   [`EncoderOptions::max_depth`](crate::EncoderOptions::max_depth)
//! - **I/O**: writing the finished document to a sink failed
//! - **Custom**: a self-description method raised its own error
//!
//! Protocol misuse (unbalanced `begin_*`/`end_*` calls) is a bug in the
//! calling code and panics instead of returning an [`Error`].
//!
//! ## Examples
//!
//! ```rust
//! use tl_inspect::Error;
//!
//! let err = Error::depth_limit_exceeded(4);
//! assert!(err.to_string().contains("4"));
//! ```

use std::fmt;
use thiserror::Error;

/// Errors reported while rendering a schema object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// IO error while writing the rendered document
    #[error("IO error: {0}")]
    Io(String),

    /// Nesting went past the configured bound
    #[error("Nesting depth limit of {limit} exceeded\nHelp: raise EncoderOptions::max_depth or check the object graph for runaway recursion")]
    DepthLimitExceeded { limit: usize },

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates a depth limit error for the given bound.
    pub fn depth_limit_exceeded(limit: usize) -> Self {
        Error::DepthLimitExceeded { limit }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tl_inspect::Error;
    ///
    /// let err = Error::custom("file reference expired");
    /// assert!(err.to_string().contains("file reference expired"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }

    /// Creates an I/O error for sink failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::io(&err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_depth_limit_message() {
        let err = Error::depth_limit_exceeded(8);
        assert_eq!(err, Error::DepthLimitExceeded { limit: 8 });
        assert!(err.to_string().contains("limit of 8"));
    }

    #[test]
    fn test_io_from_std() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("pipe closed")));
    }
}
