//! Redaction policy.
//!
//! Every declared field type carries a [`FieldKind`] (see
//! [`Field::KIND`](crate::Field::KIND)). The kind alone decides whether the
//! value is rendered or replaced by the placeholder, so marking a new type
//! confidential is a matter of declaring its kind, not of teaching the
//! encoder a new special case.
//!
//! ```rust
//! use tl_inspect::{Field, FieldKind, SecretString, Route};
//!
//! assert_eq!(<SecretString as Field>::KIND, FieldKind::ConfidentialText);
//! assert_eq!(FieldKind::ConfidentialText.route(), Route::Redact);
//! assert_eq!(<String as Field>::KIND.route(), Route::Render);
//! ```

/// Classification of a declared field value type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Boolean, integer, floating point or enumerated symbol.
    Scalar,
    /// Human-readable text.
    Text,
    /// Opaque byte blob.
    Binary,
    /// Text that must never appear in output.
    ConfidentialText,
    /// Bytes that must never appear in output.
    ConfidentialBinary,
    /// 128- or 256-bit integer block, rendered as raw bytes.
    FixedBlock,
    /// Nested object, nullable object reference or array.
    Compound,
}

/// Where a field of a given kind is sent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Normal emission path for the kind.
    Render,
    /// Replaced by the placeholder literal.
    Redact,
}

impl FieldKind {
    #[must_use]
    pub const fn is_confidential(self) -> bool {
        matches!(
            self,
            FieldKind::ConfidentialText | FieldKind::ConfidentialBinary
        )
    }

    #[must_use]
    pub const fn route(self) -> Route {
        if self.is_confidential() {
            Route::Redact
        } else {
            Route::Render
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [FieldKind; 7] = [
        FieldKind::Scalar,
        FieldKind::Text,
        FieldKind::Binary,
        FieldKind::ConfidentialText,
        FieldKind::ConfidentialBinary,
        FieldKind::FixedBlock,
        FieldKind::Compound,
    ];

    #[test]
    fn test_only_confidential_kinds_redact() {
        let redacted: Vec<_> = ALL
            .iter()
            .copied()
            .filter(|k| k.route() == Route::Redact)
            .collect();
        assert_eq!(
            redacted,
            vec![FieldKind::ConfidentialText, FieldKind::ConfidentialBinary]
        );
    }
}
