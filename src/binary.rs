//! Binary-to-text transcoding.
//!
//! Opaque blobs and fixed-width integer blocks are rendered as standard
//! base64 (RFC 4648 alphabet, padded). Any byte sequence is accepted.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};

/// Appends the base64 form of `bytes` to `out`.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::binary::encode_into;
///
/// let mut out = String::new();
/// encode_into(&mut out, b"hi");
/// assert_eq!(out, "aGk=");
/// ```
pub fn encode_into(out: &mut String, bytes: &[u8]) {
    BASE64.encode_string(bytes, out);
}

/// Returns the base64 form of `bytes`.
#[must_use]
pub fn encode(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Reverses [`encode`]. Returns `None` if `text` is not valid padded base64.
#[must_use]
pub fn decode(text: &str) -> Option<Vec<u8>> {
    BASE64.decode(text).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert_eq!(encode(&[]), "");
        assert_eq!(decode(""), Some(Vec::new()));
    }

    #[test]
    fn test_padding() {
        assert_eq!(encode(b"f"), "Zg==");
        assert_eq!(encode(b"fo"), "Zm8=");
        assert_eq!(encode(b"foo"), "Zm9v");
    }

    #[test]
    fn test_fixed_blocks() {
        let block16 = [0xABu8; 16];
        let block32: Vec<u8> = (0u8..32).collect();
        assert_eq!(decode(&encode(&block16)).unwrap(), block16);
        assert_eq!(decode(&encode(&block32)).unwrap(), block32);
        assert_eq!(encode(&block16).len(), 24);
        assert_eq!(encode(&block32).len(), 44);
    }

    #[test]
    fn test_encode_into_appends() {
        let mut out = String::from("\"");
        encode_into(&mut out, &[0xFF, 0x00]);
        out.push('"');
        assert_eq!(out, "\"/wA=\"");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(decode("not base64!"), None);
    }
}
