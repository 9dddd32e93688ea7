//! JSON string escaping.

/// Appends `s` to `out` as the body of a JSON string literal (no quotes).
///
/// Escapes `"`, `\` and every control character in `0x00..=0x1F`. The short
/// forms `\b \f \n \r \t` are used where JSON defines them, everything else
/// in that range becomes `\u00XX`.
///
/// # Examples
///
/// ```rust
/// use tl_inspect::escape::escape_into;
///
/// let mut out = String::new();
/// escape_into(&mut out, "say \"hi\"\n");
/// assert_eq!(out, r#"say \"hi\"\n"#);
/// ```
pub fn escape_into(out: &mut String, s: &str) {
    // Copy runs of safe characters in one go
    let mut start = 0;
    for (i, ch) in s.char_indices() {
        let short = match ch {
            '"' => "\\\"",
            '\\' => "\\\\",
            '\u{0008}' => "\\b",
            '\u{000C}' => "\\f",
            '\n' => "\\n",
            '\r' => "\\r",
            '\t' => "\\t",
            '\u{0000}'..='\u{001F}' => "",
            _ => continue,
        };
        out.push_str(&s[start..i]);
        if short.is_empty() {
            push_unicode_escape(out, ch as u8);
        } else {
            out.push_str(short);
        }
        start = i + ch.len_utf8();
    }
    out.push_str(&s[start..]);
}

/// Returns `s` escaped for use inside a JSON string literal.
#[must_use]
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    escape_into(&mut out, s);
    out
}

/// Appends `s` wrapped in double quotes and escaped.
pub fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    escape_into(out, s);
    out.push('"');
}

fn push_unicode_escape(out: &mut String, byte: u8) {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    out.push_str("\\u00");
    out.push(HEX[(byte >> 4) as usize] as char);
    out.push(HEX[(byte & 0x0F) as usize] as char);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_untouched() {
        assert_eq!(escape("hello world"), "hello world");
        assert_eq!(escape(""), "");
        assert_eq!(escape("привет 👋"), "привет 👋");
    }

    #[test]
    fn test_quote_and_backslash() {
        assert_eq!(escape(r#"a"b\c"#), r#"a\"b\\c"#);
    }

    #[test]
    fn test_short_control_escapes() {
        assert_eq!(escape("\u{8}\u{c}\n\r\t"), r"\b\f\n\r\t");
    }

    #[test]
    fn test_other_control_characters() {
        assert_eq!(escape("\0"), r"\u0000");
        assert_eq!(escape("\u{1}x\u{1f}"), r"\u0001x\u001f");
        // DEL is not a JSON control character
        assert_eq!(escape("\u{7f}"), "\u{7f}");
    }

    #[test]
    fn test_write_quoted() {
        let mut out = String::from("key: ");
        write_quoted(&mut out, "a\"b");
        assert_eq!(out, r#"key: "a\"b""#);
    }

    #[test]
    fn test_parses_back_with_json_reader() {
        let input = "line1\nline2\t\"quoted\" \\ \u{0}\u{1b}[0m";
        let mut literal = String::new();
        write_quoted(&mut literal, input);
        let parsed: String = serde_json::from_str(&literal).unwrap();
        assert_eq!(parsed, input);
    }
}
