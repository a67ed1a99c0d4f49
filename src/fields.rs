//! Field splitting and percent-decoding.

use crate::constants::SEPARATOR;
use crate::error::ParseErrorKind;

/// Splits a validated body into raw fields, preserving empty fields and
/// never collapsing consecutive separators. An empty body declares no
/// fields; otherwise the field count is the separator count plus one.
pub(crate) fn split(body: &str) -> Vec<&str> {
    if body.is_empty() {
        return Vec::new();
    }
    body.split(SEPARATOR).collect()
}

/// Percent-decodes one raw field.
///
/// Scans left to right; `%` must be followed by exactly two hex digits
/// (either case) and decodes to that byte. Every other character passes
/// through unchanged, and a decoded byte is never re-examined — a decoded
/// `%`, `:`, or NUL is ordinary field content.
///
/// `index` is the field's position in the name and `offset` its byte
/// position in the full URI; both are used only for error reporting.
pub(crate) fn decode(field: &str, index: usize, offset: usize) -> Result<String, ParseErrorKind> {
    let bytes = field.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match (hex(bytes.get(i + 1)), hex(bytes.get(i + 2))) {
                (Some(hi), Some(lo)) => {
                    out.push((hi << 4) | lo);
                    i += 3;
                }
                _ => {
                    return Err(ParseErrorKind::InvalidPercentEscape {
                        position: offset + i,
                    });
                }
            }
        } else {
            out.push(bytes[i]);
            i += 1;
        }
    }
    String::from_utf8(out).map_err(|_| ParseErrorKind::InvalidUtf8 { field: index })
}

fn hex(b: Option<&u8>) -> Option<u8> {
    match b.copied()? {
        b @ b'0'..=b'9' => Some(b - b'0'),
        b @ b'a'..=b'f' => Some(b - b'a' + 10),
        b @ b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_body_declares_no_fields() {
        assert!(split("").is_empty());
    }

    #[test]
    fn split_preserves_empty_fields() {
        assert_eq!(split("a::b"), vec!["a", "", "b"]);
        assert_eq!(split("a:acme:"), vec!["a", "acme", ""]);
    }

    #[test]
    fn decode_passthrough() {
        assert_eq!(decode("acme", 1, 7).unwrap(), "acme");
    }

    #[test]
    fn decode_space() {
        assert_eq!(decode("wid%20get", 2, 12).unwrap(), "wid get");
    }

    #[test]
    fn decode_mixed_case_hex() {
        assert_eq!(decode("%2F%2f", 1, 7).unwrap(), "//");
    }

    #[test]
    fn decoded_percent_is_not_reexamined() {
        assert_eq!(decode("%2520", 1, 7).unwrap(), "%20");
    }

    #[test]
    fn decode_interior_nul() {
        assert_eq!(decode("a%00b", 1, 7).unwrap(), "a\0b");
    }

    #[test]
    fn decode_multibyte_utf8() {
        assert_eq!(decode("caf%C3%A9", 2, 12).unwrap(), "café");
    }

    #[test]
    fn truncated_escape_fails_at_percent() {
        assert!(matches!(
            decode("wid%2", 2, 12),
            Err(ParseErrorKind::InvalidPercentEscape { position: 15 })
        ));
    }

    #[test]
    fn non_hex_escape_fails() {
        assert!(matches!(
            decode("%2x", 1, 7),
            Err(ParseErrorKind::InvalidPercentEscape { position: 7 })
        ));
    }

    #[test]
    fn lone_invalid_byte_is_rejected() {
        assert!(matches!(
            decode("%ff", 1, 7),
            Err(ParseErrorKind::InvalidUtf8 { field: 1 })
        ));
    }
}
