//! Error types for CPE URI parsing.

use std::fmt;

use crate::constants::FIELD_NAMES;

/// Errors that can occur when parsing a CPE URI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

/// Specific parsing error types.
///
/// Syntax-level rejections (`InvalidPrefix`, `InvalidChar`, `TooManyFields`,
/// `InvalidPercentEscape`, `InvalidUtf8`) and the semantic part-code
/// rejection (`InvalidPart`) are distinguishable here but always surface
/// through the same [`ParseError`] channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// Missing or invalid prefix (expected "cpe:/")
    InvalidPrefix {
        /// The leading text that was found, if any
        found: Option<String>,
    },
    /// Character outside the URI grammar
    InvalidChar {
        /// The unexpected character
        char: char,
        /// Byte position in the input
        position: usize,
    },
    /// More colon-separated fields than the grammar allows
    TooManyFields {
        /// Maximum allowed fields
        max: usize,
        /// Actual field count
        actual: usize,
    },
    /// A `%` not followed by two hexadecimal digits
    InvalidPercentEscape {
        /// Byte position of the `%` in the input
        position: usize,
    },
    /// A field whose percent-decoded bytes are not valid UTF-8
    InvalidUtf8 {
        /// Index of the offending field
        field: usize,
    },
    /// Field 0 is empty or not one of "h", "o", "a"
    InvalidPart {
        /// The decoded value that was found
        found: String,
    },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "failed to parse CPE URI '{}': ", self.input)?;
        match &self.kind {
            ParseErrorKind::InvalidPrefix { found } => match found {
                Some(s) => write!(f, "expected prefix 'cpe:/', found '{s}'"),
                None => write!(f, "missing prefix; URI must start with 'cpe:/'"),
            },
            ParseErrorKind::InvalidChar { char, position } => {
                write!(f, "unexpected character '{char}' at position {position}")
            }
            ParseErrorKind::TooManyFields { max, actual } => {
                write!(f, "URI declares {actual} fields, maximum is {max}")
            }
            ParseErrorKind::InvalidPercentEscape { position } => {
                write!(
                    f,
                    "'%' at position {position} is not followed by two hex digits"
                )
            }
            ParseErrorKind::InvalidUtf8 { field } => {
                let name = FIELD_NAMES.get(*field).copied().unwrap_or("field");
                write!(f, "decoded {name} value is not valid UTF-8")
            }
            ParseErrorKind::InvalidPart { found } => {
                if found.is_empty() {
                    write!(f, "part field is empty; expected 'h', 'o', or 'a'")
                } else {
                    write!(f, "invalid part '{found}'; expected 'h', 'o', or 'a'")
                }
            }
        }
    }
}

impl std::error::Error for ParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_field_for_utf8_errors() {
        let err = ParseError {
            input: "cpe:/a:%ff".to_string(),
            kind: ParseErrorKind::InvalidUtf8 { field: 1 },
        };
        assert!(err.to_string().contains("vendor"));
    }

    #[test]
    fn display_reports_escape_position() {
        let err = ParseError {
            input: "cpe:/a:x%2".to_string(),
            kind: ParseErrorKind::InvalidPercentEscape { position: 8 },
        };
        assert!(err.to_string().contains("position 8"));
    }
}
