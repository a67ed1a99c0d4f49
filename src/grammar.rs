//! Grammar acceptance for the CPE URI form.
//!
//! The accepted language is the literal prefix `cpe:/`, an optional single
//! part letter from `{a, h, o}`, then zero to six groups of `:` followed by
//! zero or more characters from `[a-z0-9._~%-]`. The whole grammar is
//! case-insensitive. `%` is an ordinary grammar character here; escape
//! well-formedness is enforced by the decoder in [`crate::fields`].

use crate::constants::{MAX_FIELDS, PREFIX, SEPARATOR};
use crate::error::ParseErrorKind;

/// Checks `input` against the URI grammar and returns the body following
/// the `cpe:/` prefix. A string failing this check must not be split.
pub(crate) fn validate(input: &str) -> Result<&str, ParseErrorKind> {
    let body = match input.get(..PREFIX.len()) {
        Some(head) if head.eq_ignore_ascii_case(PREFIX) => &input[PREFIX.len()..],
        _ => {
            return Err(ParseErrorKind::InvalidPrefix {
                found: prefix_found(input),
            });
        }
    };

    let colons = body.matches(SEPARATOR).count();
    if colons + 1 > MAX_FIELDS {
        return Err(ParseErrorKind::TooManyFields {
            max: MAX_FIELDS,
            actual: colons + 1,
        });
    }

    let mut seen_separator = false;
    for (i, c) in body.char_indices() {
        let position = PREFIX.len() + i;
        if c == SEPARATOR {
            seen_separator = true;
        } else if !seen_separator {
            // Before the first separator only a single part letter may appear.
            if i > 0 || !matches!(c.to_ascii_lowercase(), 'a' | 'h' | 'o') {
                return Err(ParseErrorKind::InvalidChar { char: c, position });
            }
        } else if !is_field_char(c) {
            return Err(ParseErrorKind::InvalidChar { char: c, position });
        }
    }

    Ok(body)
}

/// Returns true if the character may appear in a colon group.
const fn is_field_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '~' | '%' | '-')
}

fn prefix_found(input: &str) -> Option<String> {
    input
        .split(":/")
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
