//! The CPE name model and its serializer.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::io;
use std::str::FromStr;

use crate::constants::{FIELD_NAMES, MAX_FIELDS, PREFIX, SEPARATOR};
use crate::error::{ParseError, ParseErrorKind};
use crate::fields;
use crate::grammar;
use crate::part::Part;

/// A parsed and validated CPE name in URI form.
///
/// A name is one ordered sequence of up to seven percent-decoded fields:
/// the part code at position 0 and the six named attributes (vendor,
/// product, version, update, edition, language) at positions 1 through 6.
/// The named accessors are projections of that sequence; there is no
/// second representation to keep in sync.
///
/// An empty field and an undeclared field both read as "attribute absent"
/// everywhere except matching, where the *declared* field count is part of
/// the contract (see [`CpeName::matches`]).
///
/// Names are immutable after construction. They are created by [`parse`]
/// (fallible) or [`empty`] (infallible) and released by `Drop`.
///
/// [`parse`]: CpeName::parse
/// [`empty`]: CpeName::empty
///
/// # Examples
///
/// ```
/// use cpe_uri::{CpeName, Part};
///
/// let name = CpeName::parse("cpe:/a:acme:widget:1.0").unwrap();
/// assert_eq!(name.part(), Part::Application);
/// assert_eq!(name.vendor(), Some("acme"));
/// assert_eq!(name.product(), Some("widget"));
/// assert_eq!(name.version(), Some("1.0"));
/// assert_eq!(name.update(), None);
/// assert_eq!(name.to_uri(), "cpe:/a:acme:widget:1.0");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CpeName {
    /// Decoded fields in declaration order. Never longer than
    /// [`MAX_FIELDS`]; field 0, when present, is a valid part letter.
    fields: Vec<String>,
}

impl CpeName {
    /// Parses a CPE URI from a string. This is the sole ingestion path.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError`] if:
    /// - The prefix is not `cpe:/` (case-insensitive)
    /// - Any character falls outside the URI grammar
    /// - More than seven fields are declared
    /// - A `%` is not followed by two hex digits, or a field decodes to
    ///   bytes that are not valid UTF-8
    /// - Field 0 is declared but is not `h`, `o`, or `a`
    pub fn parse(input: &str) -> Result<Self, ParseError> {
        Self::parse_inner(input).map_err(|kind| ParseError {
            input: input.to_string(),
            kind,
        })
    }

    /// Creates the canonical empty name: zero fields, part unspecified,
    /// every attribute absent. Always succeeds.
    #[must_use]
    pub const fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Returns true if `input` parses as a CPE URI.
    ///
    /// Defined as [`parse`](CpeName::parse) succeeding, so this boolean
    /// can never disagree with the parser.
    #[must_use]
    pub fn is_valid(input: &str) -> bool {
        Self::parse(input).is_ok()
    }

    /// Returns the part classification.
    ///
    /// [`Part::Unspecified`] exactly when the name has no fields.
    #[must_use]
    pub fn part(&self) -> Part {
        self.fields
            .first()
            .and_then(|f| Part::from_letter(f))
            .unwrap_or_default()
    }

    /// Returns the decoded field at `index`, treating empty and
    /// undeclared fields alike as absent.
    #[must_use]
    pub fn field(&self, index: usize) -> Option<&str> {
        match self.fields.get(index) {
            Some(f) if !f.is_empty() => Some(f),
            _ => None,
        }
    }

    /// Returns the attribute name for a field position ("part", "vendor",
    /// ..., "language"), or `None` past position 6.
    #[must_use]
    pub const fn field_name(index: usize) -> Option<&'static str> {
        if index < MAX_FIELDS {
            Some(FIELD_NAMES[index])
        } else {
            None
        }
    }

    /// Returns the vendor, if present.
    #[must_use]
    pub fn vendor(&self) -> Option<&str> {
        self.field(1)
    }

    /// Returns the product, if present.
    #[must_use]
    pub fn product(&self) -> Option<&str> {
        self.field(2)
    }

    /// Returns the version, if present.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.field(3)
    }

    /// Returns the update level, if present.
    #[must_use]
    pub fn update(&self) -> Option<&str> {
        self.field(4)
    }

    /// Returns the edition, if present.
    #[must_use]
    pub fn edition(&self) -> Option<&str> {
        self.field(5)
    }

    /// Returns the language, if present.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.field(6)
    }

    /// Returns the number of declared fields, counting declared-but-empty
    /// ones. This is the length the matcher compares; it is not the number
    /// of present attributes.
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the name declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Renders the name back to URI text.
    ///
    /// The part renders as its canonical lowercase letter; every other
    /// field renders verbatim as decoded — **no re-percent-encoding is
    /// applied**. Trailing empty fields and their separators are stripped,
    /// and the empty name renders as exactly `cpe:/`.
    ///
    /// Because output is not re-encoded, a name whose decoded fields
    /// contain `:` or `%` renders to a string that re-parses with
    /// different field boundaries or fails outright. This asymmetry is
    /// inherited wire behavior, kept deliberately.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe_uri::CpeName;
    ///
    /// let name = CpeName::parse("cpe:/a:acme:::").unwrap();
    /// assert_eq!(name.to_uri(), "cpe:/a:acme");
    /// assert_eq!(CpeName::empty().to_uri(), "cpe:/");
    /// ```
    #[must_use]
    pub fn to_uri(&self) -> String {
        let letter = match self.part().letter() {
            Some(c) => c.to_string(),
            None => String::new(),
        };

        let mut segments: Vec<&str> = Vec::with_capacity(MAX_FIELDS);
        segments.push(&letter);
        for i in 1..MAX_FIELDS {
            segments.push(self.fields.get(i).map_or("", String::as_str));
        }
        while segments.last().is_some_and(|s| s.is_empty()) {
            segments.pop();
        }

        let mut uri = String::from(PREFIX);
        for (i, segment) in segments.iter().enumerate() {
            if i > 0 {
                uri.push(SEPARATOR);
            }
            uri.push_str(segment);
        }
        uri
    }

    /// Writes the rendered URI to `sink` and returns the byte count.
    ///
    /// # Errors
    ///
    /// Propagates any error from the sink.
    pub fn write_to<W: io::Write>(&self, sink: &mut W) -> io::Result<usize> {
        let uri = self.to_uri();
        sink.write_all(uri.as_bytes())?;
        Ok(uri.len())
    }

    pub(crate) fn raw_fields(&self) -> &[String] {
        &self.fields
    }

    fn parse_inner(input: &str) -> Result<Self, ParseErrorKind> {
        let body = grammar::validate(input)?;
        let raw = fields::split(body);

        let mut decoded = Vec::with_capacity(raw.len());
        let mut offset = PREFIX.len();
        for (index, field) in raw.iter().enumerate() {
            decoded.push(fields::decode(field, index, offset)?);
            offset += field.len() + 1;
        }

        if decoded
            .first()
            .is_some_and(|first| Part::from_letter(first).is_none())
        {
            return Err(ParseErrorKind::InvalidPart {
                found: decoded[0].clone(),
            });
        }

        Ok(Self { fields: decoded })
    }
}

/// Equality compares the seven-position attribute projection
/// case-insensitively: stored case and trailing declared-but-empty fields
/// do not distinguish names. The declared field count is observable only
/// through [`CpeName::field_count`] and the matcher.
impl PartialEq for CpeName {
    fn eq(&self, other: &Self) -> bool {
        (0..MAX_FIELDS).all(|i| {
            let a = self.fields.get(i).map_or("", String::as_str);
            let b = other.fields.get(i).map_or("", String::as_str);
            a.eq_ignore_ascii_case(b)
        })
    }
}

impl Eq for CpeName {}

impl Hash for CpeName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in 0..MAX_FIELDS {
            let field = self.fields.get(i).map_or("", String::as_str);
            for b in field.bytes() {
                state.write_u8(b.to_ascii_lowercase());
            }
            // 0xFF never occurs in UTF-8, so it is a safe field terminator.
            state.write_u8(0xFF);
        }
    }
}

impl fmt::Display for CpeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_uri())
    }
}

impl FromStr for CpeName {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for CpeName {
    type Error = ParseError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for CpeName {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_uri())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for CpeName {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}
