//! Candidate-vs-pattern matching with empty-field wildcards.
//!
//! The relation is asymmetric: the *candidate* is the concrete name under
//! test, the *pattern* (or target) the possibly more general name it is
//! compared against. An empty field in the candidate is the only wildcard
//! form this naming scheme has — there is no glob syntax, and none is
//! added here.

use crate::error::ParseError;
use crate::name::CpeName;

impl CpeName {
    /// Returns true if this name, taken as a concrete candidate, is an
    /// instance of `pattern`.
    ///
    /// A pattern declaring fewer fields than the candidate never matches —
    /// it cannot be a superset of a more specific name. Within the
    /// candidate's declared fields, an empty field is a wildcard satisfied
    /// by anything, and a concrete field must equal the pattern's field at
    /// the same position case-insensitively. Pattern fields beyond the
    /// candidate's declared count are never inspected.
    ///
    /// The empty name follows the same rules: as a candidate it matches
    /// every pattern, as a pattern it is matched only by an empty
    /// candidate. Matching never fails and performs no allocation.
    ///
    /// # Examples
    ///
    /// ```
    /// use cpe_uri::CpeName;
    ///
    /// let candidate = CpeName::parse("cpe:/a:acme::1.0").unwrap();
    /// let pattern = CpeName::parse("cpe:/a:acme:widget:1.0").unwrap();
    /// // The empty product field wildcards; the relation is not symmetric.
    /// assert!(candidate.matches(&pattern));
    /// assert!(!pattern.matches(&candidate));
    /// ```
    #[must_use]
    pub fn matches(&self, pattern: &CpeName) -> bool {
        if pattern.field_count() < self.field_count() {
            return false;
        }
        self.raw_fields()
            .iter()
            .zip(pattern.raw_fields())
            .all(|(c, p)| c.is_empty() || c.eq_ignore_ascii_case(p))
    }

    /// Returns true if this candidate matches at least one of `patterns`.
    ///
    /// False for an empty collection.
    #[must_use]
    pub fn matches_any<'a, I>(&self, patterns: I) -> bool
    where
        I: IntoIterator<Item = &'a CpeName>,
    {
        patterns.into_iter().any(|p| self.matches(p))
    }
}

/// Outcome of [`find_first_match`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FirstMatch {
    /// Index of the first matching target
    Found(usize),
    /// The candidate parsed but no target matched
    NoMatch,
    /// The candidate string failed to parse; targets were not inspected
    InvalidCandidate(ParseError),
}

impl FirstMatch {
    /// Returns the matched index, if any.
    #[must_use]
    pub const fn index(&self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(*index),
            Self::NoMatch | Self::InvalidCandidate(_) => None,
        }
    }
}

/// Parses `candidate` and scans `targets` in order, returning the index of
/// the first target it matches.
///
/// A candidate that fails to parse short-circuits to
/// [`FirstMatch::InvalidCandidate`] without inspecting any target. Targets
/// are parsed as encountered; one that fails to parse is a non-match and
/// the scan continues. Scan order and first-match-wins are part of the
/// contract.
///
/// # Examples
///
/// ```
/// use cpe_uri::{find_first_match, FirstMatch};
///
/// let outcome = find_first_match(
///     "cpe:/a:acme:widget",
///     &["cpe:/a:other:thing", "cpe:/a:acme:widget:1.0"],
/// );
/// assert_eq!(outcome, FirstMatch::Found(1));
/// ```
#[must_use]
pub fn find_first_match<S: AsRef<str>>(candidate: &str, targets: &[S]) -> FirstMatch {
    let candidate = match CpeName::parse(candidate) {
        Ok(name) => name,
        Err(err) => return FirstMatch::InvalidCandidate(err),
    };

    for (index, target) in targets.iter().enumerate() {
        if CpeName::parse(target.as_ref()).is_ok_and(|pattern| candidate.matches(&pattern)) {
            return FirstMatch::Found(index);
        }
    }
    FirstMatch::NoMatch
}
