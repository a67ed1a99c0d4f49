//! Constants for CPE URI validation.

/// The literal URI prefix, matched case-insensitively.
pub const PREFIX: &str = "cpe:/";

/// Separator between fields in the URI body.
pub const SEPARATOR: char = ':';

/// Maximum number of fields a name can declare (part code plus six
/// attributes).
pub const MAX_FIELDS: usize = 7;

/// Attribute names in declaration order, indexed by field position.
pub const FIELD_NAMES: [&str; MAX_FIELDS] = [
    "part",
    "vendor",
    "product",
    "version",
    "update",
    "edition",
    "language",
];

/// Part-letter table, indexed by `Part` discriminant. `Unspecified` has no
/// letter. Immutable and process-wide.
pub(crate) const PART_LETTERS: [Option<char>; 4] = [None, Some('h'), Some('o'), Some('a')];
