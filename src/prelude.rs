//! Convenient re-exports for glob imports.
//!
//! This module provides a single import for all common types:
//!
//! ```rust
//! use cpe_uri::prelude::*;
//!
//! let name = CpeName::parse("cpe:/a:apache:http_server").unwrap();
//! assert_eq!(name.part(), Part::Application);
//! ```

pub use crate::{
    // Core types
    CpeName, FirstMatch, Part,
    // Operations
    find_first_match,
    // Errors
    ParseError, ParseErrorKind,
    // Constants
    FIELD_NAMES, MAX_FIELDS, PREFIX, SEPARATOR,
};
