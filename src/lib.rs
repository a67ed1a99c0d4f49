//! Parser, validator, and matcher for CPE URI platform names.
//!
//! This crate implements parsing, validation, serialization, and matching
//! of Common Platform Enumeration (CPE) names in their URI form — the
//! compact strings naming hardware, operating-system, and application
//! platforms used by vulnerability and compliance tooling.
//!
//! # Overview
//!
//! CPE URIs have the structure:
//!
//! ```text
//! cpe:/<part>:<vendor>:<product>:<version>:<update>:<edition>:<language>
//! ```
//!
//! where every field after the prefix is optional: `cpe:/` alone is the
//! empty name. Fields are percent-encoded, colon-delimited, and
//! case-insensitive throughout.
//!
//! # Quick Start
//!
//! ```rust
//! use cpe_uri::{CpeName, Part};
//!
//! // Parse a CPE URI
//! let name = CpeName::parse("cpe:/a:apache:http_server:2.4.52").unwrap();
//!
//! // Access components
//! assert_eq!(name.part(), Part::Application);
//! assert_eq!(name.vendor(), Some("apache"));
//! assert_eq!(name.product(), Some("http_server"));
//! assert_eq!(name.version(), Some("2.4.52"));
//!
//! // Render back to URI text
//! assert_eq!(name.to_uri(), "cpe:/a:apache:http_server:2.4.52");
//! ```
//!
//! # Matching
//!
//! Matching is asymmetric: a *candidate* (the concrete name under test) is
//! checked against a *pattern* (a possibly more general name). An empty
//! candidate field is a wildcard; a concrete field must equal the
//! pattern's, case-insensitively; and a pattern declaring fewer fields
//! than the candidate never matches:
//!
//! ```rust
//! use cpe_uri::CpeName;
//!
//! let candidate = CpeName::parse("cpe:/a:apache::2.4.52").unwrap();
//! let pattern = CpeName::parse("cpe:/a:apache:http_server:2.4.52").unwrap();
//! assert!(candidate.matches(&pattern));
//! ```
//!
//! Scanning a target list for the first match is a three-way outcome:
//!
//! ```rust
//! use cpe_uri::{find_first_match, FirstMatch};
//!
//! let outcome = find_first_match(
//!     "cpe:/a:apache:http_server",
//!     &["cpe:/o:debian:linux", "cpe:/a:apache:http_server:2.4.52"],
//! );
//! assert_eq!(outcome, FirstMatch::Found(1));
//! ```
//!
//! # Wire-format caveats
//!
//! Rendering writes decoded field bytes back verbatim without
//! re-percent-encoding, so a name whose decoded fields contain `:` or `%`
//! does not survive a render/reparse round trip unchanged. This mirrors
//! the behavior of existing consumers of the format and is documented on
//! [`CpeName::to_uri`] rather than silently "fixed".

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod constants;
mod error;
mod fields;
mod grammar;
#[cfg(kani)]
mod kani_impls;
mod matching;
mod name;
mod part;
pub mod prelude;

pub use constants::{FIELD_NAMES, MAX_FIELDS, PREFIX, SEPARATOR};
pub use error::{ParseError, ParseErrorKind};
pub use matching::{find_first_match, FirstMatch};
pub use name::CpeName;
pub use part::Part;
