//! Kani proof harnesses for parser and matcher properties.
//!
//! Kani is not a Cargo dependency. Install and run with:
//!
//! ```bash
//! cargo install --locked kani-verifier
//! cargo kani setup
//! cargo kani --features kani
//! ```
//!
//! This module is only compiled when using Kani (`#[cfg(kani)]`).

use crate::CpeName;

/// Characters valid inside a colon group, minus `%` so generated fields
/// never need escape handling.
const FIELD_CHARS: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789._~-";

/// Generate a valid field character.
fn arbitrary_field_char() -> char {
    let idx: usize = kani::any();
    let idx = idx % FIELD_CHARS.len();
    FIELD_CHARS[idx] as char
}

/// Generate a short valid field string.
fn arbitrary_field() -> String {
    let len: usize = kani::any();
    let len = len % 4;
    let mut field = String::with_capacity(len);
    for _ in 0..len {
        field.push(arbitrary_field_char());
    }
    field
}

#[kani::proof]
#[kani::unwind(12)]
fn parse_never_panics_on_small_ascii_input() {
    const MAX_LEN: usize = 8;
    let len: usize = kani::any();
    kani::assume(len <= MAX_LEN);

    let mut input = String::with_capacity(MAX_LEN);
    for _ in 0..len {
        let b: u8 = kani::any();
        kani::assume(b.is_ascii());
        input.push(b as char);
    }

    let _ = CpeName::parse(&input);
}

#[kani::proof]
#[kani::unwind(16)]
fn wildcard_candidate_field_is_always_satisfied() {
    let field = arbitrary_field();
    let candidate = CpeName::parse("cpe:/a:acme:").unwrap();
    let pattern = CpeName::parse(&format!("cpe:/a:acme:{field}")).unwrap();
    assert!(candidate.matches(&pattern));
}

#[kani::proof]
#[kani::unwind(16)]
fn narrower_pattern_never_matches() {
    let field = arbitrary_field();
    let candidate = CpeName::parse(&format!("cpe:/a:{field}:x")).unwrap();
    let pattern = CpeName::parse(&format!("cpe:/a:{field}")).unwrap();
    assert!(!candidate.matches(&pattern));
}
