//! Cross-cutting error types.
//!
//! Transport and provider errors live in their own crates (`ContentError`,
//! `AuthError`); this module only covers entity invariants and parsing of the
//! closed enumerations.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// An entity violated one of its invariants.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A string did not name a member of a closed enumeration.
    #[error("Unknown {kind} '{value}' (expected one of: {expected})")]
    UnknownVariant {
        kind: &'static str,
        value: String,
        expected: String,
    },
}
