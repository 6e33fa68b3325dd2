//! Typed errors for value parsing.
//!
//! Each enum that appears in a form select (`Role`, `AccountStatus`,
//! `Gender`) implements `FromStr`; failures are reported through
//! [`ParseError`] rather than strings so callers can match on them.

/// Error produced when a string does not name a known enum value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown role: {0}")]
    Role(String),

    #[error("unknown account status: {0}")]
    AccountStatus(String),

    #[error("unknown gender: {0}")]
    Gender(String),
}
