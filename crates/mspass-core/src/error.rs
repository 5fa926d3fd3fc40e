//! Error types for `mspass-core`.
//!
//! Degenerate derivation inputs (empty secret, empty key, empty alphabet) are
//! not errors: they yield an empty string. Errors only arise from explicit
//! generator configuration.

use thiserror::Error;

/// Errors produced when working with generator configurations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeriveError {
    /// Parameter validation failed (cost out of range, zero modulus).
    #[error("invalid generator parameters: {0}")]
    InvalidParams(String),

    /// A configuration identity string could not be parsed.
    #[error("malformed configuration identity: {0}")]
    Identity(String),
}
