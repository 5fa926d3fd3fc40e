//! `mspass-core` — Deterministic password derivation for mspass.
//!
//! The same `(secret, key, options)` triple always derives the same password,
//! with no stored state. This crate is pure computation: zero I/O, zero
//! async, zero logging.

#![cfg_attr(test, allow(clippy::unwrap_used, clippy::arithmetic_side_effects))]

pub mod error;

pub mod alphabet;
pub mod generator;
pub mod params;

pub mod password;

pub mod options;

pub use alphabet::{build_alphabet, Alphabet, AlphabetOptions};
pub use error::DeriveError;
pub use generator::{keyed_hash, middle_square};
pub use options::{encode_query, parse_query};
pub use params::{MiddleSquareParams, MAX_COST};
pub use password::{derive_password, derive_password_with};
