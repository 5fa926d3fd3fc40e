//! Middle-square generator parameters.
//!
//! This module provides:
//! - [`MiddleSquareParams`] — cost exponents and Weyl sequence constants
//! - [`MiddleSquareParams::identity`] — crypt-style configuration tag
//! - [`MiddleSquareParams::step_count`] — work factor of one derivation
//!
//! # Identity string
//!
//! Every derived password is a function of the parameter set, so the set is
//! published as `$MS$<key_cost hex>$<cost decimal>$<offset hex>$<mod hex>$`.
//! The build default renders as `$MS$6$10$14ddd$ffffffff$`. Anything that
//! persists a reference to "how a password was derived" must store this tag
//! next to it; two outputs are only comparable under identical tags.
//!
//! The `MS` tag itself names one fixed numeric model, not just the field
//! values that follow it:
//! - the middle window of an `L`-digit square starts at `floor(L/4)` and is
//!   `ceil(L/2)` digits long, with `0` counted as one digit
//! - `x * x + w` is squared exactly in `u128`
//! - the window is narrowed to `u64` modulo 2^64
//! - step inputs `x + cp(secret[i]) + cp(mixer[j])` wrap modulo 2^64
//!
//! A build that changes any of these (a rounded window offset, say) must
//! publish a different tag.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeriveError;

/// Largest accepted cost exponent for either stage (2^24 rounds per symbol).
pub const MAX_COST: u32 = 24;

/// Algorithm tag leading every identity string.
const IDENTITY_TAG: &str = "MS";

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Parameter set of the two-stage middle-square derivation.
///
/// Both cost fields are base-2 logarithms of the number of churn rounds:
/// `cost = 10` means 1024 passes over the secret.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MiddleSquareParams {
    /// Cost exponent of the final stage (hashing the secret).
    pub cost: u32,
    /// Cost exponent of the key-hardening stage.
    pub key_cost: u32,
    /// Increment of the Weyl-like sequence mixed into every square.
    pub sequence_offset: u32,
    /// Modulus of the Weyl-like sequence. Must be non-zero.
    pub sequence_mod: u32,
}

impl MiddleSquareParams {
    /// The parameter set compiled into this build.
    pub const DEFAULT: Self = Self {
        cost: 10,
        key_cost: 6,
        sequence_offset: 85_469,
        sequence_mod: 0xFFFF_FFFF,
    };

    /// Returns `true` if the parameters pass [`validate`](Self::validate).
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.cost <= MAX_COST && self.key_cost <= MAX_COST && self.sequence_mod != 0
    }

    /// Check the parameter ranges.
    ///
    /// # Errors
    ///
    /// Returns [`DeriveError::InvalidParams`] if:
    /// - `cost` or `key_cost` exceeds [`MAX_COST`]
    /// - `sequence_mod` is zero
    pub fn validate(&self) -> Result<(), DeriveError> {
        if self.cost > MAX_COST {
            return Err(DeriveError::InvalidParams(format!(
                "cost must be at most {MAX_COST}, got {}",
                self.cost
            )));
        }
        if self.key_cost > MAX_COST {
            return Err(DeriveError::InvalidParams(format!(
                "key cost must be at most {MAX_COST}, got {}",
                self.key_cost
            )));
        }
        if self.sequence_mod == 0 {
            return Err(DeriveError::InvalidParams(
                "sequence modulus must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Render the configuration identity string.
    #[must_use]
    pub fn identity(&self) -> String {
        format!(
            "${IDENTITY_TAG}${:x}${}${:x}${:x}$",
            self.key_cost, self.cost, self.sequence_offset, self.sequence_mod
        )
    }

    /// Number of middle-square steps one derivation performs.
    ///
    /// `secret_len` and `key_len` count Unicode scalar values. Saturates at
    /// `u64::MAX`.
    #[must_use]
    pub fn step_count(&self, secret_len: usize, key_len: usize) -> u64 {
        let secret_len = u64::try_from(secret_len).unwrap_or(u64::MAX);
        let key_len = u64::try_from(key_len).unwrap_or(u64::MAX);
        rounds(self.key_cost)
            .saturating_mul(key_len)
            .saturating_add(rounds(self.cost).saturating_mul(secret_len))
    }
}

const _: () = assert!(MiddleSquareParams::DEFAULT.is_valid());

impl Default for MiddleSquareParams {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for MiddleSquareParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity())
    }
}

impl FromStr for MiddleSquareParams {
    type Err = DeriveError;

    /// Parse an identity string produced by [`MiddleSquareParams::identity`].
    ///
    /// Only the canonical rendering is accepted (lowercase hex, no padding),
    /// so each parameter set has exactly one identity.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let body = s
            .strip_prefix('$')
            .and_then(|rest| rest.strip_suffix('$'))
            .ok_or_else(|| DeriveError::Identity("must start and end with '$'".to_string()))?;

        let fields: Vec<&str> = body.split('$').collect();
        let [tag, key_cost, cost, offset, modulus] = fields.as_slice() else {
            return Err(DeriveError::Identity(format!(
                "expected 5 fields, got {}",
                fields.len()
            )));
        };

        if *tag != IDENTITY_TAG {
            return Err(DeriveError::Identity(format!(
                "unknown algorithm tag '{tag}'"
            )));
        }

        let params = Self {
            cost: parse_field(cost, 10, "cost")?,
            key_cost: parse_field(key_cost, 16, "key cost")?,
            sequence_offset: parse_field(offset, 16, "sequence offset")?,
            sequence_mod: parse_field(modulus, 16, "sequence modulus")?,
        };

        if params.identity() != s {
            return Err(DeriveError::Identity(format!(
                "non-canonical encoding (expected {})",
                params.identity()
            )));
        }

        params
            .validate()
            .map_err(|e| DeriveError::Identity(e.to_string()))?;
        Ok(params)
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Number of churn rounds for a cost exponent.
pub(crate) const fn rounds(cost: u32) -> u64 {
    2u64.saturating_pow(cost)
}

fn parse_field(field: &str, radix: u32, name: &str) -> Result<u32, DeriveError> {
    u32::from_str_radix(field, radix)
        .map_err(|e| DeriveError::Identity(format!("invalid {name} '{field}': {e}")))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------
