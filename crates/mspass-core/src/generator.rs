//! Middle-square generator with a Weyl-like increment, and the keyed hash
//! built on it.
//!
//! # Numeric model
//!
//! - `x` is a `u64`, `w` is always below `sequence_mod` and so fits a `u32`.
//! - The step input `x + cp(secret[i]) + cp(mixer[j])` wraps modulo 2^64.
//! - `x * x + w` is computed exactly in `u128`; `(2^64 - 1)^2 + 2^32` is
//!   below 2^128, so the square never overflows and has at most 39 digits.
//! - The middle-digit window holds at most 20 digits and is reduced modulo
//!   2^64 when narrowed back to `u64`.
//!
//! The middle window of an `L`-digit square starts `floor(L/4)` digits from
//! the left and is `ceil(L/2)` digits long.

use zeroize::Zeroizing;

use crate::alphabet::Alphabet;
use crate::error::DeriveError;
use crate::params::{rounds, MiddleSquareParams, MAX_COST};

// ---------------------------------------------------------------------------
// Middle-square step
// ---------------------------------------------------------------------------

/// Running generator state: the last extracted value and the Weyl accumulator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
struct GeneratorState {
    x: u64,
    w: u64,
}

/// Apply one middle-square step to `(x, w)`.
///
/// Returns `(middle_digits(x * x + w'), w')` where
/// `w' = (w + sequence_offset) mod sequence_mod`.
///
/// A zero `sequence_mod` is treated as "no reduction"; callers going through
/// [`MiddleSquareParams::validate`] never pass one.
#[must_use]
pub fn middle_square(x: u64, w: u64, params: &MiddleSquareParams) -> (u64, u64) {
    let advanced = w.wrapping_add(u64::from(params.sequence_offset));
    let w = advanced
        .checked_rem(u64::from(params.sequence_mod))
        .unwrap_or(advanced);

    let wide = u128::from(x);
    let squared = wide.wrapping_mul(wide).wrapping_add(u128::from(w));

    (narrow(middle_digits(squared)), w)
}

/// Extract the middle decimal digits of `value`.
fn middle_digits(value: u128) -> u128 {
    // "0" is one digit long.
    let len = value.checked_ilog10().map_or(1, |d| d.wrapping_add(1));
    let offset = len.wrapping_div(4);
    let take = len.div_ceil(2);
    let dropped = len.wrapping_sub(offset).wrapping_sub(take);

    let shifted = value.wrapping_div(10u128.wrapping_pow(dropped));
    shifted.wrapping_rem(10u128.wrapping_pow(take))
}

/// Reduce a middle-digit window modulo 2^64.
#[allow(clippy::cast_possible_truncation)]
const fn narrow(value: u128) -> u64 {
    value as u64
}

// ---------------------------------------------------------------------------
// Keyed hash
// ---------------------------------------------------------------------------

/// Hash `secret` under `mixer` into a string over `alphabet`.
///
/// Runs `2^cost` rounds over the secret. Every step consumes one secret code
/// point and the next mixer code point (the mixer is reused cyclically).
/// Only the values produced during the last round are kept; earlier rounds
/// churn the state. The result has exactly one symbol per secret code point.
///
/// Returns an empty string if `secret`, `mixer`, or `alphabet` is empty.
///
/// # Errors
///
/// Returns [`DeriveError::InvalidParams`] if `cost` exceeds [`MAX_COST`] or
/// `params` fails [`MiddleSquareParams::validate`].
pub fn keyed_hash(
    secret: &str,
    mixer: &str,
    alphabet: &Alphabet,
    cost: u32,
    params: &MiddleSquareParams,
) -> Result<String, DeriveError> {
    params.validate()?;
    if cost > MAX_COST {
        return Err(DeriveError::InvalidParams(format!(
            "cost must be at most {MAX_COST}, got {cost}"
        )));
    }
    Ok(keyed_hash_unchecked(secret, mixer, alphabet, cost, params))
}

/// [`keyed_hash`] for a cost and parameter set already known to be valid.
pub(crate) fn keyed_hash_unchecked(
    secret: &str,
    mixer: &str,
    alphabet: &Alphabet,
    cost: u32,
    params: &MiddleSquareParams,
) -> String {
    if secret.is_empty() || mixer.is_empty() || alphabet.is_empty() {
        return String::new();
    }

    let symbols = alphabet.symbols();
    let len = u64::try_from(symbols.len()).unwrap_or(u64::MAX);
    let values = generate_sequence(secret, mixer, cost, params);
    values
        .iter()
        .map(|&v| {
            // Below `len`, so the conversion and the index always hold.
            let index = usize::try_from(v.wrapping_rem(len)).unwrap_or_default();
            symbols[index]
        })
        .collect()
}

/// Run the generator and return the last round's values, one per secret
/// code point.
fn generate_sequence(
    secret: &str,
    mixer: &str,
    cost: u32,
    params: &MiddleSquareParams,
) -> Zeroizing<Vec<u64>> {
    let secret: Zeroizing<Vec<u64>> = Zeroizing::new(code_points(secret));
    let mixer: Zeroizing<Vec<u64>> = Zeroizing::new(code_points(mixer));
    let mut retained = Zeroizing::new(Vec::with_capacity(secret.len()));

    let total_rounds = rounds(cost);
    let mut state = GeneratorState::default();
    // Position in the mixer, always (r * n + i) mod m.
    let mut cursor = 0usize;

    for round in 0..total_rounds {
        let last_round = round == total_rounds.wrapping_sub(1);
        for &c in secret.iter() {
            let m = mixer.get(cursor).copied().unwrap_or_default();
            cursor = cursor.wrapping_add(1);
            if cursor == mixer.len() {
                cursor = 0;
            }

            let input = state.x.wrapping_add(c).wrapping_add(m);
            let (x, w) = middle_square(input, state.w, params);
            state = GeneratorState { x, w };

            if last_round {
                retained.push(x);
            }
        }
    }

    retained
}

fn code_points(s: &str) -> Vec<u64> {
    s.chars().map(|c| u64::from(u32::from(c))).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
