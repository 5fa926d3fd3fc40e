//! Two-stage password derivation.
//!
//! The key is hardened first, cheaply, with the secret as its mixer. The
//! secret is then hashed at the full cost with the hardened key as mixer.
//! The output therefore depends on both inputs through two independent
//! generator runs.
//!
//! # Compatibility
//!
//! Inputs are consumed as raw Unicode scalar values without normalization.
//! The same text must reach this module encoded identically across runs
//! (`"é"` and `"e\u{301}"` derive different passwords).

use zeroize::Zeroizing;

use crate::alphabet::{build_alphabet, AlphabetOptions};
use crate::error::DeriveError;
use crate::generator::keyed_hash_unchecked;
use crate::params::MiddleSquareParams;

/// Derive the password for `(secret, key, options)` under the build's
/// default parameters ([`MiddleSquareParams::DEFAULT`]).
///
/// Returns an empty string when `secret` or `key` is empty, or when
/// `options` selects no character block. Otherwise the result has one
/// symbol per code point of `secret`.
#[must_use]
pub fn derive_password(secret: &str, key: &str, options: &AlphabetOptions) -> String {
    derive_unchecked(secret, key, options, &MiddleSquareParams::DEFAULT)
}

/// Derive a password under an explicit parameter set.
///
/// # Errors
///
/// Returns [`DeriveError::InvalidParams`] if `params` fails validation.
/// Degenerate inputs are not errors; they yield an empty string as in
/// [`derive_password`].
pub fn derive_password_with(
    secret: &str,
    key: &str,
    options: &AlphabetOptions,
    params: &MiddleSquareParams,
) -> Result<String, DeriveError> {
    params.validate()?;
    Ok(derive_unchecked(secret, key, options, params))
}

fn derive_unchecked(
    secret: &str,
    key: &str,
    options: &AlphabetOptions,
    params: &MiddleSquareParams,
) -> String {
    let alphabet = build_alphabet(options);
    if secret.is_empty() || key.is_empty() || alphabet.is_empty() {
        return String::new();
    }

    let hardened_key = Zeroizing::new(keyed_hash_unchecked(
        key,
        secret,
        &alphabet,
        params.key_cost,
        params,
    ));
    keyed_hash_unchecked(secret, &hardened_key, &alphabet, params.cost, params)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::Alphabet;
    use crate::generator::keyed_hash;

    #[test]
    fn reference_fixture() {
        assert_eq!(derive_password("abc", "xy", &AlphabetOptions::ALL), "2sN");
    }

    #[test]
    fn empty_secret_derives_nothing() {
        assert_eq!(derive_password("", "xy", &AlphabetOptions::ALL), "");
    }

    #[test]
    fn empty_key_derives_nothing() {
        assert_eq!(derive_password("abc", "", &AlphabetOptions::ALL), "");
    }

    #[test]
    fn empty_alphabet_derives_nothing() {
        assert_eq!(derive_password("abc", "xy", &AlphabetOptions::NONE), "");
    }

    #[test]
    fn stages_compose_as_documented() {
        let alphabet = build_alphabet(&AlphabetOptions::ALL);
        let params = MiddleSquareParams::DEFAULT;
        let hardened = keyed_hash("xy", "abc", &alphabet, params.key_cost, &params).unwrap();
        let expected = keyed_hash("abc", &hardened, &alphabet, params.cost, &params).unwrap();
        assert_eq!(derive_password("abc", "xy", &AlphabetOptions::ALL), expected);
    }

    #[test]
    fn result_length_follows_secret() {
        let pw = derive_password("correct horse battery staple", "example.com", &AlphabetOptions::ALL);
        assert_eq!(pw.chars().count(), 28);
    }

    #[test]
    fn result_stays_in_alphabet() {
        let options = AlphabetOptions {
            include_uppercase: false,
            include_lowercase: false,
            include_digits: true,
        };
        let alphabet: Alphabet = build_alphabet(&options);
        let pw = derive_password("hunter2", "github", &options);
        assert!(pw.chars().all(|c| alphabet.contains(c)), "{pw}");
    }

    #[test]
    fn with_default_params_matches_default_entry_point() {
        let a = derive_password("hunter2", "github", &AlphabetOptions::ALL);
        let b = derive_password_with(
            "hunter2",
            "github",
            &AlphabetOptions::ALL,
            &MiddleSquareParams::DEFAULT,
        )
        .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn with_rejects_invalid_params() {
        let params = MiddleSquareParams {
            sequence_mod: 0,
            ..MiddleSquareParams::DEFAULT
        };
        let err = derive_password_with("abc", "xy", &AlphabetOptions::ALL, &params).unwrap_err();
        assert!(matches!(err, DeriveError::InvalidParams(_)));
    }

    #[test]
    fn with_keeps_degenerate_inputs_non_fatal() {
        let result = derive_password_with("", "xy", &AlphabetOptions::ALL, &MiddleSquareParams::DEFAULT);
        assert_eq!(result, Ok(String::new()));
    }

    #[test]
    fn cost_changes_output() {
        let cheap = MiddleSquareParams {
            cost: 4,
            ..MiddleSquareParams::DEFAULT
        };
        let a = derive_password_with("hunter2", "github", &AlphabetOptions::ALL, &cheap).unwrap();
        let b = derive_password("hunter2", "github", &AlphabetOptions::ALL);
        assert_ne!(a, b);
    }
}
