//! End-to-end derivation vectors under `$MS$6$10$14ddd$ffffffff$`.

use mspass_core::alphabet::{build_alphabet, AlphabetOptions};
use mspass_core::generator::keyed_hash;
use mspass_core::params::MiddleSquareParams;
use mspass_core::password::derive_password;

const UPPER_LOWER: AlphabetOptions = AlphabetOptions {
    include_uppercase: true,
    include_lowercase: true,
    include_digits: false,
};

const UPPER_DIGITS: AlphabetOptions = AlphabetOptions {
    include_uppercase: true,
    include_lowercase: false,
    include_digits: true,
};

const DIGITS_ONLY: AlphabetOptions = AlphabetOptions {
    include_uppercase: false,
    include_lowercase: false,
    include_digits: true,
};

const LOWER_ONLY: AlphabetOptions = AlphabetOptions {
    include_uppercase: false,
    include_lowercase: true,
    include_digits: false,
};

/// (secret, key, options, expected)
const DERIVATION_EXPECTED: [(&str, &str, AlphabetOptions, &str); 10] = [
    ("abc", "xy", AlphabetOptions::ALL, "2sN"),
    (
        "correct horse battery staple",
        "example.com",
        AlphabetOptions::ALL,
        "4Yq0U7BlvXxU5y5hkIZfjssutdUd",
    ),
    ("hunter2", "github", AlphabetOptions::ALL, "jMts44v"),
    ("hunter3", "github", AlphabetOptions::ALL, "Wryena0"),
    ("hunter2", "gitlab", AlphabetOptions::ALL, "Xt61ynY"),
    ("hunter2", "github", UPPER_LOWER, "sUeuifX"),
    ("hunter2", "github", DIGITS_ONLY, "0996875"),
    ("Tr0ub4dor&3", "mail", UPPER_DIGITS, "7KXP3SLCBSS"),
    ("pässwörd", "ключ", AlphabetOptions::ALL, "mCKoVMOQ"),
    ("x", "y", LOWER_ONLY, "b"),
];

#[test]
fn reference_scenario() {
    let derived = derive_password("abc", "xy", &AlphabetOptions::ALL);
    insta::assert_snapshot!(derived, @"2sN");
}

#[test]
fn derivation_vectors() {
    for (secret, key, options, expected) in &DERIVATION_EXPECTED {
        let derived = derive_password(secret, key, options);
        assert_eq!(
            &derived, expected,
            "derivation mismatch for secret {secret:?}, key {key:?}, {options:?}"
        );
    }
}

#[test]
fn hardened_key_vector() {
    // First stage of the reference scenario: "xy" hashed with "abc" as mixer.
    let alphabet = build_alphabet(&AlphabetOptions::ALL);
    let params = MiddleSquareParams::DEFAULT;
    assert_eq!(keyed_hash("xy", "abc", &alphabet, params.key_cost, &params).unwrap(), "AP");
    assert_eq!(keyed_hash("abc", "AP", &alphabet, params.cost, &params).unwrap(), "2sN");
}

#[test]
fn single_round_vector() {
    let alphabet = build_alphabet(&AlphabetOptions::ALL);
    let params = MiddleSquareParams::DEFAULT;
    assert_eq!(keyed_hash("abc", "xy", &alphabet, 0, &params).unwrap(), "Pw7");
    assert_eq!(keyed_hash("abc", "xy", &alphabet, 10, &params).unwrap(), "nKP");
}
