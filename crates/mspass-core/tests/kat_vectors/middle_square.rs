//! Middle-square step vectors under the default sequence constants.

use mspass_core::generator::middle_square;
use mspass_core::params::MiddleSquareParams;

const PARAMS: MiddleSquareParams = MiddleSquareParams::DEFAULT;

// ── Free-running chain from (0, 0) ─────────────────────────────────
// Each step feeds its own output back: (x, w) -> middle_square(x, w).
const CHAIN_EXPECTED: [(u64, u64); 6] = [
    (546, 85_469),
    (690, 170_938),
    (325, 256_407),
    (475, 341_876),
    (529, 427_345),
    (926, 512_814),
];

#[test]
fn chain_from_zero_state() {
    let (mut x, mut w) = (0, 0);
    for (step, expected) in CHAIN_EXPECTED.iter().enumerate() {
        (x, w) = middle_square(x, w, &PARAMS);
        assert_eq!((x, w), *expected, "chain mismatch at step {step}");
    }
}

#[test]
fn nine_digit_input() {
    // 123456789^2 + 85469 = 15241578750190521 + 85469 (17 digits)
    assert_eq!(middle_square(123_456_789, 0, &PARAMS), (157_875_027, 85_469));
}

#[test]
fn twenty_digit_square_near_modulus() {
    // w wraps: (4294967000 + 85469) mod 0xffffffff = 85174.
    assert_eq!(
        middle_square(9_999_999_999, 4_294_967_000, &PARAMS),
        (9_999_800_000, 85_174)
    );
}
