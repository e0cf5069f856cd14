// tests/core/mixer.rs
use hel420::consts::{DEFAULT_ROUNDS, DIGEST_LEN};
use hel420::core::{integral_mix, mix, mix_byte, mix_in_place, sha256_hex, MixFormula};

use crate::common;

fn sample_buffer() -> Vec<u8> {
    (0..DIGEST_LEN as u8).map(|i| i.wrapping_mul(37)).collect()
}

#[test]
fn test_zero_rounds_is_identity() {
    let buf = sample_buffer();
    assert_eq!(mix(&buf, 0), buf);
}

#[test]
fn test_length_preserved_for_any_round_count() {
    let buf = sample_buffer();
    for rounds in [0, 1, 2, 3, 7, 50] {
        assert_eq!(mix(&buf, rounds).len(), DIGEST_LEN, "rounds {rounds}");
    }
}

#[test]
fn test_all_zero_buffer_three_rounds() {
    // 0 -> 0xa0 -> ... -> 0xcb, same for every position
    let out = mix(&[0u8; DIGEST_LEN], DEFAULT_ROUNDS);
    assert_eq!(out, vec![0xcb; DIGEST_LEN]);
}

#[test]
fn test_mix_of_sha256_abc_one_round() {
    let base = hex::decode(sha256_hex(b"abc")).unwrap();
    assert_eq!(
        hex::encode(mix(&base, 1)),
        "2a16d2ff5a0f45f8f8f8bc689f0d81648de98d2dbbac3e834fc4e18dc1a0252e"
    );
}

#[test]
fn test_in_place_matches_copy() {
    let buf = sample_buffer();
    let mut in_place = buf.clone();
    mix_in_place(&mut in_place, 3);
    assert_eq!(in_place, mix(&buf, 3));
}

#[test]
fn test_positions_are_independent_within_a_round() {
    let buf = sample_buffer();
    let expected: Vec<u8> = buf.iter().map(|&b| mix_byte(b)).collect();
    assert_eq!(mix(&buf, 1), expected);
}

#[test]
fn test_fallback_forced_by_overflow() {
    common::setup();
    let scalar = integral_mix(500.0);
    assert_eq!(scalar.formula, MixFormula::Fallback);
    assert!(scalar.value.is_finite());
}

#[test]
fn test_fallback_forced_by_negative_base() {
    common::setup();
    assert_eq!(integral_mix(-1.5).formula, MixFormula::Fallback);
    assert_eq!(integral_mix(1.5).formula, MixFormula::Primary);
}
