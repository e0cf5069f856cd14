// tests/core/pipeline.rs
use hel420::consts::HEX_LEN;
use hel420::core::{sha256_hex, DigestProvider, Sha256Provider};
use hel420::{hel420_hash, hel420_hash_bytes, Hel420};

use crate::common;

const GOLDEN: &str = "130a4cb44a28e4e282754da572d9e386238d0899852ad807c2e740cf4fbff852";

#[test]
fn test_golden_value() {
    common::setup();
    assert_eq!(hel420_hash("HEL-420 test message"), GOLDEN);
}

#[test]
fn test_deterministic() {
    for input in ["", "a", "HEL-420", "üñíçødé"] {
        assert_eq!(hel420_hash(input), hel420_hash(input));
    }
}

#[test]
fn test_output_shape() {
    let long = "long input ".repeat(500);
    for input in ["", "x", long.as_str()] {
        let hash = hel420_hash(input);
        assert_eq!(hash.len(), HEX_LEN);
        assert!(hash.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')));
    }
}

#[test]
fn test_sensitivity() {
    assert_ne!(hel420_hash(""), hel420_hash("a"));

    let a = hex::decode(hel420_hash("a")).unwrap();
    let b = hex::decode(hel420_hash("b")).unwrap();
    let differing_bits: u32 = a.iter().zip(&b).map(|(x, y)| (x ^ y).count_ones()).sum();
    // loose avalanche spot check
    assert!(differing_bits > 64, "only {differing_bits} bits differ");
}

#[test]
fn test_str_and_bytes_agree() {
    assert_eq!(
        hel420_hash("HEL-420 test message"),
        hel420_hash_bytes(b"HEL-420 test message")
    );
}

#[test]
fn test_zero_rounds_is_double_sha256() {
    let base = hex::decode(sha256_hex(b"HEL-420 test message")).unwrap();
    assert_eq!(
        Hel420::new().with_rounds(0).hash_str("HEL-420 test message"),
        sha256_hex(&base)
    );
}

#[test]
fn test_rounds_change_output() {
    let three = Hel420::new().hash_str("rounds");
    let four = Hel420::new().with_rounds(4).hash_str("rounds");
    assert_ne!(three, four);
    assert_eq!(Hel420::default().rounds(), 3);
}

#[test]
fn test_base_digest_is_plain_sha256() {
    let pipeline = Hel420::new();
    assert_eq!(
        hex::encode(pipeline.base_digest(b"abc")),
        sha256_hex(b"abc")
    );
    assert_eq!(pipeline.base_digest(b"abc"), Sha256Provider.digest(b"abc"));
}

#[test]
fn test_verify() {
    let pipeline = Hel420::new();
    assert!(pipeline
        .verify(b"HEL-420 test message", GOLDEN)
        .unwrap());
    assert!(pipeline
        .verify(b"HEL-420 test message", &GOLDEN.to_uppercase())
        .unwrap());
    assert!(!pipeline.verify(b"something else", GOLDEN).unwrap());
    assert!(pipeline.verify(b"x", "1234").is_err());
}

#[test]
fn test_concurrent_calls_agree() {
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| hel420_hash("HEL-420 test message")))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), GOLDEN);
    }
}
