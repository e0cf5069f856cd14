//! Small utility functions used across the core module
//!
//! Keep this light — if it grows, split further.

use sha2::{Digest, Sha256};

use crate::aliases::Digest32;
use crate::consts::DIGEST_LEN;
use crate::error::Hel420Error;

use super::Result;

/// Compute SHA-256 and return as lowercase hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Parse a 64-char hex string into a digest. Upper case is accepted.
pub fn digest_from_hex(text: &str) -> Result<Digest32> {
    let bytes = hex::decode(text.trim())?;
    let actual = bytes.len();
    bytes.try_into().map_err(|_| Hel420Error::DigestLength {
        expected: DIGEST_LEN,
        actual,
    })
}
