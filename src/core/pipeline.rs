//! Hash pipeline — digest, mix, digest again
//!
//! [`hel420_hash`] is the whole algorithm with its fixed parameters.
//! [`Hel420`] exposes the same pipeline with a configurable round count and
//! digest provider.

use tracing::debug;

use crate::aliases::{Digest32, HexString};
use crate::consts::DEFAULT_ROUNDS;

use super::digest::{DigestProvider, Sha256Provider};
use super::mixer::mix_in_place;
use super::util::digest_from_hex;
use super::Result;

/// HEL-420 of the UTF-8 bytes of `input`, as 64 lowercase hex chars
pub fn hel420_hash(input: &str) -> HexString {
    Hel420::new().hash_str(input)
}

/// HEL-420 of arbitrary bytes
pub fn hel420_hash_bytes(data: &[u8]) -> HexString {
    Hel420::new().hash_bytes(data)
}

/// Configurable HEL-420 pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hel420<D = Sha256Provider> {
    provider: D,
    rounds: u32,
}

impl Default for Hel420 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hel420 {
    /// SHA-256 with the default three mixing rounds
    pub fn new() -> Self {
        Hel420 {
            provider: Sha256Provider,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl<D: DigestProvider> Hel420<D> {
    /// Swap the digest provider; rounds are kept
    pub fn with_provider<P: DigestProvider>(self, provider: P) -> Hel420<P> {
        Hel420 {
            provider,
            rounds: self.rounds,
        }
    }

    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// First stage only: the plain digest of `data`
    pub fn base_digest(&self, data: &[u8]) -> Digest32 {
        self.provider.digest(data)
    }

    /// Mix and re-digest an already computed base digest
    pub fn finish(&self, mut base: Digest32) -> Digest32 {
        mix_in_place(&mut base, self.rounds);
        self.provider.digest(&base)
    }

    /// Full pipeline, raw bytes out
    pub fn digest(&self, data: &[u8]) -> Digest32 {
        let base = self.base_digest(data);
        debug!(len = data.len(), rounds = self.rounds, "hel420 digest");
        self.finish(base)
    }

    pub fn hash_bytes(&self, data: &[u8]) -> HexString {
        hex::encode(self.digest(data))
    }

    pub fn hash_str(&self, input: &str) -> HexString {
        self.hash_bytes(input.as_bytes())
    }

    /// Compare the hash of `input` against an expected hex digest.
    ///
    /// Fails only if `expected_hex` is not 32 bytes of hex.
    pub fn verify(&self, input: &[u8], expected_hex: &str) -> Result<bool> {
        let expected = digest_from_hex(expected_hex)?;
        Ok(self.digest(input) == expected)
    }
}
