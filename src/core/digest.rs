//! Digest provider — the standard hash both pipeline stages run through
//!
//! The pipeline only depends on the `bytes -> [u8; 32]` contract, so any
//! correct SHA-256 implementation can be swapped in behind the trait.

use sha2::{Digest, Sha256};

use crate::aliases::Digest32;

/// A deterministic 32-byte one-way hash
pub trait DigestProvider {
    fn digest(&self, data: &[u8]) -> Digest32;
}

/// SHA-256 backed by the `sha2` crate
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sha256Provider;

impl DigestProvider for Sha256Provider {
    fn digest(&self, data: &[u8]) -> Digest32 {
        Sha256::digest(data).into()
    }
}

impl<D: DigestProvider + ?Sized> DigestProvider for &D {
    fn digest(&self, data: &[u8]) -> Digest32 {
        (**self).digest(data)
    }
}
