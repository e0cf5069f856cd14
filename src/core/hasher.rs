//! Incremental HEL-420 for data that arrives in pieces
//!
//! Only the first digest needs the whole input, so it is fed incrementally;
//! mixing and the final digest run once in [`Hel420Hasher::finalize`].

use std::fmt;
use std::io::{self, Write};

use sha2::{Digest, Sha256};

use crate::aliases::{Digest32, HexString};
use crate::consts::DEFAULT_ROUNDS;

use super::pipeline::Hel420;

#[derive(Clone)]
pub struct Hel420Hasher {
    inner: Sha256,
    rounds: u32,
}

impl fmt::Debug for Hel420Hasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hel420Hasher")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

impl Default for Hel420Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hel420Hasher {
    pub fn new() -> Self {
        Self::with_rounds(DEFAULT_ROUNDS)
    }

    pub fn with_rounds(rounds: u32) -> Self {
        Hel420Hasher {
            inner: Sha256::new(),
            rounds,
        }
    }

    pub fn update(&mut self, data: impl AsRef<[u8]>) -> &mut Self {
        self.inner.update(data.as_ref());
        self
    }

    /// First stage only: the plain digest of everything fed so far
    pub fn finalize_base(self) -> Digest32 {
        self.inner.finalize().into()
    }

    pub fn finalize(self) -> Digest32 {
        let rounds = self.rounds;
        Hel420::new().with_rounds(rounds).finish(self.finalize_base())
    }

    pub fn finalize_hex(self) -> HexString {
        hex::encode(self.finalize())
    }
}

impl Write for Hel420Hasher {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.update(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
