// src/lib.rs
//! hel420 — the HEL-420 digest
//!
//! HEL-420 runs SHA-256 over the input, pushes every byte of that digest
//! through a nonlinear floating-point mixer for a few rounds, then runs
//! SHA-256 again over the mixed bytes.
//!
//! Not a secure construction. The only guarantee is bit-exact output.
//!
//! ```
//! let hash = hel420::hel420_hash("HEL-420 test message");
//! assert_eq!(
//!     hash,
//!     "130a4cb44a28e4e282754da572d9e386238d0899852ad807c2e740cf4fbff852"
//! );
//! ```

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod export;

// Re-export everything users need at the crate root
pub use aliases::{Digest32, HexString};
pub use config::load as load_config;
pub use crate::core::{
    hel420_hash, hel420_hash_bytes, mix, mix_in_place, DigestProvider, Hel420, Hel420Hasher,
    MixFormula, Result as CoreResult, Sha256Provider,
};
pub use enums::OutputFormat;
pub use error::Hel420Error;
pub use export::{to_json, HashReport};
