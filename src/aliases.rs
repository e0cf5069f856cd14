// src/aliases.rs
//! Canonical buffer types used throughout hel420

use crate::consts::DIGEST_LEN;

/// One SHA-256 sized buffer: base digest, mixed digest or final digest
pub type Digest32 = [u8; DIGEST_LEN];

/// Lowercase hex text of a [`Digest32`]
pub type HexString = String;
