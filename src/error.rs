// src/error.rs
//! Public error type for the entire crate
//!
//! The hash pipeline itself cannot fail. Everything here comes from the
//! surfaces around it: config files, input files, hex parsing, JSON output.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Hel420Error {
    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("Invalid config")]
    Config(#[from] toml::de::Error),

    #[error("Invalid hex digest")]
    Hex(#[from] hex::FromHexError),

    #[error("Digest must be {expected} bytes, got {actual}")]
    DigestLength { expected: usize, actual: usize },

    #[error("JSON serialization failed")]
    Json(#[from] serde_json::Error),
}
