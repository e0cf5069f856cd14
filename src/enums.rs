// src/enums.rs
//! Public enum types used throughout the crate

use serde::{Deserialize, Serialize};

/// How the CLI prints a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
#[non_exhaustive]
pub enum OutputFormat {
    /// `HEL-420 hash:` header followed by the hex digest
    #[default]
    Text,
    /// A serialized [`crate::export::HashReport`]
    Json,
}
