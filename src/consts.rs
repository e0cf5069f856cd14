// src/consts.rs
//! Shared constants — every number that pins HEL-420 output

/// Output size of the digest provider (SHA-256)
pub const DIGEST_LEN: usize = 32;

/// Length of the hex encoded digest
pub const HEX_LEN: usize = DIGEST_LEN * 2;

/// Mixing rounds used by `hel420_hash`
pub const DEFAULT_ROUNDS: u32 = 3;

/// Stand-in for `x == 0` so `1/x` and `x^sin(x)` stay finite
pub const ZERO_EPSILON: f64 = 1e-10;

/// Base of the exponential term in the primary formula
pub const PRIMARY_BASE: f64 = 63.0;

/// Replaces `63^x` when the primary formula is not finite
pub const FALLBACK_FACTOR: f64 = 1e10;

/// Mixing scalar is multiplied by this before truncation
pub const SCALE: f64 = 100_000.0;

/// Algorithm name used in reports and the CLI header
pub const ALGORITHM_NAME: &str = "HEL-420";

/// Env var naming the config file
pub const CONFIG_ENV_VAR: &str = "HEL420_CONFIG";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "hel420.toml";
