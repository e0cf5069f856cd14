// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use crate::consts::{CONFIG_ENV_VAR, DEFAULT_CONFIG_FILE};
use crate::core::Result;
use crate::enums::OutputFormat;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub mixer: MixerConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MixerConfig {
    pub rounds: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Print the `HEL-420 hash:` line before the digest in text mode
    pub header: bool,
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// `$HEL420_CONFIG`, or `hel420.toml` in the working directory
pub fn resolve_path() -> PathBuf {
    std::env::var_os(CONFIG_ENV_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

/// Parse one config file. Missing sections and fields take their defaults.
pub fn load_from(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let conf = toml::from_str(&content)?;
    debug!(path = %path.as_ref().display(), "loaded config");
    Ok(conf)
}

/// Load the global config once — falls back to defaults if the file is missing
pub fn load() -> Result<&'static Config> {
    if let Some(conf) = CONFIG.get() {
        return Ok(conf);
    }

    let path = resolve_path();
    let conf = if path.exists() {
        load_from(&path)?
    } else {
        // Only an explicitly named file is worth a warning
        if std::env::var_os(CONFIG_ENV_VAR).is_some() {
            warn!(path = %path.display(), "config not found — using built-in defaults");
        } else {
            debug!(path = %path.display(), "no config file — using built-in defaults");
        }
        Config::default()
    };

    Ok(CONFIG.get_or_init(|| conf))
}
