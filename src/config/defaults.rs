// src/config/defaults.rs
use crate::config::app::{MixerConfig, OutputConfig};
use crate::consts::DEFAULT_ROUNDS;
use crate::enums::OutputFormat;

impl Default for MixerConfig {
    fn default() -> Self {
        MixerConfig {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            format: OutputFormat::Text,
            header: true,
        }
    }
}
