// src/config/mod.rs
//! Configuration system for hel420
//!
//! Lazy-loaded global config from TOML. Only the CLI reads it; the library
//! functions take their parameters explicitly.

pub use app::{load, load_from, resolve_path, Config, MixerConfig, OutputConfig};

mod app;
mod defaults;
