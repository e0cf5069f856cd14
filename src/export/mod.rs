// src/export/mod.rs
//! Export utilities for hel420
//!
//! Machine-readable output of a hash run. JSON only for now.

pub use json::{to_json, HashReport};

pub mod json;
