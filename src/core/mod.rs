// src/core/mod.rs
pub mod digest;
pub mod hasher;
pub mod mixer;
pub mod pipeline;
pub mod util;

pub use digest::*;
pub use hasher::*;
pub use mixer::*;
pub use pipeline::*;
pub use util::*;

pub type Result<T> = std::result::Result<T, crate::error::Hel420Error>;
