// src/export/json.rs
use serde::Serialize;

use crate::aliases::Digest32;
use crate::consts::ALGORITHM_NAME;
use crate::core::{DigestProvider, Hel420, Result};

/// Everything a single hash run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HashReport {
    pub algorithm: String,
    pub rounds: u32,
    pub input_len: usize,
    /// Plain digest of the input, before mixing
    pub base_digest: String,
    pub hash: String,
}

impl HashReport {
    /// Run `pipeline` over `data` and record both stages
    pub fn generate<D: DigestProvider>(pipeline: &Hel420<D>, data: &[u8]) -> Self {
        Self::from_base(pipeline, pipeline.base_digest(data), data.len())
    }

    /// Finish a run whose base digest was computed elsewhere (e.g. streamed)
    pub fn from_base<D: DigestProvider>(
        pipeline: &Hel420<D>,
        base: Digest32,
        input_len: usize,
    ) -> Self {
        HashReport {
            algorithm: ALGORITHM_NAME.to_owned(),
            rounds: pipeline.rounds(),
            input_len,
            base_digest: hex::encode(base),
            hash: hex::encode(pipeline.finish(base)),
        }
    }
}

/// Pretty-printed JSON for a report
pub fn to_json(report: &HashReport) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
