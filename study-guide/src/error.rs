//! Typed error for the study-guide crate.

use std::path::PathBuf;

use ai_llm_service::AiLlmError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StudyGuideError {
    /// The corpus file is missing, unreadable or not UTF-8.
    #[error("cannot read study guide {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fragments must hold at least one character.
    #[error("chunk size must be greater than zero")]
    InvalidChunkSize,

    /// A retrieval knob from the environment has an unusable value.
    #[error("invalid value in {var}: {reason}")]
    InvalidConfig {
        var: &'static str,
        reason: &'static str,
    },

    /// The model call itself failed (transport, upstream status, decoding).
    #[error(transparent)]
    Llm(#[from] AiLlmError),
}
