//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use crate::{
    chunking::DEFAULT_CHUNK_SIZE,
    error::StudyGuideError,
    prompt::{DEFAULT_CONTEXT_K, MAX_CONTEXT_K},
};

/// Study guide read when `CORPUS_PATH` is not set.
pub const DEFAULT_CORPUS_PATH: &str = "ceneval_preguntas.txt";

/// Config bag for corpus loading and retrieval. All fields have defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StudyGuideConfig {
    /// UTF-8 text file loaded once at startup.
    pub corpus_path: PathBuf,
    /// Fragment length in characters.
    pub chunk_size: usize,
    /// How many retrieved fragments go into the prompt, `1..=MAX_CONTEXT_K`.
    pub context_k: usize,
}

impl Default for StudyGuideConfig {
    fn default() -> Self {
        Self {
            corpus_path: PathBuf::from(DEFAULT_CORPUS_PATH),
            chunk_size: DEFAULT_CHUNK_SIZE,
            context_k: DEFAULT_CONTEXT_K,
        }
    }
}

impl StudyGuideConfig {
    /// Build from `CORPUS_PATH`, `CHUNK_SIZE` and `CONTEXT_K`.
    ///
    /// # Errors
    /// [`StudyGuideError::InvalidConfig`] if a number does not parse or is zero,
    /// or if `CONTEXT_K` exceeds [`MAX_CONTEXT_K`].
    pub fn from_env() -> Result<Self, StudyGuideError> {
        let dflt = Self::default();
        Ok(Self {
            corpus_path: std::env::var("CORPUS_PATH")
                .ok()
                .filter(|s| !s.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(dflt.corpus_path),
            chunk_size: positive("CHUNK_SIZE", std::env::var("CHUNK_SIZE").ok(), dflt.chunk_size)?,
            context_k: context_k(std::env::var("CONTEXT_K").ok(), dflt.context_k)?,
        })
    }
}

fn context_k(raw: Option<String>, dflt: usize) -> Result<usize, StudyGuideError> {
    let k = positive("CONTEXT_K", raw, dflt)?;
    check_context_k(k)?;
    Ok(k)
}

/// The prompt never carries more than [`MAX_CONTEXT_K`] fragments.
pub(crate) fn check_context_k(k: usize) -> Result<(), StudyGuideError> {
    if (1..=MAX_CONTEXT_K).contains(&k) {
        Ok(())
    } else {
        Err(StudyGuideError::InvalidConfig {
            var: "CONTEXT_K",
            reason: "must be between 1 and 3",
        })
    }
}

fn positive(var: &'static str, raw: Option<String>, dflt: usize) -> Result<usize, StudyGuideError> {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return Ok(dflt);
    };
    match raw.trim().parse::<usize>() {
        Ok(0) => Err(StudyGuideError::InvalidConfig {
            var,
            reason: "must be greater than zero",
        }),
        Ok(n) => Ok(n),
        Err(_) => Err(StudyGuideError::InvalidConfig {
            var,
            reason: "expected a positive integer",
        }),
    }
}
