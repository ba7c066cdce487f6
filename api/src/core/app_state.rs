use std::sync::Arc;

use ai_llm_service::ContentGenerator;
use study_guide::{AnswerService, Corpus, StudyGuideConfig, StudyGuideError};

/// Shared state for all HTTP handlers.
///
/// Built once at startup and only read afterwards.
pub struct AppState {
    /// Chunked study guide plus the model handle.
    pub answers: AnswerService,
}

impl AppState {
    /// Chunk `corpus` and wire it to `generator`.
    ///
    /// # Errors
    /// Propagates [`StudyGuideError::InvalidChunkSize`].
    pub fn new(
        corpus: &Corpus,
        cfg: &StudyGuideConfig,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<Self, StudyGuideError> {
        Ok(Self {
            answers: AnswerService::new(corpus, cfg, generator)?,
        })
    }
}
