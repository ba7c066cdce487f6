//! Answer service: retrieval, prompt, one model call, text extraction.

use std::sync::Arc;

use ai_llm_service::{ContentGenerator, extract::extract_text};
use tracing::{info, warn};

use crate::{
    cfg::{StudyGuideConfig, check_context_k},
    chunking::{Fragment, split_text},
    corpus::Corpus,
    error::StudyGuideError,
    prompt::build_prompt,
    retrieve::search_fragments,
};

/// Prefix of the answer returned when no text could be extracted.
pub const EXTRACTION_ERROR_PREFIX: &str = "[Error al generar respuesta]";

/// Where the answer text came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerSource {
    /// Model text, with the name of the extraction strategy that found it.
    Model { strategy: &'static str },
    /// Every extraction strategy failed; the text describes why.
    ExtractionFailed,
}

/// Final answer for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    pub text: String,
    pub source: AnswerSource,
    /// Fragments placed in the prompt.
    pub context_fragments: usize,
}

/// Read-only service shared by all requests.
///
/// Holds the chunked corpus and the model handle; nothing here is mutated
/// after construction.
pub struct AnswerService {
    fragments: Vec<Fragment>,
    generator: Arc<dyn ContentGenerator>,
    context_k: usize,
}

impl AnswerService {
    /// Chunk `corpus` and keep `generator` for later calls.
    ///
    /// # Errors
    /// [`StudyGuideError::InvalidChunkSize`] if `cfg.chunk_size == 0`,
    /// [`StudyGuideError::InvalidConfig`] if `cfg.context_k` is outside `1..=3`.
    pub fn new(
        corpus: &Corpus,
        cfg: &StudyGuideConfig,
        generator: Arc<dyn ContentGenerator>,
    ) -> Result<Self, StudyGuideError> {
        check_context_k(cfg.context_k)?;
        let fragments = split_text(corpus.text(), cfg.chunk_size)?;

        info!(
            path = %corpus.path().display(),
            fragments = fragments.len(),
            chunk_size = cfg.chunk_size,
            context_k = cfg.context_k,
            "answer service ready"
        );

        Ok(Self {
            fragments,
            generator,
            context_k: cfg.context_k,
        })
    }

    pub fn fragments(&self) -> &[Fragment] {
        &self.fragments
    }

    /// Answer `question` from the study guide.
    ///
    /// Exactly one model call is made. Extraction failures are not errors:
    /// they produce an [`AnswerSource::ExtractionFailed`] answer whose text
    /// starts with [`EXTRACTION_ERROR_PREFIX`].
    ///
    /// # Errors
    /// [`StudyGuideError::Llm`] if the model call itself fails.
    pub async fn answer(&self, question: &str) -> Result<Answer, StudyGuideError> {
        let relevant = search_fragments(question, &self.fragments);
        let context_fragments = relevant.len().min(self.context_k);
        let prompt = build_prompt(&relevant, question, self.context_k);

        let resp = self.generator.generate_content(&prompt).await?;

        let answer = match extract_text(&resp) {
            Ok(extracted) => Answer {
                text: extracted.text,
                source: AnswerSource::Model {
                    strategy: extracted.strategy,
                },
                context_fragments,
            },
            Err(e) => {
                warn!(error = %e, "answer text could not be extracted");
                Answer {
                    text: format!("{EXTRACTION_ERROR_PREFIX}: {e}"),
                    source: AnswerSource::ExtractionFailed,
                    context_fragments,
                }
            }
        };

        info!(
            question_len = question.len(),
            matched = relevant.len(),
            context_fragments,
            prompt_len = prompt.len(),
            answer_len = answer.text.len(),
            "question answered"
        );

        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use ai_llm_service::{
        AiLlmError, GenerateContentResponse,
        error_handler::ProviderError,
        generator::GenerateFuture,
        response::{Candidate, PromptFeedback},
    };

    use super::*;

    /// Replays one canned outcome and records every prompt it receives.
    struct FakeGenerator {
        reply: fn() -> Result<GenerateContentResponse, AiLlmError>,
        prompts: Mutex<Vec<String>>,
    }

    impl FakeGenerator {
        fn new(reply: fn() -> Result<GenerateContentResponse, AiLlmError>) -> Arc<Self> {
            Arc::new(Self {
                reply,
                prompts: Mutex::new(Vec::new()),
            })
        }

        fn prompts(&self) -> Vec<String> {
            self.prompts.lock().unwrap().clone()
        }
    }

    impl ContentGenerator for FakeGenerator {
        fn generate_content<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            let out = (self.reply)();
            Box::pin(async move { out })
        }
    }

    fn service(corpus: &str, chunk_size: usize, fake: Arc<FakeGenerator>) -> AnswerService {
        let cfg = StudyGuideConfig {
            chunk_size,
            ..StudyGuideConfig::default()
        };
        AnswerService::new(&Corpus::from_text("guia.txt", corpus), &cfg, fake).unwrap()
    }

    #[tokio::test]
    async fn answers_with_model_text() {
        let fake = FakeGenerator::new(|| Ok(GenerateContentResponse::from_text("Es 2x.")));
        let svc = service("derivadas de x2; integrales; limites", 12, fake.clone());

        let answer = svc.answer("derivadas").await.unwrap();
        assert_eq!(answer.text, "Es 2x.");
        assert_eq!(
            answer.source,
            AnswerSource::Model {
                strategy: "response_text"
            }
        );
        assert_eq!(answer.context_fragments, 1);

        let prompts = fake.prompts();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("derivadas de"));
        assert!(!prompts[0].contains("integrales"));
        assert!(prompts[0].contains("Pregunta del estudiante: derivadas"));
    }

    #[tokio::test]
    async fn prompt_never_holds_more_than_three_fragments() {
        let fake = FakeGenerator::new(|| Ok(GenerateContentResponse::from_text("ok")));
        // Ten fragments, none of which matches: fallback to all, then cap at three.
        let svc = service("aaaaabbbbbcccccdddddeeeeefffffggggghhhhhiiiiijjjjj", 5, fake.clone());
        assert_eq!(svc.fragments().len(), 10);

        let answer = svc.answer("zzz").await.unwrap();
        assert_eq!(answer.context_fragments, 3);

        let prompt = &fake.prompts()[0];
        assert!(prompt.contains("aaaaa\nbbbbb\nccccc\n"));
        assert!(!prompt.contains("ddddd"));
    }

    #[tokio::test]
    async fn extraction_failure_becomes_error_text() {
        let fake = FakeGenerator::new(|| {
            Ok(GenerateContentResponse {
                candidates: vec![],
                prompt_feedback: Some(PromptFeedback {
                    block_reason: Some("SAFETY".into()),
                }),
            })
        });
        let svc = service("texto de la guia", 500, fake);

        let answer = svc.answer("guia").await.unwrap();
        assert_eq!(answer.source, AnswerSource::ExtractionFailed);
        assert!(answer.text.starts_with("[Error al generar respuesta]: "));
    }

    #[tokio::test]
    async fn nested_path_rescues_multi_candidate_responses() {
        let fake = FakeGenerator::new(|| {
            let one = GenerateContentResponse::from_text("primera").candidates;
            let two: Vec<Candidate> = GenerateContentResponse::from_text("segunda").candidates;
            Ok(GenerateContentResponse {
                candidates: one.into_iter().chain(two).collect(),
                prompt_feedback: None,
            })
        });
        let svc = service("texto", 500, fake);

        let answer = svc.answer("texto").await.unwrap();
        assert_eq!(answer.text, "primera");
        assert_eq!(
            answer.source,
            AnswerSource::Model {
                strategy: "first_candidate_first_part"
            }
        );
    }

    #[tokio::test]
    async fn model_failure_is_propagated() {
        let fake = FakeGenerator::new(|| Err(ProviderError::Decode("boom".into()).into()));
        let svc = service("texto", 500, fake.clone());

        assert!(matches!(
            svc.answer("texto").await,
            Err(StudyGuideError::Llm(AiLlmError::Provider(ProviderError::Decode(_))))
        ));
        assert_eq!(fake.prompts().len(), 1);
    }

    #[test]
    fn zero_chunk_size_is_rejected_at_construction() {
        let cfg = StudyGuideConfig {
            chunk_size: 0,
            ..StudyGuideConfig::default()
        };
        let fake = FakeGenerator::new(|| Ok(GenerateContentResponse::default()));
        assert!(matches!(
            AnswerService::new(&Corpus::from_text("g.txt", "abc"), &cfg, fake),
            Err(StudyGuideError::InvalidChunkSize)
        ));
    }

    #[test]
    fn oversized_context_k_is_rejected_at_construction() {
        let fake = FakeGenerator::new(|| Ok(GenerateContentResponse::default()));
        for context_k in [0, 4, 6] {
            let cfg = StudyGuideConfig {
                chunk_size: 5,
                context_k,
                ..StudyGuideConfig::default()
            };
            assert!(
                matches!(
                    AnswerService::new(
                        &Corpus::from_text("g.txt", "aaaaabbbbbcccccdddddeeeeefffff"),
                        &cfg,
                        fake.clone(),
                    ),
                    Err(StudyGuideError::InvalidConfig { var: "CONTEXT_K", .. })
                ),
                "{context_k}"
            );
        }
    }
}
