//! Plain-text extraction from a [`GenerateContentResponse`].
//!
//! The response shape is not uniform across states (blocked prompts,
//! safety-filtered or empty completions), so extraction is an ordered list of
//! strategies. Each one either yields text or explains why it could not; the
//! first success wins and the last failure is reported if none succeeds.

use thiserror::Error;
use tracing::{debug, warn};

use crate::response::GenerateContentResponse;

/// Why a single strategy could not produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("the prompt was blocked ({0}) and no candidates were returned")]
    Blocked(String),

    #[error("the response contains no candidates")]
    NoCandidates,

    #[error("the quick text accessor only works for single-candidate responses, got {0}")]
    MultipleCandidates(usize),

    #[error("the candidate has no content parts (finish_reason: {0})")]
    NoParts(String),

    #[error("content part {0} is not text")]
    NonTextPart(usize),

    #[error("missing `{0}` in the response")]
    MissingPath(&'static str),
}

/// A strategy turns a response into text or explains why it could not.
pub type Strategy = fn(&GenerateContentResponse) -> Result<String, ExtractError>;

/// Strategies in the order they are tried.
pub const STRATEGIES: &[(&str, Strategy)] = &[
    ("response_text", response_text),
    ("first_candidate_first_part", first_candidate_first_part),
];

/// Text produced by one of the [`STRATEGIES`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extracted {
    /// Name of the strategy that succeeded.
    pub strategy: &'static str,
    pub text: String,
}

/// Runs [`STRATEGIES`] in order and returns the first success.
///
/// # Errors
/// Returns the error of the last strategy when none succeeds.
///
/// # Example
/// ```
/// use ai_llm_service::{extract::extract_text, response::GenerateContentResponse};
///
/// let resp = GenerateContentResponse::from_text("42");
/// let out = extract_text(&resp).unwrap();
/// assert_eq!(out.text, "42");
/// assert_eq!(out.strategy, "response_text");
/// ```
pub fn extract_text(resp: &GenerateContentResponse) -> Result<Extracted, ExtractError> {
    let mut last_err = ExtractError::NoCandidates;

    for &(name, strategy) in STRATEGIES {
        match strategy(resp) {
            Ok(text) => {
                debug!(strategy = name, text_len = text.len(), "text extracted");
                return Ok(Extracted {
                    strategy: name,
                    text,
                });
            }
            Err(e) => {
                debug!(strategy = name, error = %e, "extraction strategy failed");
                last_err = e;
            }
        }
    }

    warn!(error = %last_err, "no extraction strategy produced text");
    Err(last_err)
}

/// Quick accessor: exactly one candidate, at least one part, every part is text.
/// All parts are concatenated.
pub fn response_text(resp: &GenerateContentResponse) -> Result<String, ExtractError> {
    let candidate = match resp.candidates.as_slice() {
        [] => {
            return Err(match resp
                .prompt_feedback
                .as_ref()
                .and_then(|f| f.block_reason.clone())
            {
                Some(reason) => ExtractError::Blocked(reason),
                None => ExtractError::NoCandidates,
            });
        }
        [only] => only,
        many => return Err(ExtractError::MultipleCandidates(many.len())),
    };

    let parts = candidate
        .content
        .as_ref()
        .map(|c| c.parts.as_slice())
        .unwrap_or_default();
    if parts.is_empty() {
        let reason = candidate
            .finish_reason
            .clone()
            .unwrap_or_else(|| "unknown".into());
        return Err(ExtractError::NoParts(reason));
    }

    let mut out = String::new();
    for (i, part) in parts.iter().enumerate() {
        out.push_str(part.text.as_deref().ok_or(ExtractError::NonTextPart(i))?);
    }
    Ok(out)
}

/// Nested path: `candidates[0].content.parts[0].text`.
pub fn first_candidate_first_part(resp: &GenerateContentResponse) -> Result<String, ExtractError> {
    resp.candidates
        .first()
        .ok_or(ExtractError::MissingPath("candidates[0]"))?
        .content
        .as_ref()
        .ok_or(ExtractError::MissingPath("candidates[0].content"))?
        .parts
        .first()
        .ok_or(ExtractError::MissingPath("candidates[0].content.parts[0]"))?
        .text
        .clone()
        .ok_or(ExtractError::MissingPath("candidates[0].content.parts[0].text"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{Candidate, Content, Part, PromptFeedback};

    fn candidate(parts: Vec<Option<&str>>, finish: &str) -> Candidate {
        Candidate {
            content: Some(Content {
                parts: parts
                    .into_iter()
                    .map(|t| Part {
                        text: t.map(str::to_string),
                    })
                    .collect(),
                role: Some("model".into()),
            }),
            finish_reason: Some(finish.into()),
        }
    }

    #[test]
    fn single_candidate_uses_quick_accessor() {
        let resp = GenerateContentResponse {
            candidates: vec![candidate(vec![Some("Paso 1. "), Some("Paso 2.")], "STOP")],
            prompt_feedback: None,
        };
        let out = extract_text(&resp).unwrap();
        assert_eq!(out.strategy, "response_text");
        assert_eq!(out.text, "Paso 1. Paso 2.");
    }

    #[test]
    fn multiple_candidates_fall_back_to_nested_path() {
        let resp = GenerateContentResponse {
            candidates: vec![
                candidate(vec![Some("primera"), Some(" resto")], "STOP"),
                candidate(vec![Some("segunda")], "STOP"),
            ],
            prompt_feedback: None,
        };
        assert_eq!(
            response_text(&resp),
            Err(ExtractError::MultipleCandidates(2))
        );

        let out = extract_text(&resp).unwrap();
        assert_eq!(out.strategy, "first_candidate_first_part");
        assert_eq!(out.text, "primera");
    }

    #[test]
    fn non_text_part_falls_back_when_first_part_is_text() {
        let resp = GenerateContentResponse {
            candidates: vec![candidate(vec![Some("texto"), None], "STOP")],
            prompt_feedback: None,
        };
        assert_eq!(response_text(&resp), Err(ExtractError::NonTextPart(1)));
        assert_eq!(extract_text(&resp).unwrap().text, "texto");
    }

    #[test]
    fn safety_filtered_candidate_fails_both_strategies() {
        let resp = GenerateContentResponse {
            candidates: vec![Candidate {
                content: None,
                finish_reason: Some("SAFETY".into()),
            }],
            prompt_feedback: None,
        };
        assert_eq!(
            response_text(&resp),
            Err(ExtractError::NoParts("SAFETY".into()))
        );
        assert_eq!(
            extract_text(&resp),
            Err(ExtractError::MissingPath("candidates[0].content"))
        );
    }

    #[test]
    fn blocked_prompt_is_explained_by_quick_accessor() {
        let resp = GenerateContentResponse {
            candidates: vec![],
            prompt_feedback: Some(PromptFeedback {
                block_reason: Some("SAFETY".into()),
            }),
        };
        assert_eq!(
            response_text(&resp),
            Err(ExtractError::Blocked("SAFETY".into()))
        );
        // The nested path is the last strategy, so its error is the one surfaced.
        assert_eq!(
            extract_text(&resp),
            Err(ExtractError::MissingPath("candidates[0]"))
        );
    }

    #[test]
    fn empty_text_is_still_text() {
        let resp = GenerateContentResponse::from_text("");
        assert_eq!(extract_text(&resp).unwrap().text, "");
    }
}
