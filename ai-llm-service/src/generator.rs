use std::{future::Future, pin::Pin};

use crate::{error_handler::AiLlmError, response::GenerateContentResponse};

/// Boxed future returned by [`ContentGenerator::generate_content`].
pub type GenerateFuture<'a> =
    Pin<Box<dyn Future<Output = Result<GenerateContentResponse, AiLlmError>> + Send + 'a>>;

/// Provider interface for single-shot text generation.
///
/// Implement this trait to plug in another backend or a test double.
/// One call is one outbound request; implementations must not retry.
pub trait ContentGenerator: Send + Sync {
    /// Sends `prompt` as a single user turn and returns the raw provider response.
    fn generate_content<'a>(&'a self, prompt: &'a str) -> GenerateFuture<'a>;
}
