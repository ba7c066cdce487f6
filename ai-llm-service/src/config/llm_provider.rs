/// Represents the provider (backend) used for text generation.
///
/// Only Google's Gemini `generateContent` API is wired today. Adding another
/// backend means extending this enum and giving it a service under
/// `crate::services` that implements [`crate::generator::ContentGenerator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Google Gemini (Generative Language API).
    Gemini,
}
