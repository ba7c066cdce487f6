//! Prompt builder: tutor instructions + newline-joined context block.

use crate::chunking::Fragment;

/// Upper bound on retrieved fragments placed in the prompt.
pub const MAX_CONTEXT_K: usize = 3;

/// Number of retrieved fragments placed in the prompt.
pub const DEFAULT_CONTEXT_K: usize = MAX_CONTEXT_K;

/// Join the first `max` fragments with `\n`.
pub fn build_context(fragments: &[&Fragment], max: usize) -> String {
    fragments
        .iter()
        .take(max)
        .map(|f| f.text())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the full tutor prompt for `question` from the retrieved fragments.
///
/// The model is told to answer only from the context, step by step but
/// briefly, and to send the student to the general chat bot otherwise.
///
/// # Example
/// ```
/// use study_guide::{chunking::Fragment, prompt::build_prompt};
///
/// let f = Fragment::new(0, "La derivada de x² es 2x.");
/// let prompt = build_prompt(&[&f], "¿Derivada de x²?", 3);
/// assert!(prompt.contains("La derivada de x² es 2x."));
/// assert!(prompt.contains("Pregunta del estudiante: ¿Derivada de x²?"));
/// ```
pub fn build_prompt(fragments: &[&Fragment], question: &str, max: usize) -> String {
    let context = build_context(fragments, max);
    format!(
        "Eres un tutor especializado en CENEVAL. \
         Usa solo la información de este contexto para responder:\n{context}\n\n\
         Pregunta del estudiante: {question}\n\
         Da la respuesta paso a paso, clara y detallada y no tan extensa.\n\
         En caso de no tener la respuesta que el estudiante busca, \
         indicar que pregunte al chat bot general de la app"
    )
}
