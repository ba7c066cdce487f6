//! Keyword-overlap retrieval over fragments.

use tracing::debug;

use crate::chunking::Fragment;

/// Lowercase `question` and split it on whitespace.
pub fn keywords(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Select fragments whose lowercased text contains any keyword as a substring.
///
/// Matches keep corpus order. When nothing matches (including an empty
/// question) every fragment is returned, so the prompt always has context.
///
/// # Example
/// ```
/// use study_guide::{chunking::Fragment, retrieve::search_fragments};
///
/// let frags = vec![
///     Fragment::new(0, "intro to limits"),
///     Fragment::new(1, "chain rule explained"),
///     Fragment::new(2, "unrelated text"),
/// ];
/// let hits = search_fragments("derivative chain rule", &frags);
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].text(), "chain rule explained");
/// ```
pub fn search_fragments<'a>(question: &str, fragments: &'a [Fragment]) -> Vec<&'a Fragment> {
    let words = keywords(question);

    let matches: Vec<&Fragment> = fragments
        .iter()
        .filter(|f| words.iter().any(|w| f.lowered().contains(w.as_str())))
        .collect();

    if matches.is_empty() {
        debug!(
            keywords = words.len(),
            fragments = fragments.len(),
            "search_fragments: no match, using every fragment"
        );
        fragments.iter().collect()
    } else {
        debug!(
            keywords = words.len(),
            matched = matches.len(),
            "search_fragments: matched"
        );
        matches
    }
}
