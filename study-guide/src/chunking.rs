//! Fixed-size chunking of the study guide.
//!
//! Windows are measured in characters (Unicode scalar values), never bytes,
//! so accented Spanish text is never cut inside a code point. Windows do not
//! overlap and leave no gaps: concatenating the fragments in order gives the
//! corpus back.

use tracing::debug;

use crate::error::StudyGuideError;

/// Fragment length used when nothing else is configured.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// An immutable slice of the corpus used as the retrieval unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment {
    index: usize,
    text: String,
    lowered: String,
}

impl Fragment {
    pub fn new(index: usize, text: impl Into<String>) -> Self {
        let text = text.into();
        let lowered = text.to_lowercase();
        Self {
            index,
            text,
            lowered,
        }
    }

    /// Zero-based position in corpus order.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Lowercased text, computed once at construction.
    pub fn lowered(&self) -> &str {
        &self.lowered
    }
}

/// Split `text` into consecutive windows of `chunk_size` characters.
///
/// The last fragment may be shorter. An empty text yields no fragments.
///
/// # Errors
/// [`StudyGuideError::InvalidChunkSize`] if `chunk_size == 0`.
///
/// # Example
/// ```
/// use study_guide::chunking::split_text;
///
/// let parts = split_text("ABCDEFGHIJ", 4).unwrap();
/// let texts: Vec<&str> = parts.iter().map(|f| f.text()).collect();
/// assert_eq!(texts, ["ABCD", "EFGH", "IJ"]);
/// ```
pub fn split_text(text: &str, chunk_size: usize) -> Result<Vec<Fragment>, StudyGuideError> {
    if chunk_size == 0 {
        return Err(StudyGuideError::InvalidChunkSize);
    }

    let mut out = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        // Byte offset of the `chunk_size`-th char, or the end of `rest`.
        let cut = rest
            .char_indices()
            .nth(chunk_size)
            .map(|(i, _)| i)
            .unwrap_or(rest.len());
        let (head, tail) = rest.split_at(cut);
        out.push(Fragment::new(out.len(), head));
        rest = tail;
    }

    debug!(
        fragments = out.len(),
        chunk_size,
        bytes = text.len(),
        "split_text: corpus chunked"
    );
    Ok(out)
}
