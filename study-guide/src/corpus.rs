//! Corpus loading.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::StudyGuideError;

/// The full study-guide text, read once and never modified.
#[derive(Debug, Clone)]
pub struct Corpus {
    path: PathBuf,
    text: String,
}

impl Corpus {
    /// Reads a UTF-8 text file into memory.
    ///
    /// # Errors
    /// [`StudyGuideError::Io`] if the file is missing, unreadable or not valid UTF-8.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, StudyGuideError> {
        let path = path.as_ref().to_path_buf();
        let text = std::fs::read_to_string(&path).map_err(|source| StudyGuideError::Io {
            path: path.clone(),
            source,
        })?;

        info!(
            path = %path.display(),
            bytes = text.len(),
            chars = text.chars().count(),
            "study guide loaded"
        );

        Ok(Self { path, text })
    }

    /// Wraps in-memory text; the path is only informative.
    pub fn from_text(path: impl Into<PathBuf>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn loads_utf8_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "¿Cuál es la derivada de x²?\nRespuesta: 2x").unwrap();

        let corpus = Corpus::load(file.path()).unwrap();
        assert_eq!(corpus.text(), "¿Cuál es la derivada de x²?\nRespuesta: 2x");
        assert_eq!(corpus.path(), file.path());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ceneval_preguntas.txt");

        let err = Corpus::load(&path).unwrap_err();
        match err {
            StudyGuideError::Io { path: p, source } => {
                assert_eq!(p, path);
                assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x66, 0x6f, 0xff, 0xfe]).unwrap();

        assert!(matches!(
            Corpus::load(file.path()),
            Err(StudyGuideError::Io { .. })
        ));
    }
}
