use crate::furigana::FuriganaEntry;

/// Read-only furigana lookup by `(word, reading)`
pub trait FuriganaDictionary: Send + Sync {
    /// Exact-match lookup. Surrounding whitespace on both keys is ignored,
    /// nothing else is normalized.
    fn lookup(&self, word: &str, reading: &str) -> Option<&FuriganaEntry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct DictionaryMetadata {
    pub name: String,
    pub entry_count: usize,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
