pub mod dictionary;
pub mod error;
pub mod furigana;
pub mod preprocess;
pub mod types;

pub use dictionary::{DictionaryMetadata, FuriganaDictionary, LoadError};
pub use error::AnalysisError;
pub use furigana::{FuriganaEntry, FuriganaSegment};
pub use types::{Alternative, Readings, RubyStyle, SentenceAnalysis, WordAnalysis};
