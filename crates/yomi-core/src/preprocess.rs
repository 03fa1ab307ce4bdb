use unicode_normalization::UnicodeNormalization;

use crate::error::AnalysisError;

pub trait Preprocessor {
    // Default JP preprocessor
    fn process(&self, text: &str) -> String {
        let text = text.trim();

        if text.is_empty() {
            return String::new();
        }

        // Canonical composition only, NFKC would rewrite full-width forms the
        // service and the furigana dataset both expect
        let text: String = text.nfc().collect();

        text.replace(['\n', '\r'], "").trim().to_string()
    }

    /// Process and reject text that is empty afterwards
    fn prepare(&self, text: &str) -> Result<String, AnalysisError> {
        let text = self.process(text);
        if text.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(text)
    }
}

pub struct DefaultPreprocessor;
impl Preprocessor for DefaultPreprocessor {}
