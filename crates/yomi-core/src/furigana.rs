use serde::{Deserialize, Serialize};

/// A run of a headword with its reading, if the run needs one
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FuriganaSegment {
    pub text: String,
    pub reading: Option<String>,
}

impl FuriganaSegment {
    pub fn new(text: impl Into<String>, reading: Option<&str>) -> Self {
        Self {
            text: text.into(),
            reading: reading.map(str::to_string),
        }
    }
}

/// Segmented furigana for one headword.
///
/// The concatenated segment texts always equal the headword.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FuriganaEntry(Vec<FuriganaSegment>);

impl FuriganaEntry {
    pub fn new(segments: Vec<FuriganaSegment>) -> Self {
        Self(segments)
    }

    pub fn segments(&self) -> &[FuriganaSegment] {
        &self.0
    }

    pub fn headword(&self) -> String {
        self.0.iter().map(|s| s.text.as_str()).collect()
    }

    /// The segments from the first reading-bearing segment to the last one.
    ///
    /// Kana outside the core (okurigana, prefixes) often attach differently in
    /// running text, so only the core is matched against a sentence.
    pub fn core(&self) -> &[FuriganaSegment] {
        let Some(first) = self.0.iter().position(|s| s.reading.is_some()) else {
            return &[];
        };
        let last = self
            .0
            .iter()
            .rposition(|s| s.reading.is_some())
            .unwrap_or(first);
        &self.0[first..=last]
    }

    /// Literal text of the core, empty for entries without any reading
    pub fn base(&self) -> String {
        self.core().iter().map(|s| s.text.as_str()).collect()
    }
}

impl From<Vec<FuriganaSegment>> for FuriganaEntry {
    fn from(segments: Vec<FuriganaSegment>) -> Self {
        Self(segments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_okurigana_from_core() {
        let entry = FuriganaEntry::new(vec![
            FuriganaSegment::new("お", None),
            FuriganaSegment::new("取", Some("と")),
            FuriganaSegment::new("り", None),
            FuriganaSegment::new("扱", Some("あつか")),
            FuriganaSegment::new("い", None),
        ]);
        assert_eq!(entry.headword(), "お取り扱い");
        assert_eq!(entry.base(), "取り扱");
        assert_eq!(entry.core().len(), 3);
    }

    #[test]
    fn kana_only_entry_has_empty_core() {
        let entry = FuriganaEntry::new(vec![FuriganaSegment::new("ある", None)]);
        assert!(entry.core().is_empty());
        assert_eq!(entry.base(), "");
    }
}
