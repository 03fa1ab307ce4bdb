use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::Deserialize;
use yomi_core::dictionary::{DictionaryMetadata, FuriganaDictionary, LoadError};
use yomi_core::furigana::{FuriganaEntry, FuriganaSegment};

// JSON structures for parsing the JmdictFurigana format
// See <https://github.com/Doublevil/JmdictFurigana>
#[derive(Debug, Deserialize)]
struct FuriganaJson {
    text: String,
    reading: String,
    furigana: Vec<RubyJson>,
}

#[derive(Debug, Deserialize)]
struct RubyJson {
    ruby: String,
    #[serde(default)]
    rt: Option<String>,
}

/// Furigana index keyed by `(word, reading)`
#[derive(Debug, Default)]
pub struct FuriganaIndex {
    entries: HashMap<String, HashMap<String, FuriganaEntry>>,
    entry_count: usize,
}

impl FuriganaIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the index from a JmdictFurigana JSON string
    pub fn from_json(json_str: &str) -> Result<Self, LoadError> {
        // the published file starts with a byte order mark
        let json_str = json_str.strip_prefix('\u{feff}').unwrap_or(json_str);
        let data: Vec<FuriganaJson> =
            serde_json::from_str(json_str).map_err(|e| LoadError::ParseError(e.to_string()))?;

        let mut index = Self::new();
        let mut skipped = 0;
        for json_entry in data {
            let segments: Vec<FuriganaSegment> = json_entry
                .furigana
                .into_iter()
                .map(|ruby| FuriganaSegment {
                    text: ruby.ruby,
                    reading: ruby.rt.filter(|rt| !rt.is_empty()),
                })
                .collect();
            let entry = FuriganaEntry::new(segments);

            if entry.headword() != json_entry.text {
                skipped += 1;
                continue;
            }

            index.insert(json_entry.text, json_entry.reading, entry);
        }

        if skipped > 0 {
            tracing::debug!("Skipped {skipped} furigana entries not covering their headword");
        }

        Ok(index)
    }

    /// Add an entry, keeping the existing one if the key is taken
    pub fn insert(&mut self, word: String, reading: String, entry: FuriganaEntry) -> bool {
        match self.entries.entry(word).or_default().entry(reading) {
            Entry::Occupied(_) => false,
            Entry::Vacant(vacant) => {
                vacant.insert(entry);
                self.entry_count += 1;
                true
            }
        }
    }

    /// Get the number of entries in the index
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }
}

impl FuriganaDictionary for FuriganaIndex {
    fn lookup(&self, word: &str, reading: &str) -> Option<&FuriganaEntry> {
        self.entries.get(word.trim())?.get(reading.trim())
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "JmdictFurigana".to_string(),
            entry_count: self.entry_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\u{feff}[
        {\"text\":\"日本語\",\"reading\":\"にほんご\",\"furigana\":[{\"ruby\":\"日本\",\"rt\":\"にほん\"},{\"ruby\":\"語\",\"rt\":\"ご\"}]},
        {\"text\":\"食べる\",\"reading\":\"たべる\",\"furigana\":[{\"ruby\":\"食\",\"rt\":\"た\"},{\"ruby\":\"べる\"}]},
        {\"text\":\"日本語\",\"reading\":\"にほんご\",\"furigana\":[{\"ruby\":\"日本語\",\"rt\":\"にっぽんご\"}]},
        {\"text\":\"壊れた\",\"reading\":\"こわれた\",\"furigana\":[{\"ruby\":\"壊\",\"rt\":\"こわ\"}]}
    ]";

    #[test]
    fn loads_entries_by_word_and_reading() {
        let index = FuriganaIndex::from_json(SAMPLE).unwrap();
        assert_eq!(index.entry_count(), 2);

        let entry = index.lookup("日本語", "にほんご").unwrap();
        assert_eq!(
            entry.segments(),
            [
                FuriganaSegment::new("日本", Some("にほん")),
                FuriganaSegment::new("語", Some("ご")),
            ]
        );

        let entry = index.lookup(" 食べる ", "たべる").unwrap();
        assert_eq!(entry.segments()[1], FuriganaSegment::new("べる", None));
    }

    #[test]
    fn lookups_are_exact() {
        let index = FuriganaIndex::from_json(SAMPLE).unwrap();
        assert!(index.lookup("日本語", "にっぽんご").is_none());
        assert!(index.lookup("日本", "にほん").is_none());
        assert!(index.lookup("壊れた", "こわれた").is_none());
    }

    #[test]
    fn rejects_malformed_json() {
        let result = FuriganaIndex::from_json("{\"text\": 1}");
        assert!(matches!(result, Err(LoadError::ParseError(_))));
    }
}
