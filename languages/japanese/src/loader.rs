use std::path::Path;

use yomi_core::dictionary::LoadError;

use crate::dictionary::FuriganaIndex;

pub struct FuriganaLoader;

impl FuriganaLoader {
    /// Load the furigana index from a JSON file
    pub fn load_from_file(path: &Path) -> Result<FuriganaIndex, LoadError> {
        tracing::info!("Loading furigana from file: {}", path.display());
        if !path.exists() {
            return Err(LoadError::FileNotFound(path.display().to_string()));
        }
        let json = std::fs::read_to_string(path)?;
        let index = FuriganaIndex::from_json(&json)?;
        tracing::info!("Loaded {} furigana entries from file", index.entry_count());
        Ok(index)
    }
}
