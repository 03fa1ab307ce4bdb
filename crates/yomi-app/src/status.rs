use std::path::Path;

use yomi_config::dictionary::DictionaryConfig;
use yomi_core::{FuriganaDictionary, LoadError};
use yomi_lang_japanese::{FuriganaIndex, FuriganaLoader};

/// Outcome of loading the furigana index at startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DictionaryStatus {
    Loaded { name: String, entries: usize },
    Disabled,
    NotConfigured,
    Failed(String),
}

impl DictionaryStatus {
    /// Tell the user how annotation will behave for this session
    pub fn report(&self) {
        match self {
            DictionaryStatus::Loaded { name, entries } => {
                tracing::info!("Furigana dictionary {} ready: {} entries", name, entries)
            }
            DictionaryStatus::Disabled => {
                tracing::info!("Furigana dictionary disabled, readings shown in brackets")
            }
            DictionaryStatus::NotConfigured => tracing::warn!(
                "No furigana dictionary configured (set YOMI_FURIGANA_PATH), readings shown in brackets"
            ),
            DictionaryStatus::Failed(e) => tracing::warn!(
                "Failed to load furigana dictionary, readings shown in brackets: {}",
                e
            ),
        }
    }
}

/// Load the configured index, never failing the caller
pub fn load_dictionary(config: &DictionaryConfig) -> (Option<FuriganaIndex>, DictionaryStatus) {
    if !config.enabled {
        return (None, DictionaryStatus::Disabled);
    }
    let Some(path) = config.path.as_deref() else {
        return (None, DictionaryStatus::NotConfigured);
    };

    match FuriganaLoader::load_from_file(Path::new(path)) {
        Ok(index) => {
            let metadata = index.metadata();
            let status = DictionaryStatus::Loaded {
                name: metadata.name,
                entries: metadata.entry_count,
            };
            (Some(index), status)
        }
        Err(e @ LoadError::FileNotFound(_)) => (None, DictionaryStatus::Failed(e.to_string())),
        Err(e) => (None, DictionaryStatus::Failed(format!("{path}: {e}"))),
    }
}
