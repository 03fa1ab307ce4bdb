use std::env;

use serde::{Deserialize, Serialize};

fn default_enabled() -> bool {
    true
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct DictionaryConfig {
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// JmdictFurigana JSON file
    #[serde(default)]
    pub path: Option<String>,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        Self {
            enabled: default_enabled(),
            path: env::var("YOMI_FURIGANA_PATH").ok().filter(|p| !p.is_empty()),
        }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: None,
        }
    }
}
