use std::sync::Arc;

use anyhow::Context;
use yomi_config::Config;
use yomi_lang_japanese::{IchiMoeClient, JapaneseProcessor};

use crate::status::{self, DictionaryStatus};

pub struct AppState {
    pub processor: JapaneseProcessor,
    pub dictionary_status: DictionaryStatus,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client =
            IchiMoeClient::new(&config.service).context("Failed to build the HTTP client")?;
        let mut processor = JapaneseProcessor::new(Arc::new(client), config.render.clone());

        let (index, dictionary_status) = status::load_dictionary(&config.dictionary);
        if let Some(index) = index {
            processor = processor.with_dictionary(index);
        }

        Ok(Self {
            processor,
            dictionary_status,
        })
    }
}
