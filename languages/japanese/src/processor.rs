use std::sync::Arc;

use tokio::sync::RwLock;
use yomi_analyzer::AnalysisService;
use yomi_config::render::RenderConfig;
use yomi_core::preprocess::{DefaultPreprocessor, Preprocessor};
use yomi_core::{AnalysisError, FuriganaDictionary, SentenceAnalysis};

use crate::dictionary::FuriganaIndex;
use crate::{parser, render, ruby};

/// Output of one analysis request
#[derive(Debug, Clone)]
pub struct AnalyzedSentence {
    pub analysis: SentenceAnalysis,
    /// The sentence with ruby markup applied
    pub annotated_sentence: String,
    pub markdown: String,
}

/// Japanese analysis pipeline: fetch, parse, annotate, render
pub struct JapaneseProcessor {
    service: Arc<dyn AnalysisService>,
    dictionary: RwLock<Option<Arc<FuriganaIndex>>>,
    render: RenderConfig,
}

impl JapaneseProcessor {
    pub fn new(service: Arc<dyn AnalysisService>, render: RenderConfig) -> Self {
        Self {
            service,
            dictionary: RwLock::new(None),
            render,
        }
    }

    pub fn with_dictionary(mut self, dictionary: FuriganaIndex) -> Self {
        self.dictionary = RwLock::new(Some(Arc::new(dictionary)));
        self
    }

    /// Replace the furigana index, `None` turns annotation off.
    ///
    /// Requests already running keep the index they started with.
    pub async fn reload_dictionary(&self, dictionary: Option<FuriganaIndex>) {
        let dictionary = dictionary.map(Arc::new);
        let count = dictionary.as_ref().map(|d| d.entry_count());
        *self.dictionary.write().await = dictionary;
        match count {
            Some(count) => tracing::info!("Furigana index replaced, {} entries", count),
            None => tracing::info!("Furigana index removed"),
        }
    }

    /// Entries in the current index, `None` when there is no index
    pub async fn dictionary_entry_count(&self) -> Option<usize> {
        self.dictionary
            .read()
            .await
            .as_ref()
            .map(|d| d.entry_count())
    }

    pub async fn analyze(&self, text: &str) -> Result<AnalyzedSentence, AnalysisError> {
        let text = DefaultPreprocessor.prepare(text)?;

        let metadata = self.service.metadata();
        tracing::debug!("Analyzing '{}' with {}", text, metadata.name);

        let body = self
            .service
            .fetch(&text)
            .await
            .and_then(|response| response.into_body())
            .map_err(|e| {
                tracing::error!("Analysis request to {} failed: {}", metadata.base_url, e);
                AnalysisError::FetchFailure(e.to_string())
            })?;

        let analysis = parser::parse(&body, &text);
        if analysis.words.is_empty() {
            tracing::warn!("No words could be read from the analysis page");
        }

        let dictionary = self.dictionary.read().await.clone();
        let annotations = ruby::annotate_analysis(
            &analysis,
            dictionary.as_deref().map(|d| d as &dyn FuriganaDictionary),
            self.render.ruby_style,
        );
        let markdown = render::render(&analysis, &annotations, &self.render);

        Ok(AnalyzedSentence {
            analysis,
            annotated_sentence: annotations.sentence,
            markdown,
        })
    }
}
