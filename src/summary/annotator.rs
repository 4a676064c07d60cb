// The annotate pipeline: split -> tokenize title -> score -> assemble.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use super::assembler::assemble;
pub use super::assembler::Annotation;
use super::scorer::{score, title_tokens, ScoringParams, TitleToken};
use super::splitter::{clean_content, split_sentences};
use crate::config::Config;
use crate::stopwords::StopWordStore;

/// How many sentences an annotation holds unless the caller asks otherwise.
pub const DEFAULT_SENTENCE_COUNT: usize = 3;

/// Builds title-driven annotations for one language.
///
/// Cheap to construct: the stop-word store is shared behind an Arc, so many
/// annotators (or threads) can use the same loaded lists.
#[derive(Debug, Clone)]
pub struct Annotator {
    store: Arc<StopWordStore>,
    language: String,
    params: ScoringParams,
}

impl Annotator {
    /// Russian annotator with default scoring thresholds.
    pub fn new(store: Arc<StopWordStore>) -> Self {
        Self {
            store,
            language: "ru".to_string(),
            params: ScoringParams::default(),
        }
    }

    /// Annotator configured from `config`, with its own stop-word store.
    pub fn from_config(config: &Config) -> Self {
        Self {
            store: Arc::new(config.stop_word_store()),
            language: config.language.clone(),
            params: config.scoring,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_params(mut self, params: ScoringParams) -> Self {
        self.params = params;
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// The stemmed, filtered title words used to score sentences.
    ///
    /// Fails only when the stop-word list for the language is unavailable.
    pub fn title_tokens(&self, title: &str) -> Result<Vec<TitleToken>> {
        let stop_words = self
            .store
            .get(&self.language)
            .with_context(|| format!("Loading stop words for '{}'", self.language))?;
        Ok(title_tokens(title, &stop_words, &self.params))
    }

    /// Summarize `content` with up to `sentence_count` sentences relevant
    /// to `title`.
    ///
    /// Empty or unrelated content is not an error; it yields
    /// `Annotation::NoRelevantSentences`.
    pub fn annotate(&self, title: &str, content: &str, sentence_count: usize) -> Result<Annotation> {
        let tokens = self.title_tokens(title)?;
        let cleaned = clean_content(title, content)?;
        let sentences = split_sentences(&cleaned);
        let scores = score(&tokens, &sentences, &cleaned);

        debug!(
            sentences = sentences.len(),
            tokens = tokens.len(),
            scored = scores.len(),
            requested = sentence_count,
            "Scored sentences against title"
        );

        Ok(assemble(scores, sentence_count))
    }
}

/// Annotate Russian text using the process-wide stop-word store.
pub fn annotate(title: &str, content: &str, sentence_count: usize) -> Result<Annotation> {
    Annotator::new(StopWordStore::shared()).annotate(title, content, sentence_count)
}
