use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

use crate::stopwords::StopWordStore;
use crate::summary::annotator::DEFAULT_SENTENCE_COUNT;
use crate::summary::scorer::ScoringParams;

/// Annotator configuration loaded from environment variables.
///
/// A `.env` file in the working directory is read first if present.
/// Every value has a default, so an empty environment is valid.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Stop-word language code (ANNOTATOR_LANGUAGE, default "ru")
    pub language: String,
    /// Directory of `<language>.txt` stop-word files (ANNOTATOR_STOPWORDS_DIR).
    /// When unset, the lists bundled with the `stop-words` crate are used.
    pub stopwords_dir: Option<PathBuf>,
    /// Sentences per annotation (ANNOTATOR_SENTENCE_COUNT, default 3)
    pub sentence_count: usize,
    /// Title word and stem thresholds
    /// (ANNOTATOR_MIN_WORD_CHARS, ANNOTATOR_MIN_STEM_CHARS)
    pub scoring: ScoringParams,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            language: "ru".to_string(),
            stopwords_dir: None,
            sentence_count: DEFAULT_SENTENCE_COUNT,
            scoring: ScoringParams::default(),
        }
    }
}

impl Config {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a configuration from any key lookup (the environment, a map
    /// in tests, ...). Unset or blank keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Ok(Self {
            language: get("ANNOTATOR_LANGUAGE")
                .map(|v| v.to_lowercase())
                .unwrap_or(defaults.language),
            stopwords_dir: get("ANNOTATOR_STOPWORDS_DIR").map(PathBuf::from),
            sentence_count: parse_or(
                get("ANNOTATOR_SENTENCE_COUNT"),
                "ANNOTATOR_SENTENCE_COUNT",
                defaults.sentence_count,
            )?,
            scoring: ScoringParams {
                min_word_chars: parse_or(
                    get("ANNOTATOR_MIN_WORD_CHARS"),
                    "ANNOTATOR_MIN_WORD_CHARS",
                    defaults.scoring.min_word_chars,
                )?,
                min_stem_chars: parse_or(
                    get("ANNOTATOR_MIN_STEM_CHARS"),
                    "ANNOTATOR_MIN_STEM_CHARS",
                    defaults.scoring.min_stem_chars,
                )?,
            },
        })
    }

    /// The stop-word store this configuration asks for.
    pub fn stop_word_store(&self) -> StopWordStore {
        match &self.stopwords_dir {
            Some(dir) => StopWordStore::from_dir(dir),
            None => StopWordStore::builtin(),
        }
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{key} must be a non-negative integer, got {raw:?}")),
        None => Ok(default),
    }
}
