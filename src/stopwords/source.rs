// Stop-word sources: the lists bundled with the `stop-words` crate, and
// plain-text files on disk (one word per line).

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use stop_words::{get, LANGUAGE};
use tracing::debug;

use super::traits::StopWordSource;
use crate::error::StopWordError;

/// Lowercase a stop word and fold `ё` into `е` so it compares against stems.
pub fn normalize_word(word: &str) -> String {
    word.trim().to_lowercase().replace('ё', "е")
}

/// Lists bundled with the `stop-words` crate. `ru` is the canonical code.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl BuiltinSource {
    fn language(code: &str) -> Option<LANGUAGE> {
        let lang = match code {
            "ru" | "russian" => LANGUAGE::Russian,
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            _ => return None,
        };
        Some(lang)
    }
}

impl StopWordSource for BuiltinSource {
    fn load(&self, language: &str) -> Result<HashSet<String>, StopWordError> {
        let lang = Self::language(language).ok_or_else(|| StopWordError::not_found(language))?;
        let words: Vec<String> = get(lang);
        Ok(words.iter().map(|w| normalize_word(w)).filter(|w| !w.is_empty()).collect())
    }

    fn name(&self) -> &'static str {
        "builtin"
    }
}

/// Plain-text lists in a directory: `<dir>/<language>.txt`, one word per
/// line. Blank lines and lines starting with `#` are skipped.
#[derive(Debug, Clone)]
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the list for `language`, or `None` for codes that could
    /// escape the directory.
    pub fn path_for(&self, language: &str) -> Option<PathBuf> {
        let valid = !language.is_empty()
            && language
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        valid.then(|| self.dir.join(format!("{language}.txt")))
    }
}

impl StopWordSource for FileSource {
    fn load(&self, language: &str) -> Result<HashSet<String>, StopWordError> {
        let path = self
            .path_for(language)
            .ok_or_else(|| StopWordError::not_found(language))?;

        let not_found = |source: std::io::Error| StopWordError::ResourceNotFound {
            language: language.to_string(),
            path: Some(path.clone()),
            source: Some(source),
        };

        // The reader owns the file handle and is dropped on every return path
        let reader = BufReader::new(File::open(&path).map_err(not_found)?);
        let mut words = HashSet::new();
        for line in reader.lines() {
            let line = line.map_err(not_found)?;
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            words.insert(normalize_word(line));
        }

        debug!(path = %path.display(), words = words.len(), "Read stop-word file");
        Ok(words)
    }

    fn name(&self) -> &'static str {
        "file"
    }
}
