// Load-once stop-word cache.
//
// Each language is loaded from the source the first time someone asks for
// it and kept as an immutable Arc<HashSet> afterwards. The load runs while
// the cache lock is held, so two threads asking for the same language
// never load it twice and never see a half-filled set.

use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};

use tracing::info;

use super::source::BuiltinSource;
use super::source::FileSource;
use super::traits::StopWordSource;
use crate::error::StopWordError;

/// Language code to stop-word set, populated lazily.
pub struct StopWordStore {
    source: Box<dyn StopWordSource>,
    cache: Mutex<HashMap<String, Arc<HashSet<String>>>>,
}

static SHARED: OnceLock<Arc<StopWordStore>> = OnceLock::new();

impl StopWordStore {
    pub fn new(source: impl StopWordSource + 'static) -> Self {
        Self {
            source: Box::new(source),
            cache: Mutex::new(HashMap::new()),
        }
    }

    /// Store backed by the lists bundled with the `stop-words` crate.
    pub fn builtin() -> Self {
        Self::new(BuiltinSource)
    }

    /// Store backed by `<dir>/<language>.txt` files.
    pub fn from_dir(dir: impl Into<std::path::PathBuf>) -> Self {
        Self::new(FileSource::new(dir))
    }

    /// The process-wide store used by the free `annotate` function.
    /// Built from the bundled lists on first use.
    pub fn shared() -> Arc<StopWordStore> {
        SHARED.get_or_init(|| Arc::new(Self::builtin())).clone()
    }

    /// The stop-word set for `language`, loading it on first request.
    ///
    /// Failed loads are not cached; a later call tries the source again.
    pub fn get(&self, language: &str) -> Result<Arc<HashSet<String>>, StopWordError> {
        let key = language.trim().to_lowercase();
        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(words) = cache.get(&key) {
            return Ok(Arc::clone(words));
        }

        let words = Arc::new(self.source.load(&key)?);
        info!(
            language = %key,
            source = self.source.name(),
            words = words.len(),
            "Loaded stop words"
        );
        cache.insert(key, Arc::clone(&words));
        Ok(words)
    }

    /// Whether `language` has already been loaded.
    pub fn is_loaded(&self, language: &str) -> bool {
        let key = language.trim().to_lowercase();
        self.cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(&key)
    }
}

impl std::fmt::Debug for StopWordStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StopWordStore")
            .field("source", &self.source.name())
            .finish_non_exhaustive()
    }
}
