// Stop-word source trait — where a language's list comes from.
//
// The store only knows how to cache; sources know how to produce a list.
// Swapping the bundled lists for files on disk (or anything else) means
// implementing this trait.

use std::collections::HashSet;

use crate::error::StopWordError;

/// Produces the stop-word set for a language code.
pub trait StopWordSource: Send + Sync {
    /// Load the full set for `language`. Words are lowercase with `ё`
    /// folded to `е`.
    ///
    /// Fails with `StopWordError::ResourceNotFound` when no list can be
    /// produced; an empty list is never used as a stand-in.
    fn load(&self, language: &str) -> Result<HashSet<String>, StopWordError>;

    /// Short human-readable name for logs.
    fn name(&self) -> &'static str;
}
