// Typed errors for resources the annotator depends on.
//
// Everything else in the crate reports through anyhow; the stop-word
// failure gets its own type so callers can tell "no list for this
// language" apart from other problems via `downcast_ref`.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StopWordError {
    /// No readable stop-word list exists for the requested language.
    /// Covers both a missing resource and an I/O failure while reading it.
    #[error("stop-word resource not found for language '{language}'{}", describe_path(.path))]
    ResourceNotFound {
        language: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },
}

fn describe_path(path: &Option<PathBuf>) -> String {
    match path {
        Some(p) => format!(" (looked for {})", p.display()),
        None => String::new(),
    }
}

impl StopWordError {
    pub fn not_found(language: &str) -> Self {
        Self::ResourceNotFound {
            language: language.to_string(),
            path: None,
            source: None,
        }
    }

    /// The language the failing lookup was for.
    pub fn language(&self) -> &str {
        match self {
            Self::ResourceNotFound { language, .. } => language,
        }
    }
}
