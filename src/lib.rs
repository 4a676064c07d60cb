// Annotator: Russian stemming and title-driven extractive summaries.
//
// This is the library root. The stemmer is self-contained; the summary
// pipeline builds on it plus a stop-word store:
//   splitter -> scorer (stemmed title tokens) -> assembler

pub mod config;
pub mod error;
pub mod logging;
pub mod stemmer;
pub mod stopwords;
pub mod summary;

pub use stemmer::stem;
pub use summary::annotator::{annotate, Annotation, Annotator, DEFAULT_SENTENCE_COUNT};
