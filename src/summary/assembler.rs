// Turning scored sentences into the final annotation text.
//
// The best sentences are picked by score, then put back into the order
// they appear in the document so the annotation reads naturally.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::scorer::SentenceScore;
use super::splitter::collapse_whitespace;

/// Marker appended to every annotation.
pub const ELLIPSIS: &str = "...";

static TERMINAL_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("terminal punctuation pattern"));

/// The outcome of annotating a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "text", rename_all = "snake_case")]
pub enum Annotation {
    /// Selected sentences in document order, ending with the ellipsis marker
    Summary(String),
    /// The title shares no significant stems with the content
    NoRelevantSentences,
}

impl Annotation {
    /// The summary text, if any sentence was selected.
    pub fn summary(&self) -> Option<&str> {
        match self {
            Self::Summary(text) => Some(text),
            Self::NoRelevantSentences => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::NoRelevantSentences)
    }

    /// Flatten to a string. An empty annotation is just the ellipsis marker.
    pub fn into_text(self) -> String {
        match self {
            Self::Summary(text) => text,
            Self::NoRelevantSentences => ELLIPSIS.to_string(),
        }
    }
}

impl fmt::Display for Annotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.summary().unwrap_or(ELLIPSIS))
    }
}

/// Pick the `count` best sentences and format them.
///
/// Sorting by score is stable, so equal scores keep document order. When
/// fewer than `count` sentences scored, all of them are used. One trailing
/// `.` is dropped before the ellipsis, so the text ends in `...`, never `....`.
pub fn assemble(mut scores: Vec<SentenceScore>, count: usize) -> Annotation {
    scores.sort_by(|a, b| b.score.cmp(&a.score));
    scores.truncate(count);
    if scores.is_empty() {
        return Annotation::NoRelevantSentences;
    }

    scores.sort_by_key(|s| s.offset);

    let sentences: Vec<Cow<'_, str>> = scores
        .iter()
        .map(|s| TERMINAL_RUN.replace_all(&s.text, "."))
        .collect();
    let joined = sentences.join(" ");
    let joined = joined.trim_end();
    let body = joined.strip_suffix('.').unwrap_or(joined);

    let text = collapse_whitespace(&format!("{body}{ELLIPSIS}"));
    Annotation::Summary(text.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(text: &str, offset: usize, score: u64) -> SentenceScore {
        SentenceScore {
            text: text.to_string(),
            offset,
            score,
        }
    }

    #[test]
    fn test_empty_scores() {
        assert_eq!(assemble(vec![], 3), Annotation::NoRelevantSentences);
    }

    #[test]
    fn test_zero_count() {
        let scores = vec![scored("Один.", 0, 5)];
        assert_eq!(assemble(scores, 0), Annotation::NoRelevantSentences);
    }

    #[test]
    fn test_best_sentences_in_document_order() {
        let scores = vec![
            scored("Первое.", 0, 1),
            scored("Второе!", 10, 9),
            scored("Третье?!", 20, 4),
        ];
        let annotation = assemble(scores, 2);
        assert_eq!(annotation.summary(), Some("Второе. Третье..."));
    }

    #[test]
    fn test_ties_keep_document_order() {
        let scores = vec![
            scored("А.", 0, 2),
            scored("Б.", 3, 2),
            scored("В.", 6, 2),
        ];
        assert_eq!(assemble(scores, 2).summary(), Some("А. Б..."));
    }

    #[test]
    fn test_sentence_without_terminal_punctuation() {
        let scores = vec![scored("Без точки в конце", 0, 1)];
        assert_eq!(assemble(scores, 3).summary(), Some("Без точки в конце..."));
    }

    #[test]
    fn test_inner_punctuation_runs_collapse() {
        let scores = vec![scored("Что?! Да!!! Нет", 0, 1)];
        assert_eq!(assemble(scores, 1).summary(), Some("Что. Да. Нет..."));
    }

    #[test]
    fn test_display_of_empty_annotation() {
        assert_eq!(Annotation::NoRelevantSentences.to_string(), ELLIPSIS);
        assert_eq!(Annotation::NoRelevantSentences.into_text(), "...");
    }
}
