// Title-driven sentence relevance.
//
// Title words are lowercased, stemmed and filtered; every surviving stem
// is a probe. For each probe:
//
//   tf  = occurrences of the stem in the whole cleaned content
//   idf = occurrences of the stem in one sentence
//   score[sentence] += tf * idf
//
// This is not classical IDF: a sentence scores high when it repeats a
// stem that is also frequent across the whole text. All counting is
// case-insensitive and non-overlapping.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::splitter::Sentence;
use crate::stemmer::stem;

/// Length thresholds for title words (counted in characters).
///
/// Words shorter than `min_word_chars` are dropped before stemming; stems
/// shorter than `min_stem_chars` are too generic to probe with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoringParams {
    /// Shortest title word kept (default 4)
    pub min_word_chars: usize,
    /// Shortest stem used for scoring (default 5)
    pub min_stem_chars: usize,
}

impl Default for ScoringParams {
    fn default() -> Self {
        Self {
            min_word_chars: 4,
            min_stem_chars: 5,
        }
    }
}

/// A title word that survived filtering, with its stem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleToken {
    pub word: String,
    pub stem: String,
}

/// Accumulated relevance of one distinct sentence text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SentenceScore {
    pub text: String,
    /// Byte offset of the first occurrence in the cleaned content
    pub offset: usize,
    pub score: u64,
}

/// Split the title into probe tokens.
///
/// Keeps only Latin/Cyrillic letters, drops short words, stems the rest,
/// and removes stems that are too short or are themselves stop words.
/// Repeated title words are kept, so they weigh more.
pub fn title_tokens(
    title: &str,
    stop_words: &HashSet<String>,
    params: &ScoringParams,
) -> Vec<TitleToken> {
    let title = title.to_lowercase().replace('ё', "е");

    title
        .split(|c: char| !is_title_letter(c))
        .filter(|word| word.chars().count() >= params.min_word_chars)
        .map(|word| TitleToken {
            word: word.to_string(),
            stem: stem(word),
        })
        .filter(|token| token.stem.chars().count() >= params.min_stem_chars)
        .filter(|token| !stop_words.contains(&token.stem))
        .collect()
}

fn is_title_letter(c: char) -> bool {
    c.is_ascii_lowercase() || ('а'..='я').contains(&c)
}

/// Score sentences against the title tokens.
///
/// Sentences with no contribution get no entry. Identical sentence texts
/// share one entry. The result is in document order.
pub fn score(tokens: &[TitleToken], sentences: &[Sentence], cleaned: &str) -> Vec<SentenceScore> {
    let content = cleaned.to_lowercase();
    let lowered: Vec<String> = sentences.iter().map(|s| s.text.to_lowercase()).collect();

    let mut scores: Vec<SentenceScore> = Vec::new();
    let mut by_text: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        let tf = count_occurrences(&content, &token.stem);
        if tf == 0 {
            continue;
        }

        for (sentence, lower) in sentences.iter().zip(&lowered) {
            let contribution = tf * count_occurrences(lower, &token.stem);
            if contribution == 0 {
                continue;
            }

            match by_text.entry(sentence.text.as_str()) {
                Entry::Occupied(slot) => scores[*slot.get()].score += contribution,
                Entry::Vacant(slot) => {
                    slot.insert(scores.len());
                    scores.push(SentenceScore {
                        text: sentence.text.clone(),
                        offset: sentence.offset,
                        score: contribution,
                    });
                }
            }
        }
    }

    scores.sort_by_key(|s| s.offset);
    scores
}

/// Non-overlapping occurrences of `needle` in `haystack`.
fn count_occurrences(haystack: &str, needle: &str) -> u64 {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count() as u64
}
