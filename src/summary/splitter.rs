// Content cleanup and sentence segmentation.
//
// The content is cleaned first (title echoes, whitespace, tables, code
// blocks, tags) and then cut after sentence-ending punctuation that is
// followed by whitespace and a capital letter or digit. Sentences keep
// their own punctuation and case; matching later is case-insensitive.

use std::sync::LazyLock;

use anyhow::{Context, Result};
use regex_lite::Regex;

// regex-lite's `\s` is ASCII only; this adds the rest of Unicode White_Space
// (NBSP and friends are common in Russian text).
const SPACE_CLASS: &str =
    r"[\s\x{85}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}]";

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("{SPACE_CLASS}+")).expect("whitespace pattern"));
static TABLE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<table.*</table>").expect("table pattern"));
static CODE_BLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<code.*</code>").expect("code pattern"));
static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").expect("tag pattern"));
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[.!?]+{SPACE_CLASS}+[А-ЯЁA-Z0-9]")).expect("sentence boundary pattern")
});

/// A sentence of the cleaned content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// The sentence exactly as it appears in the cleaned content
    pub text: String,
    /// Byte offset of the sentence in the cleaned content
    pub offset: usize,
}

/// Normalize raw content before segmentation.
///
/// Removes every case-insensitive occurrence of the title (any whitespace
/// run inside the title matches any whitespace run in the content),
/// collapses whitespace, drops table and code blocks, then strips the
/// remaining tags.
pub fn clean_content(title: &str, content: &str) -> Result<String> {
    let mut text = match title_pattern(title)? {
        Some(pattern) => pattern.replace_all(content, "").into_owned(),
        None => content.to_string(),
    };

    text = collapse_whitespace(&text);
    text = TABLE_BLOCK.replace_all(&text, "").into_owned();
    text = CODE_BLOCK.replace_all(&text, "").into_owned();
    text = TAG.replace_all(&text, " ").into_owned();

    Ok(collapse_whitespace(&text).trim().to_string())
}

/// Replace every whitespace run with a single space.
pub fn collapse_whitespace(text: &str) -> String {
    WHITESPACE.replace_all(text, " ").into_owned()
}

/// Split already-cleaned content into sentences, in document order.
pub fn split_sentences(cleaned: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for boundary in BOUNDARY.find_iter(cleaned) {
        // The sentence ends after the punctuation run; the next one starts
        // at the capital letter that closes the match.
        let matched = boundary.as_str();
        let punct_len = matched
            .find(|c: char| !matches!(c, '.' | '!' | '?'))
            .unwrap_or(matched.len());
        let starter_len = matched.chars().next_back().map_or(0, char::len_utf8);

        push_sentence(&mut sentences, cleaned, start, boundary.start() + punct_len);
        start = boundary.end() - starter_len;
    }
    push_sentence(&mut sentences, cleaned, start, cleaned.len());

    sentences
}

/// Clean `content` against `title` and split it into sentences.
pub fn split(title: &str, content: &str) -> Result<Vec<Sentence>> {
    let cleaned = clean_content(title, content)?;
    Ok(split_sentences(&cleaned))
}

fn push_sentence(sentences: &mut Vec<Sentence>, text: &str, start: usize, end: usize) {
    let fragment = &text[start..end];
    let trimmed = fragment.trim_start();
    let offset = start + (fragment.len() - trimmed.len());
    let trimmed = trimmed.trim_end();
    // Punctuation left behind by a removed title is not a sentence
    if trimmed.chars().any(char::is_alphanumeric) {
        sentences.push(Sentence {
            text: trimmed.to_string(),
            offset,
        });
    }
}

/// Case-insensitive pattern for the title, or `None` for a blank title.
///
/// regex-lite only folds ASCII case, so every cased letter becomes a
/// two-letter class (`[кК]`) and whitespace runs match any Unicode
/// whitespace run.
fn title_pattern(title: &str) -> Result<Option<Regex>> {
    let words: Vec<&str> = title.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }

    let separator = format!("{SPACE_CLASS}+");
    let pattern = words
        .iter()
        .map(|word| word.chars().map(case_class).collect::<String>())
        .collect::<Vec<_>>()
        .join(&separator);

    let regex = Regex::new(&pattern)
        .with_context(|| format!("Failed to build title pattern for {title:?}"))?;
    Ok(Some(regex))
}

fn case_class(c: char) -> String {
    let mut lower = c.to_lowercase();
    let mut upper = c.to_uppercase();
    match (lower.next(), lower.next(), upper.next(), upper.next()) {
        (Some(l), None, Some(u), None) if l != u => format!("[{l}{u}]"),
        _ => regex_lite::escape(c.encode_utf8(&mut [0; 4])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_class() {
        assert_eq!(case_class('к'), "[кК]");
        assert_eq!(case_class('Q'), "[qQ]");
        assert_eq!(case_class('.'), r"\.");
        assert_eq!(case_class('7'), "7");
    }

    #[test]
    fn test_title_pattern_blank() {
        assert!(title_pattern("   ").unwrap().is_none());
    }

    #[test]
    fn test_title_removed_case_insensitively() {
        let cleaned =
            clean_content("Новый  Закон", "новый\nзакон принят. НОВЫЙ ЗАКОН вступит в силу.")
                .unwrap();
        assert_eq!(cleaned, "принят. вступит в силу.");
    }

    #[test]
    fn test_non_breaking_space_is_whitespace() {
        assert_eq!(collapse_whitespace("а\u{a0}\u{a0}б\u{3000}в\u{202f} г"), "а б в г");

        let cleaned =
            clean_content("Новый закон", "Новый\u{a0}закон принят.\u{a0}Он вступит в силу.")
                .unwrap();
        assert_eq!(cleaned, "принят. Он вступит в силу.");
    }

    #[test]
    fn test_boundary_after_non_breaking_space() {
        let sentences = split_sentences("Первое.\u{a0}Второе.\u{2009}Третье.");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Первое.", "Второе.", "Третье."]);
    }

    #[test]
    fn test_title_metacharacters_are_literal() {
        let cleaned =
            clean_content("C++ (обзор)", "C++ (обзор) Текст. Cxx обзор остается.").unwrap();
        assert_eq!(cleaned, "Текст. Cxx обзор остается.");
    }

    #[test]
    fn test_markup_removed() {
        let cleaned = clean_content(
            "",
            "<p>Начало.</p><table><tr><td>x</td></tr></table> <code>let x = 1;</code><b>Конец.</b>",
        )
        .unwrap();
        assert_eq!(cleaned, "Начало. Конец.");
    }

    #[test]
    fn test_offsets_point_into_cleaned_text() {
        let cleaned = "Раз. Два!! Три? 4 всё";
        let sentences = split_sentences(cleaned);
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Раз.", "Два!!", "Три?", "4 всё"]);
        for sentence in &sentences {
            let end = sentence.offset + sentence.text.len();
            assert_eq!(&cleaned[sentence.offset..end], sentence.text);
        }
    }

    #[test]
    fn test_punctuation_only_fragments_dropped() {
        let sentences = split_sentences(". Мышь убежала. Собака спала.");
        let texts: Vec<&str> = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["Мышь убежала.", "Собака спала."]);
    }

    #[test]
    fn test_lowercase_after_period_does_not_split() {
        let sentences = split_sentences("Т.е. это одно предложение. А это второе");
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].text, "Т.е. это одно предложение.");
    }
}
