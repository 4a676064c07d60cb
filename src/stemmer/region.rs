// RV region detection.
//
// The RV region of a Russian word is everything after its first vowel.
// All suffix stripping happens inside RV; the head (up to and including
// the first vowel) is reattached untouched.

/// Vowels that open the RV region. Lowercase only: callers lowercase first.
pub const VOWELS: [char; 9] = ['а', 'е', 'и', 'о', 'у', 'ы', 'э', 'ю', 'я'];

/// Whether `c` is one of the RV vowels.
pub fn is_vowel(c: char) -> bool {
    VOWELS.contains(&c)
}

/// A word split at its first vowel. `head` + `rv` is always the whole word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RvRegion<'a> {
    /// Shortest prefix ending with the first vowel
    pub head: &'a str,
    /// Everything after the first vowel (may be empty)
    pub rv: &'a str,
}

/// Split a word into head and RV.
///
/// Returns `None` when the word has no vowel at all ("no region"); the
/// stemmer then leaves the word as it is.
pub fn split_rv(word: &str) -> Option<RvRegion<'_>> {
    let (idx, vowel) = word.char_indices().find(|&(_, c)| is_vowel(c))?;
    let (head, rv) = word.split_at(idx + vowel.len_utf8());
    Some(RvRegion { head, rv })
}
