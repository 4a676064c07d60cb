// The four-step RV suffix stripper.
//
// Heuristic and dictionary-free, so it both over-stems and under-stems.
// Every step takes the current RV and returns the new RV plus whether it
// changed, which keeps the step order readable top to bottom.

use super::region::{is_vowel, split_rv};
use super::rules::{ADJECTIVE, NOUN, PARTICIPLE, PERFECTIVE_GERUND, REFLEXIVE, VERB};

/// Stem a single word.
///
/// The input is expected to be lowercase. Words without a vowel, or whose
/// first vowel is the last character, come back unchanged (after the
/// `ё` -> `е` normalization).
pub fn stem(word: &str) -> String {
    let word = word.replace('ё', "е");

    let Some(region) = split_rv(&word) else {
        return word;
    };
    if region.rv.is_empty() {
        return word;
    }

    let rv = step_inflection(region.rv);
    let (rv, _) = strip_literal(&rv, "и");
    let rv = step_derivational(&rv);
    let rv = step_superlative(&rv);

    format!("{}{}", region.head, rv)
}

/// Step 1: gerund, or reflexive + adjective/participle, or verb, or noun.
fn step_inflection(rv: &str) -> String {
    let (rv, gerund) = PERFECTIVE_GERUND.strip(rv);
    if gerund {
        return rv;
    }

    let (rv, _) = REFLEXIVE.strip(&rv);
    let (rv, adjective) = ADJECTIVE.strip(&rv);
    if adjective {
        return PARTICIPLE.strip(&rv).0;
    }

    let (rv, verb) = VERB.strip(&rv);
    if verb {
        return rv;
    }
    NOUN.strip(&rv).0
}

/// Step 3: drop "ость"/"ост" when RV has the derivational shape.
fn step_derivational(rv: &str) -> String {
    if !is_derivational(rv) {
        return rv.to_string();
    }
    let (rv, changed) = strip_literal(rv, "ость");
    if changed {
        return rv;
    }
    strip_literal(&rv, "ост").0
}

/// Step 4: soft sign, otherwise superlative fragments and doubled "н".
fn step_superlative(rv: &str) -> String {
    let (rv, soft_sign) = strip_literal(rv, "ь");
    if soft_sign {
        return rv;
    }
    let rv = remove_superlative(&rv);
    match rv.strip_suffix("нн") {
        Some(rest) => format!("{rest}н"),
        None => rv,
    }
}

/// Remove a literal suffix, reporting whether anything changed.
fn strip_literal(rv: &str, suffix: &str) -> (String, bool) {
    match rv.strip_suffix(suffix) {
        Some(rest) => (rest.to_string(), true),
        None => (rv.to_string(), false),
    }
}

/// Whether RV looks like `C V+ C+ V ... о` followed by "ст" or "сть".
///
/// The vowel/consonant shape has to fit inside the part of RV before the
/// final "ст"/"сть", and that part must end with "о".
fn is_derivational(rv: &str) -> bool {
    let stem = rv
        .strip_suffix("сть")
        .or_else(|| rv.strip_suffix("ст"));
    let Some(stem) = stem else {
        return false;
    };
    if !stem.ends_with('о') {
        return false;
    }

    // Find the first consonant followed by a vowel, skip that vowel run,
    // then any consonant left means the shape fits (the stem ends in "о").
    let chars: Vec<char> = stem.chars().collect();
    let Some(start) = chars
        .windows(2)
        .position(|pair| !is_vowel(pair[0]) && is_vowel(pair[1]))
    else {
        return false;
    };
    chars[start + 1..]
        .iter()
        .skip_while(|c| is_vowel(**c))
        .any(|c| !is_vowel(*c))
}

/// Remove every "ейше" / "ейш" fragment, scanning left to right.
fn remove_superlative(rv: &str) -> String {
    let mut out = String::with_capacity(rv.len());
    let mut rest = rv;
    while let Some(c) = rest.chars().next() {
        if let Some(after) = rest.strip_prefix("ейше") {
            rest = after;
        } else if let Some(after) = rest.strip_prefix("ейш") {
            rest = after;
        } else {
            out.push(c);
            rest = &rest[c.len_utf8()..];
        }
    }
    out
}
