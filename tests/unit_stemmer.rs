// Unit tests for the Russian stemmer.
//
// Known vectors for each suffix class plus the properties that hold for
// every word: the RV split reassembles the word, vowel-less words are left
// alone, and stemming is deterministic.

use annotator::stem;
use annotator::stemmer::region::split_rv;
use annotator::stemmer::rules::{ADJECTIVE, NOUN, PARTICIPLE, PERFECTIVE_GERUND, REFLEXIVE, VERB};

// ============================================================
// Known vectors
// ============================================================

fn assert_stems(cases: &[(&str, &str)]) {
    for (word, expected) in cases {
        assert_eq!(stem(word), *expected, "stem({word:?})");
    }
}

#[test]
fn perfective_gerunds_strip_first() {
    assert_stems(&[
        ("прочитав", "прочита"),
        ("прочитавши", "прочита"),
        ("умывшись", "ум"),
        ("одевшись", "одевш"),
    ]);
}

#[test]
fn adjectives_and_participles() {
    assert_stems(&[
        ("красивая", "красив"),
        ("красивые", "красив"),
        ("бегущий", "бегущ"),
        ("читающий", "чита"),
        ("читающая", "чита"),
        ("бегающая", "бега"),
        ("читаемый", "чита"),
        ("вечерний", "вечерн"),
    ]);
}

#[test]
fn verbs() {
    assert_stems(&[
        ("поймала", "пойма"),
        ("убежала", "убежа"),
        ("спала", "спал"),
        ("бегали", "бега"),
        ("делаешь", "дела"),
        ("читаем", "чита"),
        ("приходить", "приход"),
        ("спать", "спат"),
    ]);
}

#[test]
fn reflexive_verbs() {
    assert_stems(&[("умывались", "умыва")]);
}

#[test]
fn nouns() {
    assert_stems(&[
        ("кошка", "кошк"),
        ("собака", "собак"),
        ("мышь", "мыш"),
        ("мышью", "мыш"),
        ("книгами", "книг"),
        ("книги", "книг"),
        ("столы", "стол"),
        ("заводов", "завод"),
        ("иванова", "иванов"),
        ("программирование", "программирован"),
    ]);
}

#[test]
fn derivational_and_soft_sign() {
    assert_stems(&[
        ("новость", "новост"),
        ("новости", "новост"),
        ("радость", "радост"),
        ("гость", "гост"),
        ("радостный", "радостн"),
    ]);
}

#[test]
fn superlatives_and_double_n() {
    assert_stems(&[
        ("красивейший", "красив"),
        ("быстрейший", "быстр"),
        ("знаменитейшие", "знаменит"),
        ("сильнейше", "сильн"),
        ("длинный", "длин"),
        ("длинн", "длин"),
        ("организованный", "организова"),
        // "айш" is not the superlative fragment
        ("величайший", "величайш"),
    ]);
}

#[test]
fn yo_is_folded_into_ye() {
    assert_stems(&[("ёлка", "елк"), ("ёжик", "ежик")]);
}

#[test]
fn words_without_rv_are_unchanged() {
    assert_stems(&[
        ("", ""),
        ("кгб", "кгб"),
        ("стол", "стол"),
        ("мост", "мост"),
        ("яблоко", "яблоко"),
        ("я", "я"),
        ("xyz", "xyz"),
    ]);
}

// ============================================================
// Properties
// ============================================================

const SAMPLE: &[&str] = &[
    "прочитав", "красивейший", "организованный", "радость", "кошка", "собака", "ёлка",
    "умывшись", "бегающая", "книгами", "кгб", "", "я", "стол", "e-mail", "читаемый",
];

#[test]
fn region_reassembles_word() {
    for word in SAMPLE {
        match split_rv(word) {
            Some(region) => assert_eq!(format!("{}{}", region.head, region.rv), *word),
            None => assert!(!word.chars().any(|c| "аеиоуыэюя".contains(c))),
        }
    }
}

#[test]
fn empty_rv_means_unchanged() {
    for word in SAMPLE {
        let word = word.replace('ё', "е");
        let empty = split_rv(&word).map_or(true, |region| region.rv.is_empty());
        if empty {
            assert_eq!(stem(&word), word);
        }
    }
}

#[test]
fn stemming_is_deterministic() {
    for word in SAMPLE {
        assert_eq!(stem(word), stem(word));
    }
}

#[test]
fn stem_is_a_prefix_of_the_normalized_word_or_shorter() {
    // Only "нн" -> "н" rewrites a character; everything else strips
    for word in SAMPLE {
        let normalized = word.replace('ё', "е");
        let stemmed = stem(word);
        assert!(stemmed.chars().count() <= normalized.chars().count());
    }
}

// ============================================================
// Rule tables
// ============================================================

#[test]
fn every_class_has_rules() {
    for class in [&PERFECTIVE_GERUND, &REFLEXIVE, &ADJECTIVE, &PARTICIPLE, &VERB, &NOUN] {
        assert!(!class.rules.is_empty(), "{} has no rules", class.name);
    }
}

#[test]
fn adjective_then_participle() {
    // "ющий": adjective "ий" first, then participle "ющ" after "а"
    let (rv, adjective) = ADJECTIVE.strip("тающий");
    assert!(adjective);
    assert_eq!(rv, "тающ");
    assert_eq!(PARTICIPLE.strip(&rv), ("та".to_string(), true));
}

#[test]
fn verb_group_two_needs_a_or_ya() {
    assert!(VERB.find("ала").is_some());
    assert!(VERB.find("ола").is_none());
}
