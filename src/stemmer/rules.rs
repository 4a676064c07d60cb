// Suffix rule tables for the Russian stemmer.
//
// Each suffix class is an ordered table of literal suffixes. A rule may
// require the suffix to follow "а" or "я" inside the RV region (the
// classic gerund/participle/verb group 2 condition). Matching is anchored
// at the end of RV and the longest matching suffix of a class wins.

/// What must come right before a suffix for the rule to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preceded {
    /// No condition
    Anywhere,
    /// The character before the suffix (inside RV) is "а" or "я"
    ByAOrYa,
}

/// A single literal suffix plus its context condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuffixRule {
    pub suffix: &'static str,
    pub preceded: Preceded,
}

impl SuffixRule {
    const fn any(suffix: &'static str) -> Self {
        Self {
            suffix,
            preceded: Preceded::Anywhere,
        }
    }

    const fn after_a(suffix: &'static str) -> Self {
        Self {
            suffix,
            preceded: Preceded::ByAOrYa,
        }
    }

    /// Whether this rule matches at the end of `rv`.
    pub fn matches(&self, rv: &str) -> bool {
        let Some(rest) = rv.strip_suffix(self.suffix) else {
            return false;
        };
        match self.preceded {
            Preceded::Anywhere => true,
            Preceded::ByAOrYa => matches!(rest.chars().next_back(), Some('а' | 'я')),
        }
    }
}

/// A named, ordered group of mutually exclusive suffix rules.
#[derive(Debug)]
pub struct SuffixClass {
    pub name: &'static str,
    pub rules: &'static [SuffixRule],
}

impl SuffixClass {
    /// The rule that applies to `rv`, if any.
    ///
    /// When several rules match, the longest suffix wins; on equal length
    /// the earlier rule in the table wins.
    pub fn find(&self, rv: &str) -> Option<&SuffixRule> {
        self.rules
            .iter()
            .filter(|rule| rule.matches(rv))
            .fold(None, |best: Option<&SuffixRule>, rule| match best {
                Some(b) if b.suffix.len() >= rule.suffix.len() => Some(b),
                _ => Some(rule),
            })
    }

    /// Strip this class's suffix from `rv`, reporting whether anything changed.
    pub fn strip(&self, rv: &str) -> (String, bool) {
        match self.find(rv) {
            Some(rule) => (rv[..rv.len() - rule.suffix.len()].to_string(), true),
            None => (rv.to_string(), false),
        }
    }
}

pub static PERFECTIVE_GERUND: SuffixClass = SuffixClass {
    name: "perfective_gerund",
    rules: &[
        SuffixRule::any("ив"),
        SuffixRule::any("ивши"),
        SuffixRule::any("ившись"),
        SuffixRule::any("ыв"),
        SuffixRule::any("ывши"),
        SuffixRule::any("ывшись"),
        SuffixRule::after_a("в"),
        SuffixRule::after_a("вши"),
        SuffixRule::after_a("вшись"),
    ],
};

pub static REFLEXIVE: SuffixClass = SuffixClass {
    name: "reflexive",
    rules: &[SuffixRule::any("ся"), SuffixRule::any("сь")],
};

pub static ADJECTIVE: SuffixClass = SuffixClass {
    name: "adjective",
    rules: &[
        SuffixRule::any("ее"),
        SuffixRule::any("ие"),
        SuffixRule::any("ые"),
        SuffixRule::any("ое"),
        SuffixRule::any("ими"),
        SuffixRule::any("ыми"),
        SuffixRule::any("ей"),
        SuffixRule::any("ий"),
        SuffixRule::any("ый"),
        SuffixRule::any("ой"),
        SuffixRule::any("ем"),
        SuffixRule::any("им"),
        SuffixRule::any("ым"),
        SuffixRule::any("ом"),
        SuffixRule::any("его"),
        SuffixRule::any("ого"),
        SuffixRule::any("еых"),
        SuffixRule::any("ую"),
        SuffixRule::any("юю"),
        SuffixRule::any("ая"),
        SuffixRule::any("яя"),
        SuffixRule::any("ою"),
        SuffixRule::any("ею"),
    ],
};

pub static PARTICIPLE: SuffixClass = SuffixClass {
    name: "participle",
    rules: &[
        SuffixRule::any("ивш"),
        SuffixRule::any("ывш"),
        SuffixRule::any("ующ"),
        SuffixRule::after_a("ем"),
        SuffixRule::after_a("нн"),
        SuffixRule::after_a("вш"),
        SuffixRule::after_a("ющ"),
        SuffixRule::after_a("щ"),
    ],
};

pub static VERB: SuffixClass = SuffixClass {
    name: "verb",
    rules: &[
        SuffixRule::any("ила"),
        SuffixRule::any("ыла"),
        SuffixRule::any("ена"),
        SuffixRule::any("ейте"),
        SuffixRule::any("уйте"),
        SuffixRule::any("ите"),
        SuffixRule::any("или"),
        SuffixRule::any("ыли"),
        SuffixRule::any("ей"),
        SuffixRule::any("уй"),
        SuffixRule::any("ил"),
        SuffixRule::any("ыл"),
        SuffixRule::any("им"),
        SuffixRule::any("ым"),
        SuffixRule::any("ены"),
        SuffixRule::any("ить"),
        SuffixRule::any("ыть"),
        SuffixRule::any("ишь"),
        SuffixRule::any("ую"),
        SuffixRule::any("ю"),
        SuffixRule::after_a("ла"),
        SuffixRule::after_a("на"),
        SuffixRule::after_a("ете"),
        SuffixRule::after_a("йте"),
        SuffixRule::after_a("ли"),
        SuffixRule::after_a("й"),
        SuffixRule::after_a("л"),
        SuffixRule::after_a("ем"),
        SuffixRule::after_a("н"),
        SuffixRule::after_a("ло"),
        SuffixRule::after_a("но"),
        SuffixRule::after_a("ет"),
        SuffixRule::after_a("ют"),
        SuffixRule::after_a("ны"),
        SuffixRule::after_a("ть"),
        SuffixRule::after_a("ешь"),
        SuffixRule::after_a("нно"),
    ],
};

pub static NOUN: SuffixClass = SuffixClass {
    name: "noun",
    rules: &[
        SuffixRule::any("а"),
        SuffixRule::any("ев"),
        SuffixRule::any("ов"),
        SuffixRule::any("ие"),
        SuffixRule::any("ье"),
        SuffixRule::any("е"),
        SuffixRule::any("иями"),
        SuffixRule::any("ями"),
        SuffixRule::any("ами"),
        SuffixRule::any("еи"),
        SuffixRule::any("ии"),
        SuffixRule::any("и"),
        SuffixRule::any("ией"),
        SuffixRule::any("ей"),
        SuffixRule::any("ой"),
        SuffixRule::any("ий"),
        SuffixRule::any("й"),
        SuffixRule::any("ы"),
        SuffixRule::any("ь"),
        SuffixRule::any("ию"),
        SuffixRule::any("ью"),
        SuffixRule::any("ю"),
        SuffixRule::any("ия"),
        SuffixRule::any("ья"),
        SuffixRule::any("я"),
    ],
};
