use super::acronym::AcronymSet;
use super::{capitalize, is_all_upper};

/// How [`normalize`] treats the casing of each word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CasePolicy {
    /// Title-case ordinary words, upper-case known acronyms.
    Canonical,
    /// Keep words as found; an all-caps source is restored to upper-case.
    Preserve { was_upper: bool },
}

pub fn normalize(words: Vec<String>, acronyms: &AcronymSet, policy: CasePolicy) -> Vec<String> {
    match policy {
        CasePolicy::Preserve { was_upper: true } => {
            words.into_iter().map(|w| w.to_uppercase()).collect()
        }
        CasePolicy::Preserve { was_upper: false } => words,
        CasePolicy::Canonical => words
            .into_iter()
            .map(|w| {
                if acronyms.contains(&w) {
                    w.to_uppercase()
                } else if is_all_upper(&w) {
                    // unrecognized all-caps run
                    w
                } else {
                    capitalize(&w)
                }
            })
            .collect(),
    }
}
