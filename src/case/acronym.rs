use std::ops::Range;

use super::is_sep;
use super::is_single_upper;
use super::segment::Token;
use crate::error::{Error, Result};

// ─── Acronym Set ───────────────────────────────────────────────────────────

/// Caller-supplied acronyms, upper-cased, in the order given. Order matters:
/// when two acronyms overlap inside a capital run, the earlier one wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AcronymSet {
    entries: Vec<String>,
}

impl AcronymSet {
    /// Validate and upper-case `raw`. Fails on the first entry that is empty
    /// or contains a separator character.
    pub fn new<S: AsRef<str>>(raw: &[S]) -> Result<Self> {
        let mut entries = Vec::with_capacity(raw.len());
        for acronym in raw {
            let acronym = acronym.as_ref();
            if acronym.is_empty() || acronym.chars().any(is_sep) {
                return Err(Error::InvalidAcronym(acronym.to_string()));
            }
            entries.push(acronym.to_uppercase());
        }
        tracing::debug!("Accepted {} acronym(s): {:?}", entries.len(), entries);
        Ok(Self { entries })
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `word`, upper-cased, is one of the acronyms.
    pub fn contains(&self, word: &str) -> bool {
        let upper = word.to_uppercase();
        self.entries.iter().any(|a| *a == upper)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }
}

// ─── Resolver ──────────────────────────────────────────────────────────────

/// How a run of single capital letters is turned back into words.
#[derive(Debug, Clone, Copy)]
pub enum Resolver<'a> {
    /// Merge the whole run into one word. Only right when the run holds
    /// exactly one acronym: `"HTMLXML"` stays a single word.
    Simple,
    /// Split the run along the known acronyms; leftover letters become
    /// one-letter words.
    Advanced(&'a AcronymSet),
}

impl<'a> Resolver<'a> {
    pub fn for_set(acronyms: &'a AcronymSet) -> Self {
        if acronyms.is_empty() {
            Resolver::Simple
        } else {
            Resolver::Advanced(acronyms)
        }
    }

    /// Rebuild `tokens`, replacing every maximal run of one-capital-letter
    /// words with its resolved grouping. Separator markers end a run.
    pub fn resolve(&self, tokens: Vec<Token>) -> Vec<Token> {
        let mut out = Vec::with_capacity(tokens.len());
        let mut run: Vec<char> = Vec::new();

        for token in tokens {
            if let Some(letter) = token.as_word().and_then(is_single_upper) {
                run.push(letter);
                continue;
            }
            if !run.is_empty() {
                self.flush_run(&run, &mut out);
                run.clear();
            }
            out.push(token);
        }
        if !run.is_empty() {
            self.flush_run(&run, &mut out);
        }

        out
    }

    fn flush_run(&self, run: &[char], out: &mut Vec<Token>) {
        let first = out.len();
        let last = self.resolve_run(run, out);
        tracing::trace!(
            "Resolved capital run '{}' into words {}..={}",
            run.iter().collect::<String>(),
            first,
            last
        );
    }

    /// Push the grouping for `letters` onto `out` and return the index of the
    /// last word pushed. Callers that splice runs into a token list resume
    /// scanning after that index.
    #[must_use]
    pub(crate) fn resolve_run(&self, letters: &[char], out: &mut Vec<Token>) -> usize {
        match self {
            Resolver::Simple => {
                out.push(Token::Word(letters.iter().collect()));
            }
            Resolver::Advanced(acronyms) => {
                for range in split_run(letters, acronyms) {
                    out.push(Token::Word(letters[range].iter().collect()));
                }
            }
        }
        out.len() - 1
    }
}

/// Partition `letters` into non-overlapping ranges: accepted acronym
/// occurrences plus one-letter ranges for whatever is left, ordered by start.
///
/// Acronyms are tried in set order, occurrences left to right; an occurrence
/// that overlaps an already accepted one is dropped.
fn split_run(letters: &[char], acronyms: &AcronymSet) -> Vec<Range<usize>> {
    let mut ranges: Vec<Range<usize>> = Vec::new();
    let mut covered = vec![false; letters.len()];

    for acronym in acronyms.iter() {
        let needle: Vec<char> = acronym.chars().collect();
        for found in find_all(letters, &needle) {
            if ranges
                .iter()
                .any(|r| found.start < r.end && found.end > r.start)
            {
                continue;
            }
            covered[found.clone()].fill(true);
            ranges.push(found);
        }
    }

    ranges.extend(
        covered
            .iter()
            .enumerate()
            .filter(|&(_, &c)| !c)
            .map(|(i, _)| i..i + 1),
    );

    // Ranges are disjoint, so ordering by start is total.
    ranges.sort_by_key(|r| r.start);
    ranges
}

/// Every (possibly overlapping) occurrence of `needle` in `haystack`.
fn find_all(haystack: &[char], needle: &[char]) -> Vec<Range<usize>> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(start, _)| start..start + needle.len())
        .collect()
}
