use serde::Serialize;

use super::acronym::{AcronymSet, Resolver};
use super::classify::{classify, CaseStyle};
use super::normalize::{normalize, CasePolicy};
use super::segment::{segment, Token};
use crate::error::Result;

/// Words of a parsed identifier together with what was learned about its
/// original form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedCase {
    pub words: Vec<String>,
    pub case: CaseStyle,
    /// First separator character of the input, empty when there was none.
    pub separator: String,
}

/// Split `text` into words, detect its case style and primary separator.
///
/// With a non-empty `acronyms` list, runs of capitals are split along those
/// acronyms and matching words are upper-cased; without one, each run of
/// capitals becomes a single word.
///
/// Words come back title-cased (acronyms upper-cased) unless
/// `preserve_case` is set, in which case they keep their original casing.
///
/// ```
/// use caseconv::case::{classify::CaseStyle, parser::parse};
///
/// let parsed = parse("helloHTMLWorld", &["HTML"], false).unwrap();
/// assert_eq!(parsed.words, ["Hello", "HTML", "World"]);
/// assert_eq!(parsed.case, CaseStyle::Camel);
/// assert_eq!(parsed.separator, "");
/// ```
pub fn parse(text: &str, acronyms: &[&str], preserve_case: bool) -> Result<ParsedCase> {
    let acronyms = AcronymSet::new(acronyms)?;
    let segmented = segment(text);

    let resolver = Resolver::for_set(&acronyms);
    tracing::trace!("Resolving capital runs of '{}' with {:?}", text, resolver);

    let words: Vec<String> = resolver
        .resolve(segmented.tokens)
        .into_iter()
        .filter_map(|token| match token {
            Token::Word(w) => Some(w),
            Token::Separator => None,
        })
        .collect();

    let case = classify(segmented.was_upper, &words, text);

    let policy = if preserve_case {
        CasePolicy::Preserve {
            was_upper: segmented.was_upper,
        }
    } else {
        CasePolicy::Canonical
    };
    let words = normalize(words, &acronyms, policy);

    tracing::debug!(
        "Parsed '{}' as {} with {} word(s), separator {:?}",
        text,
        case,
        words.len(),
        segmented.separator
    );

    Ok(ParsedCase {
        words,
        case,
        separator: segmented.separator,
    })
}
