use std::fmt;

use serde::{Deserialize, Serialize};

use super::{is_all_lower, is_all_upper, is_title};

/// Casing pattern of the original input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseStyle {
    /// No words at all.
    #[default]
    Unknown,
    /// Every letter upper-case.
    Upper,
    /// Every letter lower-case.
    Lower,
    /// First word lower-case, the rest title- or upper-case.
    Camel,
    /// Every word title- or upper-case.
    Pascal,
    /// Anything else.
    Mixed,
}

impl CaseStyle {
    pub fn as_str(self) -> &'static str {
        match self {
            CaseStyle::Unknown => "unknown",
            CaseStyle::Upper => "upper",
            CaseStyle::Lower => "lower",
            CaseStyle::Camel => "camel",
            CaseStyle::Pascal => "pascal",
            CaseStyle::Mixed => "mixed",
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn is_titled(word: &str) -> bool {
    is_title(word) || is_all_upper(word)
}

/// Classify the casing of `original` from its resolved `words`.
///
/// Camel and Pascal do not imply the absence of separators: `foo_Bar` is
/// Camel, `Foo Bar` is Pascal.
pub fn classify(was_upper: bool, words: &[String], original: &str) -> CaseStyle {
    if was_upper {
        return CaseStyle::Upper;
    }
    if is_all_lower(original) {
        return CaseStyle::Lower;
    }
    let Some((first, rest)) = words.split_first() else {
        return CaseStyle::Unknown;
    };

    let mut camel = is_all_lower(first);
    let mut pascal = is_titled(first);
    for word in rest {
        if !camel && !pascal {
            break;
        }
        let titled = is_titled(word);
        camel &= titled;
        pascal &= titled;
    }

    if camel {
        CaseStyle::Camel
    } else if pascal {
        CaseStyle::Pascal
    } else {
        CaseStyle::Mixed
    }
}
