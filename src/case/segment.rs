use super::{is_all_upper, is_sep, is_upper};

/// One piece of a segmented string: a word, or a marker standing in for a
/// run of separator characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    Word(String),
    Separator,
}

impl Token {
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(w) => Some(w),
            Token::Separator => None,
        }
    }
}

/// Output of [`segment`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segmented {
    pub tokens: Vec<Token>,
    /// First separator character found, or empty.
    pub separator: String,
    /// Whether the input was entirely upper-case (and was lowered before
    /// splitting).
    pub was_upper: bool,
}

/// Split `text` at case and separator boundaries.
///
/// A boundary sits before every upper-case letter and wherever the input
/// switches between separator and non-separator characters. Separator runs
/// become [`Token::Separator`] markers so that `AAA_BBB` keeps its two
/// upper-case runs apart during acronym detection.
///
/// An all-caps input is lowered first, otherwise each of its letters would
/// open a word of its own.
pub fn segment(text: &str) -> Segmented {
    let was_upper = is_all_upper(text);
    let chars: Vec<char> = if was_upper {
        text.to_lowercase().chars().collect()
    } else {
        text.chars().collect()
    };

    let mut tokens = Vec::new();
    let mut separator = String::new();
    let mut start = 0;

    // Position 0 is never a boundary; the extra step at `chars.len()` flushes
    // the trailing run.
    for i in 1..=chars.len() {
        let prev = chars[i - 1];
        let split = match chars.get(i) {
            Some(&ch) => is_upper(ch) || is_sep(ch) != is_sep(prev),
            None => true,
        };
        if !split {
            continue;
        }

        if is_sep(prev) {
            if separator.is_empty() {
                separator.push(chars[start]);
            }
            tokens.push(Token::Separator);
        } else {
            tokens.push(Token::Word(chars[start..i].iter().collect()));
        }
        start = i;
    }

    Segmented {
        tokens,
        separator,
        was_upper,
    }
}
