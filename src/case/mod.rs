pub mod acronym;
pub mod classify;
pub mod normalize;
pub mod parser;
pub mod segment;

use unicode_general_category::{get_general_category, GeneralCategory};

// ─── Character Classes ─────────────────────────────────────────────────────

/// Coarse Unicode category of a single character, as far as word splitting
/// is concerned. Only `Lu`, `Ll` and `Nd` code points are word characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digit,
    /// Every other category: punctuation, symbols, spaces, but also letter
    /// numbers like `Ⅻ`, superscripts, modifier and titlecase letters.
    Separator,
}

impl CharClass {
    pub fn of(ch: char) -> Self {
        match get_general_category(ch) {
            GeneralCategory::UppercaseLetter => CharClass::Upper,
            GeneralCategory::LowercaseLetter => CharClass::Lower,
            GeneralCategory::DecimalNumber => CharClass::Digit,
            _ => CharClass::Separator,
        }
    }
}

pub fn is_sep(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Separator
}

pub fn is_upper(ch: char) -> bool {
    CharClass::of(ch) == CharClass::Upper
}

/// The letter of a word made of exactly one upper-case letter, the building
/// block of an acronym run.
pub fn is_single_upper(word: &str) -> Option<char> {
    let mut chars = word.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) if is_upper(ch) => Some(ch),
        _ => None,
    }
}

// ─── String Predicates ─────────────────────────────────────────────────────

fn is_cased(ch: char) -> bool {
    ch.is_uppercase() || ch.is_lowercase()
}

/// At least one cased character and no lower-case ones. `"FOO_1"` is upper,
/// `"_1"` is not.
pub fn is_all_upper(s: &str) -> bool {
    s.chars().any(is_cased) && !s.chars().any(char::is_lowercase)
}

/// At least one cased character and no upper-case ones.
pub fn is_all_lower(s: &str) -> bool {
    s.chars().any(is_cased) && !s.chars().any(char::is_uppercase)
}

/// Title-cased: upper-case letters only start a cased run, lower-case letters
/// only continue one. `"Foo"` and `"Foo1"` qualify, `"FOo"` and `"foo"` don't.
pub fn is_title(s: &str) -> bool {
    let mut prev_cased = false;
    let mut seen_cased = false;
    for ch in s.chars() {
        if ch.is_uppercase() {
            if prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else if ch.is_lowercase() {
            if !prev_cased {
                return false;
            }
            prev_cased = true;
            seen_cased = true;
        } else {
            prev_cased = false;
        }
    }
    seen_cased
}

/// First character upper-cased, the rest lower-cased.
pub fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Capitalize every cased run of the string: `"hello_world"` → `"Hello_World"`.
pub fn title(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_cased = false;
    for ch in s.chars() {
        if prev_cased {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        prev_cased = is_cased(ch);
    }
    out
}
