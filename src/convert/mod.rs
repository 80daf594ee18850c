//! One conversion per target style, all built on [`parse`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::case::parser::parse;
use crate::case::{capitalize, title as title_words};
use crate::error::Result;

// ─── Styles ────────────────────────────────────────────────────────────────

/// Target naming convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Style {
    Camel,
    Pascal,
    Snake,
    Dash,
    Const,
    Dot,
    Ada,
    HttpHeader,
    SeparateWords,
    Slash,
    Backslash,
    Lower,
    Upper,
    Title,
    Capital,
}

/// Alternate names, keyed by their compact form (see [`compact_name`]).
const ALIASES: &[(&str, Style)] = &[
    ("camel", Style::Camel),
    ("lowercamel", Style::Camel),
    ("pascal", Style::Pascal),
    ("mixed", Style::Pascal),
    ("uppercamel", Style::Pascal),
    ("snake", Style::Snake),
    ("underscore", Style::Snake),
    ("dash", Style::Dash),
    ("kebab", Style::Dash),
    ("spinal", Style::Dash),
    ("slug", Style::Dash),
    ("hyphen", Style::Dash),
    ("const", Style::Const),
    ("constant", Style::Const),
    ("screamingsnake", Style::Const),
    ("dot", Style::Dot),
    ("dotted", Style::Dot),
    ("ada", Style::Ada),
    ("camelsnake", Style::Ada),
    ("httpheader", Style::HttpHeader),
    ("header", Style::HttpHeader),
    ("train", Style::HttpHeader),
    ("separatewords", Style::SeparateWords),
    ("separate", Style::SeparateWords),
    ("words", Style::SeparateWords),
    ("space", Style::SeparateWords),
    ("slash", Style::Slash),
    ("backslash", Style::Backslash),
    ("lower", Style::Lower),
    ("upper", Style::Upper),
    ("title", Style::Title),
    ("capital", Style::Capital),
];

/// Lower-case `name`, drop `-`, `_` and spaces, and strip a trailing `case`,
/// so `"kebab-case"`, `"Kebab"` and `"KEBAB_CASE"` all read `"kebab"`.
fn compact_name(name: &str) -> String {
    let compact: String = name
        .chars()
        .filter(|c| !matches!(c, '-' | '_' | ' '))
        .flat_map(char::to_lowercase)
        .collect();
    match compact.strip_suffix("case") {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => compact,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown case style '{0}'")]
pub struct UnknownStyle(pub String);

impl Style {
    pub const ALL: [Style; 15] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Dash,
        Style::Const,
        Style::Dot,
        Style::Ada,
        Style::HttpHeader,
        Style::SeparateWords,
        Style::Slash,
        Style::Backslash,
        Style::Lower,
        Style::Upper,
        Style::Title,
        Style::Capital,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Style::Camel => "camel",
            Style::Pascal => "pascal",
            Style::Snake => "snake",
            Style::Dash => "dash",
            Style::Const => "const",
            Style::Dot => "dot",
            Style::Ada => "ada",
            Style::HttpHeader => "http_header",
            Style::SeparateWords => "separate_words",
            Style::Slash => "slash",
            Style::Backslash => "backslash",
            Style::Lower => "lower",
            Style::Upper => "upper",
            Style::Title => "title",
            Style::Capital => "capital",
        }
    }

    /// Every name [`Style::from_str`] maps to this style, in compact form.
    pub fn aliases(self) -> impl Iterator<Item = &'static str> {
        ALIASES
            .iter()
            .filter(move |(_, style)| *style == self)
            .map(|(alias, _)| *alias)
    }

    fn rule(self) -> Option<Rule> {
        let rule = |separator, word_case| Rule {
            separator,
            word_case,
            lower_first: false,
            preserve_case: false,
        };
        Some(match self {
            Style::Camel => Rule {
                lower_first: true,
                ..rule("", WordCase::Keep)
            },
            Style::Pascal => rule("", WordCase::Keep),
            Style::Snake => rule("_", WordCase::Lower),
            Style::Dash => rule("-", WordCase::Lower),
            Style::Const => rule("_", WordCase::Upper),
            Style::Dot => rule(".", WordCase::Lower),
            Style::Ada => rule("_", WordCase::Capitalize),
            Style::HttpHeader => rule("-", WordCase::Capitalize),
            Style::SeparateWords => Rule {
                preserve_case: true,
                ..rule(" ", WordCase::Keep)
            },
            Style::Slash => Rule {
                preserve_case: true,
                ..rule("/", WordCase::Keep)
            },
            Style::Backslash => Rule {
                preserve_case: true,
                ..rule("\\", WordCase::Keep)
            },
            Style::Lower | Style::Upper | Style::Title | Style::Capital => return None,
        })
    }

    /// Convert `text` to this style. Only fails on an invalid acronym; the
    /// whole-string styles ignore `acronyms` and never fail.
    pub fn convert(self, text: &str, acronyms: &[&str]) -> Result<String> {
        match self.rule() {
            Some(rule) => rule.apply(text, acronyms),
            None => Ok(self.transform_whole(text)),
        }
    }

    fn transform_whole(self, text: &str) -> String {
        match self {
            Style::Upper => text.to_uppercase(),
            Style::Title => title_words(text),
            Style::Capital => capitalize(text),
            // Style::Lower
            _ => text.to_lowercase(),
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Style {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let key = compact_name(s);
        ALIASES
            .iter()
            .find(|(alias, _)| *alias == key)
            .map(|(_, style)| *style)
            .ok_or_else(|| UnknownStyle(s.to_string()))
    }
}

impl TryFrom<String> for Style {
    type Error = UnknownStyle;

    fn try_from(s: String) -> std::result::Result<Self, Self::Error> {
        s.parse()
    }
}

// ─── Join Rules ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WordCase {
    Keep,
    Lower,
    Upper,
    Capitalize,
}

impl WordCase {
    fn apply(self, word: String) -> String {
        match self {
            WordCase::Keep => word,
            WordCase::Lower => word.to_lowercase(),
            WordCase::Upper => word.to_uppercase(),
            WordCase::Capitalize => capitalize(&word),
        }
    }
}

/// How parsed words are joined back into a string.
#[derive(Debug, Clone, Copy)]
struct Rule {
    separator: &'static str,
    word_case: WordCase,
    /// camelCase: the first word is lower-cased after `word_case`.
    lower_first: bool,
    preserve_case: bool,
}

impl Rule {
    fn apply(self, text: &str, acronyms: &[&str]) -> Result<String> {
        let parsed = parse(text, acronyms, self.preserve_case)?;
        let mut words: Vec<String> = parsed
            .words
            .into_iter()
            .map(|w| self.word_case.apply(w))
            .collect();
        if self.lower_first {
            if let Some(first) = words.first_mut() {
                *first = first.to_lowercase();
            }
        }
        Ok(words.join(self.separator))
    }
}

// ─── Public Conversions ────────────────────────────────────────────────────

/// `camelCase`: `camel("HELLO_HTML_WORLD", &["HTML"])` → `"helloHTMLWorld"`.
pub fn camel(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Camel.convert(text, acronyms)
}

/// `PascalCase`, also known as MixedCase.
pub fn pascal(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Pascal.convert(text, acronyms)
}

/// `snake_case`: `snake("HelloHTMLWorld", &["HTML"])` → `"hello_html_world"`.
pub fn snake(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Snake.convert(text, acronyms)
}

/// `dash-case`, also known as kebab-case, spinal-case and slug-case.
pub fn dash(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Dash.convert(text, acronyms)
}

/// `CONST_CASE`, also known as SCREAMING_SNAKE_CASE.
pub fn const_case(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Const.convert(text, acronyms)
}

/// `dot.case`.
pub fn dot(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Dot.convert(text, acronyms)
}

/// `Ada_Case`, also known as Camel_Snake.
pub fn ada(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Ada.convert(text, acronyms)
}

/// `Http-Header-Case`.
pub fn http_header(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::HttpHeader.convert(text, acronyms)
}

/// Space-separated words, keeping each word's casing:
/// `separate_words("helloHTMLWorld", &["HTML"])` → `"hello HTML World"`.
pub fn separate_words(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::SeparateWords.convert(text, acronyms)
}

/// `slash/case`, keeping each word's casing.
pub fn slash(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Slash.convert(text, acronyms)
}

/// `backslash\case`, keeping each word's casing.
pub fn backslash(text: &str, acronyms: &[&str]) -> Result<String> {
    Style::Backslash.convert(text, acronyms)
}

/// Whole-string lower-case; acronyms are ignored.
pub fn lower(text: &str, _acronyms: &[&str]) -> String {
    Style::Lower.transform_whole(text)
}

/// Whole-string upper-case; acronyms are ignored.
pub fn upper(text: &str, _acronyms: &[&str]) -> String {
    Style::Upper.transform_whole(text)
}

/// Capitalize every cased run: `"hello_world"` → `"Hello_World"`.
pub fn title(text: &str, _acronyms: &[&str]) -> String {
    Style::Title.transform_whole(text)
}

/// First character upper-case, the rest lower-case.
pub fn capital(text: &str, _acronyms: &[&str]) -> String {
    Style::Capital.transform_whole(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;

    const CANONICAL: [Style; 8] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Dash,
        Style::Const,
        Style::Dot,
        Style::Ada,
        Style::HttpHeader,
    ];

    const PRESERVING: [Style; 3] = [Style::SeparateWords, Style::Slash, Style::Backslash];

    /// The same identifier written in each style, `[camel, pascal, snake,
    /// dash, const, dot, separate_words, slash, backslash]`.
    struct Sample([&'static str; 9]);

    const SOURCE_STYLES: [Style; 9] = [
        Style::Camel,
        Style::Pascal,
        Style::Snake,
        Style::Dash,
        Style::Const,
        Style::Dot,
        Style::SeparateWords,
        Style::Slash,
        Style::Backslash,
    ];

    impl Sample {
        fn get(&self, style: Style) -> &'static str {
            let i = SOURCE_STYLES
                .iter()
                .position(|s| *s == style)
                .unwrap_or_else(|| panic!("no sample for {style}"));
            self.0[i]
        }

        fn sources(&self) -> impl Iterator<Item = (Style, &'static str)> + '_ {
            SOURCE_STYLES.iter().copied().zip(self.0.iter().copied())
        }
    }

    const PLAIN: Sample = Sample([
        "fooBarString",
        "FooBarString",
        "foo_bar_string",
        "foo-bar-string",
        "FOO_BAR_STRING",
        "foo.bar.string",
        "foo bar string",
        "foo/bar/string",
        "foo\\bar\\string",
    ]);

    const PLAIN_UNICODE: Sample = Sample([
        "fóoBarString",
        "FóoBarString",
        "fóo_bar_string",
        "fóo-bar-string",
        "FÓO_BAR_STRING",
        "fóo.bar.string",
        "fóo bar string",
        "fóo/bar/string",
        "fóo\\bar\\string",
    ]);

    const SINGLE: Sample = Sample([
        "foo", "Foo", "foo", "foo", "FOO", "foo", "foo", "foo", "foo",
    ]);

    const SINGLE_UNICODE: Sample = Sample([
        "fóo", "Fóo", "fóo", "fóo", "FÓO", "fóo", "fóo", "fóo", "fóo",
    ]);

    const ACRONYM: Sample = Sample([
        "fooHTTPBarString",
        "FooHTTPBarString",
        "foo_http_bar_string",
        "foo-http-bar-string",
        "FOO_HTTP_BAR_STRING",
        "foo.http.bar.string",
        "foo http bar string",
        "foo/http/bar/string",
        "foo\\http\\bar\\string",
    ]);

    const ACRONYM_UNICODE: Sample = Sample([
        "fooHÉÉPBarString",
        "FooHÉÉPBarString",
        "foo_héép_bar_string",
        "foo-héép-bar-string",
        "FOO_HÉÉP_BAR_STRING",
        "foo.héép.bar.string",
        "foo héép bar string",
        "foo/héép/bar/string",
        "foo\\héép\\bar\\string",
    ]);

    /// The case-preserving forms of a sample, space-separated:
    /// `[from camel, from pascal, from const, from anything else]`.
    struct Preserved([&'static str; 4]);

    const PLAIN_PRESERVED: Preserved = Preserved([
        "foo Bar String",
        "Foo Bar String",
        "FOO BAR STRING",
        "foo bar string",
    ]);

    const PLAIN_UNICODE_PRESERVED: Preserved = Preserved([
        "fóo Bar String",
        "Fóo Bar String",
        "FÓO BAR STRING",
        "fóo bar string",
    ]);

    const SINGLE_PRESERVED: Preserved = Preserved(["foo", "Foo", "FOO", "foo"]);

    const SINGLE_UNICODE_PRESERVED: Preserved = Preserved(["fóo", "Fóo", "FÓO", "fóo"]);

    const ACRONYM_PRESERVED: Preserved = Preserved([
        "foo HTTP Bar String",
        "Foo HTTP Bar String",
        "FOO HTTP BAR STRING",
        "foo http bar string",
    ]);

    const ACRONYM_UNICODE_PRESERVED: Preserved = Preserved([
        "foo HÉÉP Bar String",
        "Foo HÉÉP Bar String",
        "FOO HÉÉP BAR STRING",
        "foo héép bar string",
    ]);

    /// Every source spelling converts to the target's own spelling.
    fn check_canonical(sample: &Sample, acronyms: &[&str]) {
        for target in &SOURCE_STYLES[..6] {
            for (source, value) in sample.sources() {
                assert_eq!(
                    target.convert(value, acronyms).unwrap(),
                    sample.get(*target),
                    "{source} -> {target}: {value:?}"
                );
            }
            assert_eq!(target.convert("", acronyms).unwrap(), "");
        }
    }

    fn check_preserving(sample: &Sample, preserved: &Preserved, acronyms: &[&str]) {
        for target in PRESERVING {
            let sep = match target {
                Style::SeparateWords => " ",
                Style::Slash => "/",
                _ => "\\",
            };
            for (source, value) in sample.sources() {
                let spaced = match source {
                    Style::Camel => preserved.0[0],
                    Style::Pascal => preserved.0[1],
                    Style::Const => preserved.0[2],
                    _ => preserved.0[3],
                };
                assert_eq!(
                    target.convert(value, acronyms).unwrap(),
                    spaced.replace(' ', sep),
                    "{source} -> {target}: {value:?}"
                );
            }
            assert_eq!(target.convert("", acronyms).unwrap(), "");
        }
    }

    #[test]
    fn test_canonical_matrix() {
        check_canonical(&PLAIN, &[]);
        check_canonical(&PLAIN_UNICODE, &[]);
        check_canonical(&SINGLE, &[]);
        check_canonical(&SINGLE_UNICODE, &[]);
        check_canonical(&ACRONYM, &["HTTP"]);
        check_canonical(&ACRONYM_UNICODE, &["HÉÉP"]);
    }

    #[test]
    fn test_preserving_matrix() {
        check_preserving(&PLAIN, &PLAIN_PRESERVED, &[]);
        check_preserving(&PLAIN_UNICODE, &PLAIN_UNICODE_PRESERVED, &[]);
        check_preserving(&SINGLE, &SINGLE_PRESERVED, &[]);
        check_preserving(&SINGLE_UNICODE, &SINGLE_UNICODE_PRESERVED, &[]);
        check_preserving(&ACRONYM, &ACRONYM_PRESERVED, &["HTTP"]);
        check_preserving(&ACRONYM_UNICODE, &ACRONYM_UNICODE_PRESERVED, &["HÉÉP"]);
    }

    #[test]
    fn test_preserving_explicit() {
        assert_eq!(separate_words("fooBarString", &[]).unwrap(), "foo Bar String");
        assert_eq!(slash("FooBarString", &[]).unwrap(), "Foo/Bar/String");
        assert_eq!(backslash("FOO_BAR_STRING", &[]).unwrap(), "FOO\\BAR\\STRING");
        assert_eq!(
            separate_words("fooHTTPBarString", &["HTTP"]).unwrap(),
            "foo HTTP Bar String"
        );
        assert_eq!(
            slash("FOO_HÉÉP_BAR_STRING", &["HÉÉP"]).unwrap(),
            "FOO/HÉÉP/BAR/STRING"
        );
        assert_eq!(separate_words("HELLO_WORLD", &[]).unwrap(), "HELLO WORLD");
        assert_eq!(
            separate_words("helloHTMLWorld", &["HTML"]).unwrap(),
            "hello HTML World"
        );
    }

    #[test]
    fn test_documented_examples() {
        assert_eq!(camel("hello world", &[]).unwrap(), "helloWorld");
        assert_eq!(camel("HELLO_HTML_WORLD", &["HTML"]).unwrap(), "helloHTMLWorld");
        assert_eq!(pascal("HELLO_HTML_WORLD", &["HTML"]).unwrap(), "HelloHTMLWorld");
        assert_eq!(snake("HelloHTMLWorld", &["HTML"]).unwrap(), "hello_html_world");
        assert_eq!(dash("HelloHTMLWorld", &["HTML"]).unwrap(), "hello-html-world");
        assert_eq!(const_case("helloHTMLWorld", &["HTML"]).unwrap(), "HELLO_HTML_WORLD");
        assert_eq!(dot("helloHTMLWorld", &["HTML"]).unwrap(), "hello.html.world");
        assert_eq!(ada("hello_world", &[]).unwrap(), "Hello_World");
        assert_eq!(http_header("hello_world", &[]).unwrap(), "Hello-World");
    }

    #[test]
    fn test_ada_and_header_capitalize_every_word() {
        assert_eq!(ada("helloHTMLWorld", &["HTML"]).unwrap(), "Hello_Html_World");
        assert_eq!(http_header("content_type", &[]).unwrap(), "Content-Type");
        assert_eq!(http_header("X_FORWARDED_FOR", &[]).unwrap(), "X-Forwarded-For");
    }

    #[test]
    fn test_without_acronyms_runs_merge() {
        assert_eq!(snake("HelloHTMLWorld", &[]).unwrap(), "hello_html_world");
        assert_eq!(camel("getHTTPResponseCode", &[]).unwrap(), "getHTTPResponseCode");
        assert_eq!(snake("parseHTMLXML", &[]).unwrap(), "parse_htmlxml");
        assert_eq!(snake("parseHTMLXML", &["HTML", "XML"]).unwrap(), "parse_html_xml");
    }

    #[test]
    fn test_non_word_characters_split() {
        assert_eq!(snake("fooⅫbar", &[]).unwrap(), "foo_bar");
        assert_eq!(snake("x²y", &[]).unwrap(), "x_y");
        assert_eq!(separate_words("fooⒶbar", &[]).unwrap(), "foo bar");
        assert_eq!(parse("fooⅫbar", &[], false).unwrap().separator, "Ⅻ");
    }

    #[test]
    fn test_whole_string_transforms() {
        assert_eq!(lower("HELLO_WORLD", &[]), "hello_world");
        assert_eq!(upper("hello_world", &["HTML"]), "HELLO_WORLD");
        assert_eq!(title("hello_world", &[]), "Hello_World");
        assert_eq!(capital("hello_World", &[]), "Hello_world");
        for style in [Style::Lower, Style::Upper, Style::Title, Style::Capital] {
            assert_eq!(style.convert("", &["BAD-ONE"]).unwrap(), "");
        }
    }

    #[test]
    fn test_every_style_maps_empty_to_empty() {
        for style in Style::ALL {
            assert_eq!(style.convert("", &[]).unwrap(), "", "{style}");
        }
    }

    #[test]
    fn test_invalid_acronym_propagates() {
        assert_eq!(
            snake("fooBar", &["HT-TP"]),
            Err(Error::InvalidAcronym("HT-TP".into()))
        );
    }

    #[test]
    fn test_style_aliases() {
        for (name, style) in [
            ("kebab", Style::Dash),
            ("kebab-case", Style::Dash),
            ("spinal", Style::Dash),
            ("slug", Style::Dash),
            ("SCREAMING_SNAKE_CASE", Style::Const),
            ("const", Style::Const),
            ("camelCase", Style::Camel),
            ("PascalCase", Style::Pascal),
            ("mixed", Style::Pascal),
            ("Camel_Snake", Style::Ada),
            ("Http-Header-Case", Style::HttpHeader),
            ("separate_words", Style::SeparateWords),
            ("UPPERCASE", Style::Upper),
        ] {
            assert_eq!(name.parse::<Style>(), Ok(style), "{name}");
        }
        assert_eq!("case".parse::<Style>(), Err(UnknownStyle("case".into())));
        assert_eq!("wavy".parse::<Style>(), Err(UnknownStyle("wavy".into())));
    }

    #[test]
    fn test_every_style_resolves_by_name() {
        for style in Style::ALL {
            assert_eq!(style.name().parse::<Style>(), Ok(style));
            assert!(style.aliases().count() >= 1);
        }
    }

    #[test]
    fn test_style_serde() {
        assert_eq!(serde_json::to_string(&Style::HttpHeader).unwrap(), "\"http_header\"");
        let style: Style = serde_json::from_str("\"kebab-case\"").unwrap();
        assert_eq!(style, Style::Dash);
        assert!(serde_json::from_str::<Style>("\"wavy\"").is_err());
    }

    mod properties {
        use super::CANONICAL;
        use crate::convert::Style;
        use proptest::prelude::*;

        /// Identifier-shaped input: letter-only words of two or more characters,
        /// each lower, Title or UPPER, joined by `_`, ` ` or `-`.
        fn identifier() -> impl Strategy<Value = String> {
            let word = ("[a-z]{2,8}", 0..3u8).prop_map(|(w, shape)| match shape {
                0 => w,
                1 => crate::case::capitalize(&w),
                _ => w.to_uppercase(),
            });
            let sep = prop::sample::select(vec!["_", " ", "-"]);
            (word.clone(), prop::collection::vec((sep, word), 0..4)).prop_map(|(first, rest)| {
                rest.into_iter().fold(first, |mut out, (sep, w)| {
                    out.push_str(sep);
                    out.push_str(&w);
                    out
                })
            })
        }

        proptest! {
            #[test]
            fn test_separated_styles_idempotent(text in "[a-zA-Z0-9_ -]{0,24}") {
                for style in [
                    Style::Snake,
                    Style::Dash,
                    Style::Const,
                    Style::Dot,
                    Style::Ada,
                    Style::HttpHeader,
                ] {
                    let once = style.convert(&text, &[]).unwrap();
                    let twice = style.convert(&once, &[]).unwrap();
                    prop_assert_eq!(&once, &twice, "{} of {:?}", style, text);
                }
            }

            #[test]
            fn test_camel_pascal_idempotent(text in identifier()) {
                for style in [Style::Camel, Style::Pascal] {
                    let once = style.convert(&text, &[]).unwrap();
                    let twice = style.convert(&once, &[]).unwrap();
                    prop_assert_eq!(&once, &twice, "{} of {:?}", style, text);
                }
            }

            #[test]
            fn test_canonical_round_trip(words in prop::collection::vec("[a-z]{2,8}", 1..5)) {
                let source = words.join("_");
                for a in CANONICAL {
                    let original = a.convert(&source, &[]).unwrap();
                    for b in CANONICAL {
                        let there = b.convert(&original, &[]).unwrap();
                        let back = a.convert(&there, &[]).unwrap();
                        prop_assert_eq!(&back, &original, "{} -> {} -> {}", a, b, a);
                    }
                }
            }
        }
    }
}
