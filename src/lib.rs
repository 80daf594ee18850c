//! Convert identifiers between naming conventions, keeping known acronyms
//! together as upper-case words.
//!
//! ```
//! use caseconv::{camel, snake};
//!
//! assert_eq!(camel("HELLO_HTML_WORLD", &["HTML"]).unwrap(), "helloHTMLWorld");
//! assert_eq!(snake("HelloHTMLWorld", &["HTML"]).unwrap(), "hello_html_world");
//! ```

pub mod case;
pub mod config;
pub mod convert;
pub mod error;

pub use case::classify::CaseStyle;
pub use case::parser::{parse, ParsedCase};
pub use convert::{
    ada, backslash, camel, capital, const_case, dash, dot, http_header, lower, pascal,
    separate_words, slash, snake, title, upper, Style, UnknownStyle,
};
pub use error::{Error, Result};
