//! Reference cases for the default dialect (`"` quotes, `\` escapes).
//!
//! In `expected`, the token [`QUOTE_TOKEN`] stands for a literal quote
//! character; use [`Fixture::expected_output`] to get the real string.

use crate::types::Dialect;
use std::borrow::Cow;

pub const QUOTE_TOKEN: &str = "{quote}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Fixture {
    pub input: &'static str,
    pub expected: &'static str,
    pub description: &'static str,
}

impl Fixture {
    pub const fn new(
        input: &'static str,
        expected: &'static str,
        description: &'static str,
    ) -> Self {
        Self {
            input,
            expected,
            description,
        }
    }

    /// `expected` with every [`QUOTE_TOKEN`] replaced by the default quote.
    pub fn expected_output(&self) -> Cow<'static, str> {
        self.expected_output_with(Dialect::default().quote())
    }

    pub fn expected_output_with(&self, quote: char) -> Cow<'static, str> {
        if self.expected.contains(QUOTE_TOKEN) {
            Cow::Owned(self.expected.replace(QUOTE_TOKEN, &quote.to_string()))
        } else {
            Cow::Borrowed(self.expected)
        }
    }
}

pub static FIXTURES: &[Fixture] = &[
    // not in quote
    Fixture::new("abcd", "abcd", "simple"),
    Fixture::new(
        r#"ab"c"d"#,
        "abcd",
        "quoted string in the midst of unquoted string",
    ),
    Fixture::new(
        r#"ab""c""d"#,
        "abcd",
        "two quoted strings in the midst of unquoted string",
    ),
    Fixture::new(r"ab\cd", r"ab\cd", "escape is ignored when not in quotes"),
    Fixture::new(r"ab\\cd", r"ab\\cd", "escape is ignored when not in quotes"),
    Fixture::new(r#"ab\"cd""#, r"ab\cd", "escape is ignored when not in quotes"),
    // in quote
    Fixture::new(r#""abcd""#, "abcd", "simple quoted string"),
    Fixture::new(r#""ab\"cd""#, "ab{quote}cd", "the quote is escaped"),
    Fixture::new(r#""ab\\cd""#, r"ab\cd", "the backslash is escaped"),
    Fixture::new(
        r#""ab\cd""#,
        r"ab\cd",
        "escape is ignored because c is neither backslash or quote",
    ),
    Fixture::new(
        r#""ab""cd""#,
        "abcd",
        "inquote, out of quote, back in quote",
    ),
    Fixture::new(
        r#""ab"-"cd""#,
        "ab-cd",
        "inquote, out of quote, back in quote",
    ),
];
