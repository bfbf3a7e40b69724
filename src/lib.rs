//! Quote-aware field unescaping.
//!
//! A field is a mix of unquoted and quoted segments. Quote characters
//! toggle between the two and are dropped. Inside quotes, an escape
//! character followed by a quote or another escape yields that character
//! literally; any other escape is kept as is. Outside quotes nothing is
//! escaped.
//!
//! ```
//! use dequote::dequote;
//!
//! assert_eq!(dequote(r#"ab"c\"d"e"#), r#"abc"de"#);
//! assert_eq!(dequote(r"ab\cd"), r"ab\cd");
//! ```

pub mod fixtures;
pub mod parse;
pub mod types;
mod utils;

use crate::{
    parse::Segments,
    types::{Dequoted, Dialect, Error},
};
use log::{debug, trace};
use std::borrow::Cow;

/// Dequoting operations of a [`Dialect`].
pub trait Dequoter {
    /// Dequote `input`, tolerating an unterminated trailing quote.
    fn dequote<'a>(&self, input: &'a str) -> Cow<'a, str>;

    /// Like [`Dequoter::dequote`], but an unterminated quote is an error.
    fn dequote_strict<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, Error>;

    /// Dequote `input` and remember whether it was quoted at all.
    fn dequote_field<'a>(&self, input: &'a str) -> Dequoted<'a>;

    /// Quote `value` so that dequoting the result yields `value` again.
    fn enquote(&self, value: &str) -> String;
}

impl Dequoter for Dialect {
    fn dequote<'a>(&self, input: &'a str) -> Cow<'a, str> {
        let (value, unterminated) = unquote(*self, input);

        if let Some(offset) = unterminated {
            debug!("tolerating unterminated quote at byte {}", offset);
        }

        value
    }

    fn dequote_strict<'a>(&self, input: &'a str) -> Result<Cow<'a, str>, Error> {
        match unquote(*self, input) {
            (value, None) => Ok(value),
            (_, Some(offset)) => {
                debug!(
                    "rejecting unterminated quote at byte {} in {}",
                    offset,
                    escape(input)
                );
                Err(Error::UnterminatedQuote { offset })
            }
        }
    }

    fn dequote_field<'a>(&self, input: &'a str) -> Dequoted<'a> {
        Dequoted {
            value: self.dequote(input),
            quoted: input.contains(self.quote()),
        }
    }

    fn enquote(&self, value: &str) -> String {
        let escaped = utils::escape_quoted(*self, value);

        let mut quoted = String::with_capacity(escaped.len() + 2);
        quoted.push(self.quote());
        quoted.push_str(&escaped);
        quoted.push(self.quote());
        quoted
    }
}

/// Dequote with the default dialect (`"` quotes, `\` escapes).
pub fn dequote(input: &str) -> Cow<'_, str> {
    Dialect::default().dequote(input)
}

/// Dequote with the default dialect, rejecting an unterminated quote.
pub fn dequote_strict(input: &str) -> Result<Cow<'_, str>, Error> {
    Dialect::default().dequote_strict(input)
}

/// Quote with the default dialect.
pub fn enquote(value: &str) -> String {
    Dialect::default().enquote(value)
}

/// Returns the value and the offset of an unterminated opening quote.
fn unquote(dialect: Dialect, input: &str) -> (Cow<'_, str>, Option<usize>) {
    if !input.contains(dialect.quote()) {
        return (Cow::Borrowed(input), None);
    }

    let segments: Vec<_> = Segments::new(dialect, input).collect();

    let unterminated = segments
        .iter()
        .find(|(_, segment)| !segment.is_terminated())
        .map(|(offset, _)| *offset);

    // A lone quoted segment without escapes is a slice of the input.
    if let [(_, segment)] = segments.as_slice() {
        if let Some(value) = segment.as_borrowed() {
            return (Cow::Borrowed(value), unterminated);
        }
    }

    let mut value = String::with_capacity(input.len());
    for (_, segment) in &segments {
        segment.push_value(&mut value);
    }

    trace!("dequoted {} into {}", escape(input), escape(&value));

    (Cow::Owned(value), unterminated)
}

/// Render `text` with control characters, backslashes and non-ASCII
/// characters made visible.
pub fn escape(text: &str) -> String {
    text.chars()
        .map(|ch| match ch {
            '\t' => String::from("\\t"),
            '\n' => String::from("\\n"),
            '\r' => String::from("\\r"),
            '\\' => String::from("\\\\"),
            '\x00'..='\x1f' | '\x7f' => format!("\\x{:02x}", ch as u32),
            ' '..='~' => String::from(ch),
            _ => format!("\\u{{{:x}}}", ch as u32),
        })
        .collect::<Vec<String>>()
        .join("")
}
