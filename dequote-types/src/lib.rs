//! Misuse-resistant types describing how a field is quoted.
//!
//! A [`Dialect`] can only be constructed from characters that are safe to
//! use as quote or escape markers, so every consumer may assume both are
//! visible ASCII punctuation.

use abnf_core::streaming::{is_ALPHA, is_DIGIT, is_VCHAR};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid quote character {0:?}, expected visible ASCII punctuation")]
    InvalidQuote(char),
    #[error("invalid escape character {0:?}, expected visible ASCII punctuation")]
    InvalidEscape(char),
    #[error("unterminated quote starting at byte {offset}")]
    UnterminatedQuote { offset: usize },
}

/// Visible ASCII excl. ALPHA and DIGIT
///
/// marker = %d33-47 / %d58-64 / %d91-96 / %d123-126
pub fn is_marker(ch: char) -> bool {
    if !ch.is_ascii() {
        return false;
    }

    let byte = ch as u8;
    is_VCHAR(byte) && !is_ALPHA(byte) && !is_DIGIT(byte)
}

/// The pair of characters that delimit and escape quoted segments.
///
/// When `escape == quote` the dialect is "doubled": inside quotes, two
/// consecutive quote characters stand for one literal quote.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDialect"))]
pub struct Dialect {
    quote: char,
    escape: char,
}

impl Dialect {
    pub fn new(quote: char, escape: char) -> Result<Self, Error> {
        if !is_marker(quote) {
            return Err(Error::InvalidQuote(quote));
        }

        if !is_marker(escape) {
            return Err(Error::InvalidEscape(escape));
        }

        Ok(Self { quote, escape })
    }

    /// Double-quote delimited, double-quote escaped (`"a""b"` is `a"b`).
    pub const fn csv() -> Self {
        Self {
            quote: '"',
            escape: '"',
        }
    }

    pub fn with_quote(self, quote: char) -> Result<Self, Error> {
        Self::new(quote, self.escape)
    }

    pub fn with_escape(self, escape: char) -> Result<Self, Error> {
        Self::new(self.quote, escape)
    }

    pub const fn quote(&self) -> char {
        self.quote
    }

    pub const fn escape(&self) -> char {
        self.escape
    }

    pub const fn is_doubled(&self) -> bool {
        self.quote == self.escape
    }

    pub fn is_special(&self, ch: char) -> bool {
        ch == self.quote || ch == self.escape
    }
}

/// Double-quote delimited, backslash escaped.
impl Default for Dialect {
    fn default() -> Self {
        Self {
            quote: '"',
            escape: '\\',
        }
    }
}

impl fmt::Debug for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Dialect(quote={:?}, escape={:?})", self.quote, self.escape)
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDialect {
    quote: char,
    escape: char,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDialect> for Dialect {
    type Error = Error;

    fn try_from(raw: RawDialect) -> Result<Self, Self::Error> {
        Dialect::new(raw.quote, raw.escape)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_dialect() {
        let dialect = Dialect::default();
        assert_eq!(dialect.quote(), '"');
        assert_eq!(dialect.escape(), '\\');
        assert!(!dialect.is_doubled());
        assert!(Dialect::csv().is_doubled());
    }

    #[test]
    fn test_is_marker() {
        for ch in ['"', '\'', '\\', '`', '|', '~', '!', '/', '@', '[', '{'] {
            assert!(is_marker(ch), "{:?}", ch);
        }

        for ch in ['a', 'Z', '0', '9', ' ', '\t', '\n', '\x7f', 'é', '«'] {
            assert!(!is_marker(ch), "{:?}", ch);
        }
    }

    #[test]
    fn test_new_rejects_non_markers() {
        assert_eq!(Dialect::new('q', '\\'), Err(Error::InvalidQuote('q')));
        assert_eq!(Dialect::new('"', ' '), Err(Error::InvalidEscape(' ')));
        assert_eq!(
            Dialect::default().with_escape('1'),
            Err(Error::InvalidEscape('1'))
        );
        assert_eq!(
            Dialect::default().with_quote('\''),
            Dialect::new('\'', '\\')
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            Error::UnterminatedQuote { offset: 3 }.to_string(),
            "unterminated quote starting at byte 3"
        );
        assert_eq!(
            Error::InvalidQuote('a').to_string(),
            "invalid quote character 'a', expected visible ASCII punctuation"
        );
    }
}

#[cfg(all(test, feature = "serde"))]
mod test_serde {
    use super::*;

    #[test]
    fn test_deserialize_validates() {
        let err = serde_json::from_str::<Dialect>(r#"{"quote":"a","escape":"\\"}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with(&Error::InvalidQuote('a').to_string()));

        let err = serde_json::from_str::<Dialect>(r#"{"quote":"'","escape":" "}"#).unwrap_err();
        assert!(err
            .to_string()
            .starts_with(&Error::InvalidEscape(' ').to_string()));
    }

    #[test]
    fn test_serde_roundtrip() {
        let dialect = Dialect::new('\'', '\'').unwrap();

        let json = serde_json::to_string(&dialect).unwrap();
        assert_eq!(json, r#"{"quote":"'","escape":"'"}"#);
        assert_eq!(serde_json::from_str::<Dialect>(&json).unwrap(), dialect);

        let json = serde_json::to_string(&Dialect::default()).unwrap();
        assert_eq!(json, r#"{"quote":"\"","escape":"\\"}"#);
        assert_eq!(
            serde_json::from_str::<Dialect>(&json).unwrap(),
            Dialect::default()
        );
    }
}
