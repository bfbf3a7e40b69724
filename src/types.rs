use crate::escape;
use std::borrow::Cow;

pub use dequote_types::{Dialect, Error};

/// A maximal run of a field that is either outside or inside quotes.
#[derive(Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Copied verbatim, escape characters included.
    Unquoted(&'a str),
    /// The delimiting quotes are not part of `fragments`.
    Quoted {
        fragments: Vec<Fragment<'a>>,
        terminated: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fragment<'a> {
    Text(&'a str),
    /// An escape pair collapsed into the character it protects.
    Escaped(char),
}

impl<'a> Segment<'a> {
    pub fn is_terminated(&self) -> bool {
        match self {
            Segment::Unquoted(_) => true,
            Segment::Quoted { terminated, .. } => *terminated,
        }
    }

    /// Append the dequoted value of this segment.
    pub fn push_value(&self, out: &mut String) {
        match self {
            Segment::Unquoted(text) => out.push_str(text),
            Segment::Quoted { fragments, .. } => {
                for fragment in fragments {
                    match fragment {
                        Fragment::Text(text) => out.push_str(text),
                        Fragment::Escaped(ch) => out.push(*ch),
                    }
                }
            }
        }
    }

    /// The dequoted value, when it is a contiguous slice of the input.
    pub fn as_borrowed(&self) -> Option<&'a str> {
        match self {
            Segment::Unquoted(text) => Some(text),
            Segment::Quoted { fragments, .. } => match fragments.as_slice() {
                [] => Some(""),
                [Fragment::Text(text)] => Some(text),
                _ => None,
            },
        }
    }
}

impl std::fmt::Debug for Segment<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        match self {
            Segment::Unquoted(text) => write!(f, "Unquoted({})", escape(text)),
            Segment::Quoted {
                fragments,
                terminated,
            } => {
                let mut value = String::new();
                self.push_value(&mut value);
                write!(f, "Quoted({}, {} fragments", escape(&value), fragments.len())?;
                if !terminated {
                    write!(f, ", unterminated")?;
                }
                write!(f, ")")
            }
        }
    }
}

/// A dequoted field.
///
/// `quoted` tells an empty quoted field (`""`) apart from an empty or
/// absent unquoted one, which callers commonly map to NULL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dequoted<'a> {
    pub value: Cow<'a, str>,
    pub quoted: bool,
}

impl<'a> Dequoted<'a> {
    pub fn into_owned(self) -> Dequoted<'static> {
        Dequoted {
            value: Cow::Owned(self.value.into_owned()),
            quoted: self.quoted,
        }
    }

    /// True when the field was unquoted and spells `null_marker`.
    pub fn is_null(&self, null_marker: &str) -> bool {
        !self.quoted && self.value == null_marker
    }
}
