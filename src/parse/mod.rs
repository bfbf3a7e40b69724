//! Grammar of a quoted field, parameterised over the [`Dialect`].
//!
//! ```text
//! field       = *segment
//! segment     = unquoted / quoted
//! unquoted    = 1*(any char except QUOTE)
//! quoted      = QUOTE *qcontent [QUOTE]
//! qcontent    = quoted-pair / qtext / lone-escape
//! quoted-pair = ESCAPE (QUOTE / ESCAPE)
//! qtext       = 1*(any char except QUOTE and ESCAPE)
//! lone-escape = ESCAPE
//! ```
//!
//! All parsers work on complete input. A missing closing QUOTE is not a
//! parse error; it is reported through [`Segment::is_terminated`].

use crate::types::{Dialect, Fragment, Segment};
use nom::{
    branch::alt,
    bytes::complete::take_till1,
    character::complete::{char, satisfy},
    combinator::{map, opt, recognize},
    error::{Error, ErrorKind},
    multi::many0,
    sequence::{preceded, tuple},
    IResult,
};

mod segments;

pub use segments::Segments;

/// segment = unquoted / quoted
pub fn segment<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, Segment<'a>> {
    move |input: &'a str| {
        let mut parser = alt((map(unquoted(dialect), Segment::Unquoted), quoted(dialect)));

        let (remaining, parsed) = parser(input)?;

        Ok((remaining, parsed))
    }
}

/// Everything up to the next opening quote, escape characters included.
///
/// unquoted = 1*(any char except QUOTE)
pub fn unquoted<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    let quote = dialect.quote();

    move |input: &'a str| take_till1(|ch: char| ch == quote)(input)
}

/// quoted = QUOTE *qcontent [QUOTE]
pub fn quoted<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, Segment<'a>> {
    move |input: &'a str| {
        let mut parser = tuple((
            char(dialect.quote()),
            many0(qcontent(dialect)),
            opt(char(dialect.quote())),
        ));

        let (remaining, (_, fragments, closing)) = parser(input)?;

        Ok((
            remaining,
            Segment::Quoted {
                fragments,
                terminated: closing.is_some(),
            },
        ))
    }
}

/// qcontent = quoted-pair / qtext / lone-escape
pub fn qcontent<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, Fragment<'a>> {
    move |input: &'a str| {
        let mut parser = alt((
            map(quoted_pair(dialect), Fragment::Escaped),
            map(qtext(dialect), Fragment::Text),
            map(lone_escape(dialect), Fragment::Text),
        ));

        let (remaining, parsed) = parser(input)?;

        Ok((remaining, parsed))
    }
}

/// In a doubled dialect this is two consecutive quotes.
///
/// quoted-pair = ESCAPE (QUOTE / ESCAPE)
pub fn quoted_pair<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, char> {
    move |input: &'a str| {
        preceded(
            char(dialect.escape()),
            satisfy(|ch: char| dialect.is_special(ch)),
        )(input)
    }
}

/// qtext = 1*(any char except QUOTE and ESCAPE)
pub fn qtext<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| take_till1(|ch: char| dialect.is_special(ch))(input)
}

/// An escape that does not start a quoted-pair stands for itself.
/// Never matches in a doubled dialect, where a lone ESCAPE is the closing QUOTE.
///
/// lone-escape = ESCAPE
pub fn lone_escape<'a>(dialect: Dialect) -> impl FnMut(&'a str) -> IResult<&'a str, &'a str> {
    move |input: &'a str| {
        if dialect.is_doubled() {
            return Err(nom::Err::Error(Error::new(input, ErrorKind::Char)));
        }

        recognize(char(dialect.escape()))(input)
    }
}
