use super::segment;
use crate::{
    escape,
    types::{Dialect, Segment},
};
use log::debug;

/// Splits a field into segments, yielding each with its byte offset.
///
/// Never fails: every input, including an empty one, is covered by the
/// yielded segments.
#[derive(Debug, Clone)]
pub struct Segments<'a> {
    dialect: Dialect,
    remaining: &'a str,
    offset: usize,
}

impl<'a> Segments<'a> {
    pub fn new(dialect: Dialect, input: &'a str) -> Self {
        Self {
            dialect,
            remaining: input,
            offset: 0,
        }
    }
}

impl<'a> Iterator for Segments<'a> {
    type Item = (usize, Segment<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining.is_empty() {
            return None;
        }

        let offset = self.offset;

        let (remaining, parsed) = match segment(self.dialect)(self.remaining) {
            Ok((remaining, parsed)) if remaining.len() < self.remaining.len() => {
                (remaining, parsed)
            }
            other => {
                // Unreachable on complete input. Keep the scan total anyway.
                debug!(
                    "no segment at byte {} ({:?}), keeping {} verbatim",
                    offset,
                    other.err(),
                    escape(self.remaining)
                );
                ("", Segment::Unquoted(self.remaining))
            }
        };

        self.offset += self.remaining.len() - remaining.len();
        self.remaining = remaining;

        Some((offset, parsed))
    }
}
