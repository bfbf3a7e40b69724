use crate::types::Dialect;
use std::borrow::Cow;

/// Prefix every quote and escape character with the escape character.
pub(crate) fn escape_quoted(dialect: Dialect, unescaped: &str) -> Cow<str> {
    if !unescaped.contains(|ch: char| dialect.is_special(ch)) {
        return Cow::Borrowed(unescaped);
    }

    let mut escaped = String::with_capacity(unescaped.len() + 4);

    for ch in unescaped.chars() {
        if dialect.is_special(ch) {
            escaped.push(dialect.escape());
        }
        escaped.push(ch);
    }

    Cow::Owned(escaped)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_escape_quoted() {
        let dialect = Dialect::default();
        assert!(matches!(escape_quoted(dialect, "abcd"), Cow::Borrowed("abcd")));
        assert_eq!(escape_quoted(dialect, r#"a"b\c"#), r#"a\"b\\c"#);

        let dialect = Dialect::new('\'', '\'').unwrap();
        assert_eq!(escape_quoted(dialect, "it's"), "it''s");
        assert_eq!(escape_quoted(dialect, r#"say "hi""#), r#"say "hi""#);
    }
}
