use dequote::{dequote, enquote, types::Dialect, Dequoter};
use proptest::prelude::*;
use std::borrow::Cow;

fn dialect() -> impl Strategy<Value = Dialect> {
    prop_oneof![
        Just(Dialect::default()),
        Just(Dialect::csv()),
        Just(Dialect::new('\'', '\\').unwrap()),
        Just(Dialect::new('|', '!').unwrap()),
    ]
}

proptest! {
    #[test]
    fn test_total(s in ".*") {
        let _ = dequote(&s);
    }

    #[test]
    fn test_no_quote_is_identity(s in "[^\"]*") {
        let out = dequote(&s);
        prop_assert!(matches!(out, Cow::Borrowed(_)));
        prop_assert_eq!(out, s.as_str());
    }

    #[test]
    fn test_quote_count_never_grows(s in r#"[ab"\\ ]*"#) {
        let count = |text: &str| text.matches('"').count();
        prop_assert!(count(&dequote(&s)) <= count(&s));
    }

    #[test]
    fn test_output_never_longer(s in r#"[ab"\\]*"#) {
        prop_assert!(dequote(&s).len() <= s.len());
    }

    #[test]
    fn test_enquote_roundtrip(s in ".*") {
        let quoted = enquote(&s);
        prop_assert_eq!(dequote(&quoted), s.as_str());
    }

    #[test]
    fn test_enquote_roundtrip_any_dialect(dialect in dialect(), s in r#"[ab"'\\|! ]*"#) {
        let quoted = dialect.enquote(&s);
        let value = dialect.dequote_strict(&quoted);
        prop_assert_eq!(value.as_deref(), Ok(s.as_str()));
    }

    #[test]
    fn test_strict_agrees_with_lenient(dialect in dialect(), s in r#"[ab"'\\|! ]*"#) {
        if let Ok(value) = dialect.dequote_strict(&s) {
            prop_assert_eq!(value, dialect.dequote(&s));
        }
    }
}
