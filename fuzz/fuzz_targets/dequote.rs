#![no_main]
use dequote::{types::Dialect, Dequoter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for dialect in [Dialect::default(), Dialect::csv()] {
        // Never panics, never grows.
        let value = dialect.dequote(data);
        assert!(value.len() <= data.len());

        // Strict mode only differs by rejecting an unterminated quote.
        if let Ok(strict) = dialect.dequote_strict(data) {
            assert_eq!(strict, value);
        }
    }
});
