#![no_main]
use dequote::{types::Dialect, Dequoter};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    for dialect in [Dialect::default(), Dialect::csv()] {
        // Let's quote the value ...
        let quoted = dialect.enquote(data);

        // ... dequote it again ...
        let value = dialect.dequote_strict(&quoted).unwrap();

        // ... and verify that we got the same value.
        assert_eq!(value, data);
    }
});
