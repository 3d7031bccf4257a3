//! Fuzz target for `--allowed SCOPE:STR[:STR...]` parsing.
//!
//! A spec with at least one `:` always parses; anything else is rejected, never a panic.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(spec) = std::str::from_utf8(data) {
        let parsed = includeguard_settings::parse_allowed_spec(spec);
        assert_eq!(parsed.is_ok(), spec.contains(':'));
    }
});
