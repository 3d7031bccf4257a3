//! Fuzz target for preprocessor linemarker parsing.
//!
//! Goal: `parse_includes` should **never panic**, whatever the preprocessor printed.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_linemarkers
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);

    let _ = includeguard_frontend::parse_includes(&text, "<stdin>");

    for line in text.lines() {
        let _ = includeguard_frontend::parse_linemarker(line);
    }
});
