//! Fuzz target for compiler diagnostic parsing.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_diagnostics
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let text = String::from_utf8_lossy(data);
    let _ = includeguard_frontend::parse_diagnostics(&text);
});
