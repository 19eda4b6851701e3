//! Fuzz target for the DSN parser.
//!
//! Feeds arbitrary strings to `parse_dsn`. Any DSN that parses must format
//! to a DSN that parses again.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_dsn_parser
//! ```

#![no_main]

use chdsn_core::parse_dsn;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(input) = std::str::from_utf8(data) {
        // The parser should never panic, only return errors
        if let Ok(config) = parse_dsn(input) {
            let _ = parse_dsn(&config.format_dsn());
            let _ = config.request_url(std::iter::empty::<(String, String)>());
        }
    }
});
