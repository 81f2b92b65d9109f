//! Fuzz target for the TOML configuration parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_config_parser
//!
//! Feeds arbitrary UTF-8 to `AppConfig::parse()`. Anything that validates
//! must also seed a context without error.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = scopetree_config::AppConfig::parse(s) {
            config
                .build_context()
                .expect("validated config must seed a context");
        }
    }
});
