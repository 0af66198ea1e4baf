//! Fuzz target for settings.toml parsing.
//!
//! Tests that TOML settings parsing and validation handle arbitrary input
//! without panicking.

#![no_main]

use dx_config::{validate_settings, Settings};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if let Ok(settings) = Settings::from_toml_str(text) {
        let _ = validate_settings(&settings);
    }
});
