//! Fuzz target for bracketed list literals and symptom codes.

#![no_main]

use dx_common::Symptom;
use dx_core::input::literal::{into_numbers, into_strings, parse_list};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let _ = text.parse::<Symptom>();
    if let Ok(items) = parse_list(text) {
        let _ = into_numbers(items.clone());
        if let Ok(codes) = into_strings(items) {
            for code in &codes {
                let _ = code.parse::<Symptom>();
            }
        }
    }
});
