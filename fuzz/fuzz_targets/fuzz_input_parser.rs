//! Fuzz target for input record parsing.
//!
//! Arbitrary text must either parse into a dataset whose every query
//! succeeds or be rejected with an error; it must never panic.

#![no_main]

use dx_core::input::parse_str;
use dx_core::query;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(mut dataset) = parse_str(text) else {
        return;
    };
    // Keep enumeration cheap.
    if dataset.unknown_count() > 12 {
        return;
    }
    for patient in &mut dataset.patients {
        let _ = query::posteriors(patient);
        let _ = query::bounds(patient);
        let _ = query::best_tests(patient);
    }
});
