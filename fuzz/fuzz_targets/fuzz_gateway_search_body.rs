//! Fuzz target: JSON deserialization of `SearchBody`.
//!
//! Arbitrary bytes fed to the search request parser must never panic.

#![no_main]

use algotrace_gateway::routes::SearchBody;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Errors are expected; panics are not.
    let _ = serde_json::from_slice::<SearchBody>(data);
});
