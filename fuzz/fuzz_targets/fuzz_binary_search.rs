//! Fuzz target: traced binary search over arbitrary sequences.
//!
//! The first 8 bytes pick the target; the rest are read as little-endian
//! `i64` chunks. The search must never panic, must stay within its probe
//! bound, and must agree with a linear scan.

#![no_main]

use algotrace_core::search::binary::max_steps;
use algotrace_core::{binary_search, SortedSequence};
use libfuzzer_sys::fuzz_target;

fn read_i64(chunk: &[u8]) -> i64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(chunk);
    i64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let (head, rest) = data.split_at(8);
    let target = read_i64(head);
    let values: Vec<i64> = rest.chunks_exact(8).map(read_i64).collect();

    let seq = SortedSequence::from_unsorted(values);
    let trace = binary_search(&seq, target);

    assert!(trace.steps.len() <= max_steps(seq.len()), "probe bound exceeded");
    assert_eq!(trace.found, seq.contains(&target), "must agree with a linear scan");
    if let Some(i) = trace.index {
        assert_eq!(seq[i], target, "reported index must hold the target");
    }
});
