//! Step-recording binary search.
//!
//! Textbook iterative search over an inclusive window `[left, right]`,
//! emitting one [`BinaryStep`] per midpoint examined.

use std::cmp::Ordering;

use serde::Serialize;

use super::SearchTrace;
use crate::sequence::SortedSequence;

/// One probe of the binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BinaryStep<T> {
    /// Inclusive lower bound of the window.
    pub left: usize,
    /// Inclusive upper bound of the window.
    pub right: usize,
    /// `floor((left + right) / 2)`.
    pub mid: usize,
    /// Element at `mid`.
    pub mid_value: T,
}

/// Upper bound on the number of probes for a sequence of length `len`:
/// `ceil(log2(len + 1))`.
#[must_use]
pub fn max_steps(len: usize) -> usize {
    (usize::BITS - len.leading_zeros()) as usize
}

/// Search `seq` for `target`, recording every midpoint examined.
///
/// With duplicate values the reported index is whichever match the window
/// reaches first; it is not guaranteed to be the leftmost or rightmost.
///
/// # Complexity
/// O(log n) time, O(log n) space for the trace.
#[must_use]
pub fn binary_search<T: Ord + Copy>(
    seq: &SortedSequence<T>,
    target: T,
) -> SearchTrace<BinaryStep<T>> {
    let mut trace = SearchTrace::with_capacity(max_steps(seq.len()));
    if seq.is_empty() {
        return trace;
    }

    let (mut left, mut right) = (0, seq.len() - 1);
    while left <= right {
        let mid = left + (right - left) / 2;
        let mid_value = seq[mid];
        trace.record(BinaryStep { left, right, mid, mid_value });

        match mid_value.cmp(&target) {
            Ordering::Equal => return trace.finish_found(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                // Window [left, mid-1] is empty when mid is 0.
                if mid == 0 {
                    break;
                }
                right = mid - 1;
            }
        }
    }
    trace
}
