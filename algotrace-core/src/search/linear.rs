//! Step-recording linear search over the caller's order.

use serde::Serialize;

use super::SearchTrace;

/// One probe of the linear search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinearStep<T> {
    /// Index examined.
    pub index: usize,
    /// Element at `index`.
    pub value: T,
}

/// Scan `seq` front to back for `target`, recording every element examined.
///
/// Stops at the first match, so duplicates always report the leftmost index.
#[must_use]
pub fn linear_search<T: PartialEq + Copy>(seq: &[T], target: T) -> SearchTrace<LinearStep<T>> {
    let mut trace = SearchTrace::with_capacity(seq.len());
    for (index, &value) in seq.iter().enumerate() {
        trace.record(LinearStep { index, value });
        if value == target {
            return trace.finish_found(index);
        }
    }
    trace
}
