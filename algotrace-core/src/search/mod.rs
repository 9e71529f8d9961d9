//! Search algorithms that record every probe for client-side replay.

pub mod binary;
pub mod linear;

use serde::Serialize;

pub use binary::{binary_search, BinaryStep};
pub use linear::{linear_search, LinearStep};

/// Ordered probe history plus the final outcome of one search.
///
/// `steps` are in visit order and must never be reordered or deduplicated:
/// the front-end replays them one by one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchTrace<S> {
    /// Every probe, in the order the algorithm made it.
    pub steps: Vec<S>,
    /// Whether the target was found.
    pub found: bool,
    /// 0-based index of the match in the searched sequence, if any.
    pub index: Option<usize>,
}

impl<S> SearchTrace<S> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self { steps: Vec::with_capacity(capacity), found: false, index: None }
    }

    pub(crate) fn record(&mut self, step: S) {
        self.steps.push(step);
    }

    pub(crate) fn finish_found(mut self, index: usize) -> Self {
        self.found = true;
        self.index = Some(index);
        self
    }
}
