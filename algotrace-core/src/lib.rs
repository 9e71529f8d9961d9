//! Core algorithms for the algotrace teaching endpoints.
//!
//! Every search here returns the full probe history alongside the result so
//! a front-end can animate the algorithm step by step. All functions are
//! pure: inputs are owned or borrowed per call and nothing is shared.

#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]

pub mod error;
pub mod search;
pub mod sequence;

pub use error::CoreError;
pub use search::{binary_search, linear_search, BinaryStep, LinearStep, SearchTrace};
pub use sequence::{generate_sequence, GenerateSpec, SortedSequence};

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn generated_sequence_finds_each_of_its_elements() {
        let mut rng = StdRng::seed_from_u64(3);
        let seq = match generate_sequence(GenerateSpec::new(Some(15), Some(3)), 100, &mut rng) {
            Ok(s) => s,
            Err(e) => panic!("generation failed: {e}"),
        };
        for (expected, &value) in seq.iter().enumerate() {
            let trace = binary_search(&seq, value);
            assert_eq!(trace.index, Some(expected), "distinct values have a unique index");
        }
    }

    #[test]
    fn trace_serializes_found_and_null_index() {
        let seq = SortedSequence::from_unsorted(vec![1_i64, 2]);
        let json = match serde_json::to_value(binary_search(&seq, 5)) {
            Ok(v) => v,
            Err(e) => panic!("serialization failed: {e}"),
        };
        assert_eq!(json["found"], false);
        assert!(json["index"].is_null(), "absent target must serialize index as null");
    }

    #[test]
    fn core_error_display_includes_limits() {
        let err = CoreError::RangeExhausted { size: 12, digits: 1, available: 9 };
        let msg = err.to_string();
        assert!(msg.contains("12"), "Display must include the requested size");
        assert!(msg.contains("only 9"), "Display must include the available count");
    }
}
