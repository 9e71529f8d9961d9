//! Input shaping: sorted sequences and random sequence generation.

use std::ops::Deref;

use rand::Rng;
use serde::Serialize;

use crate::error::CoreError;

/// Length of a generated sequence when the caller does not choose one.
pub const DEFAULT_SIZE: usize = 10;

/// Digit count of generated values when the caller does not choose one.
pub const DEFAULT_DIGITS: u32 = 2;

/// Largest supported digit count. Keeps every generated value inside `u32`.
pub const MAX_DIGITS: u32 = 9;

/// A sequence whose elements are guaranteed to be in ascending order.
///
/// The only way to build one is through [`SortedSequence::from_unsorted`]
/// (or the `From<Vec<T>>` impl), which sorts the input first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SortedSequence<T>(Vec<T>);

impl<T: Ord> SortedSequence<T> {
    /// Sort `values` ascending and wrap them.
    #[must_use]
    pub fn from_unsorted(mut values: Vec<T>) -> Self {
        values.sort_unstable();
        Self(values)
    }
}

impl<T> SortedSequence<T> {
    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Consumes the sequence and returns the sorted vector.
    #[must_use]
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }
}

impl<T: Ord> From<Vec<T>> for SortedSequence<T> {
    fn from(values: Vec<T>) -> Self {
        Self::from_unsorted(values)
    }
}

impl<T> Deref for SortedSequence<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.0
    }
}

/// Parameters for generating a random sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateSpec {
    /// Number of distinct values to draw.
    pub size: usize,
    /// Every value has exactly this many decimal digits.
    pub digits: u32,
}

impl Default for GenerateSpec {
    fn default() -> Self {
        Self { size: DEFAULT_SIZE, digits: DEFAULT_DIGITS }
    }
}

impl GenerateSpec {
    /// Creates generation parameters from optional caller values, filling in defaults.
    #[must_use]
    pub fn new(size: Option<usize>, digits: Option<u32>) -> Self {
        Self {
            size: size.unwrap_or(DEFAULT_SIZE),
            digits: digits.unwrap_or(DEFAULT_DIGITS),
        }
    }

    /// Inclusive bounds `[10^(digits-1), 10^digits - 1]` of the value range.
    ///
    /// # Errors
    /// Returns [`CoreError::InvalidDigits`] if `digits` is not in `[1, MAX_DIGITS]`.
    pub fn value_range(&self) -> Result<(u32, u32), CoreError> {
        if !(1..=MAX_DIGITS).contains(&self.digits) {
            return Err(CoreError::InvalidDigits { digits: self.digits, max: MAX_DIGITS });
        }
        let low = 10_u32.pow(self.digits - 1);
        let high = 10_u32.pow(self.digits) - 1;
        Ok((low, high))
    }

    /// Check the parameters against a maximum length and the digit range.
    ///
    /// # Errors
    /// - [`CoreError::InvalidSize`] if `size` is zero or above `max_len`.
    /// - [`CoreError::InvalidDigits`] if `digits` is unsupported.
    /// - [`CoreError::RangeExhausted`] if the range has fewer than `size` values.
    pub fn validate(&self, max_len: usize) -> Result<(), CoreError> {
        if self.size == 0 || self.size > max_len {
            return Err(CoreError::InvalidSize { size: self.size, max: max_len });
        }
        let (low, high) = self.value_range()?;
        let available = (high - low + 1) as usize;
        if self.size > available {
            return Err(CoreError::RangeExhausted {
                size: self.size,
                digits: self.digits,
                available,
            });
        }
        Ok(())
    }
}

/// Draw `spec.size` distinct values from the digit range and sort them.
///
/// # Errors
/// Returns the same errors as [`GenerateSpec::validate`].
pub fn generate_sequence<R: Rng + ?Sized>(
    spec: GenerateSpec,
    max_len: usize,
    rng: &mut R,
) -> Result<SortedSequence<i64>, CoreError> {
    spec.validate(max_len)?;
    let (low, high) = spec.value_range()?;
    let available = (high - low + 1) as usize;

    #[expect(
        clippy::cast_possible_truncation,
        reason = "offsets are below the range width, which fits in u32"
    )]
    let values = rand::seq::index::sample(rng, available, spec.size)
        .into_iter()
        .map(|offset| i64::from(low + offset as u32))
        .collect();

    tracing::debug!(size = spec.size, digits = spec.digits, "generated sequence");
    Ok(SortedSequence::from_unsorted(values))
}
