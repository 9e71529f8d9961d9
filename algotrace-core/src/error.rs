/// Errors produced by the `algotrace-core` crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoreError {
    /// A requested sequence length was zero or above the allowed maximum.
    #[error("invalid size {size}: must be in [1, {max}]")]
    InvalidSize { size: usize, max: usize },

    /// A digit count was outside the supported range.
    #[error("invalid digits {digits}: must be in [1, {max}]")]
    InvalidDigits { digits: u32, max: u32 },

    /// More distinct values were requested than the digit range holds.
    #[error("cannot draw {size} distinct values with {digits} digits: only {available} exist")]
    RangeExhausted {
        size: usize,
        digits: u32,
        available: usize,
    },
}
