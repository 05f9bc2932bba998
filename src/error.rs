use thiserror::Error;

/// Failure of a checked [`PackedBoolArray`] operation.
///
/// [`PackedBoolArray`]: crate::PackedBoolArray
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The provided word storage cannot back the requested bit length.
    #[error("{word_count} words cannot back a packed array of {bit_length} bits")]
    InvalidLength { bit_length: usize, word_count: usize },

    /// The index lies outside `[0, bit_length)`.
    #[error("index {index} out of range for packed array of {bit_length} bits")]
    IndexOutOfRange { index: usize, bit_length: usize },
}
