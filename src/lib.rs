//! Fixed-length packed boolean arrays.
//!
//! [`PackedBoolArray`] represents `N` booleans using `N / W::BITS + 1` words
//! of an unsigned type `W` instead of `N` separate byte-sized cells, with
//! constant-time indexed reads and writes and a least-significant-bit-first
//! textual rendering for inspection. See `benches/` for the comparison
//! against the naive `Vec<bool>` baseline.

pub mod array;
pub use array::{BitIterator, PackedBoolArray, word_count_for};

pub mod display;

pub mod error;
pub use error::Error;

pub mod word;
pub use word::PackedWord;
