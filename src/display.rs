//! Textual renderings of packed word storage, kept separate from the bit
//! manipulation code so alternate layouts can be added without touching it.

use std::fmt;

use crate::word::PackedWord;

/// Writes every word as `W::BITS` binary characters with bit 0 leftmost,
/// words separated by a single space.
///
/// Least-significant-first ordering makes the character at offset `i` within a
/// group line up with logical index `i` within that word, at the cost of not
/// matching standard binary notation.
pub fn write_words_lsb_first<W: PackedWord>(formatter: &mut fmt::Formatter<'_>, words: &[W]) -> fmt::Result {
    for (word_index, word) in words.iter().enumerate() {
        if word_index > 0 {
            formatter.write_str(" ")?;
        }
        for position in 0..W::BITS {
            write!(formatter, "{}", u8::from(word.bit(position)))?;
        }
    }
    Ok(())
}

/// Writes every word in standard binary notation (most significant bit
/// leftmost), zero-padded to `W::BITS` characters, words separated by a
/// single space.
pub fn write_words_msb_first<W: PackedWord>(formatter: &mut fmt::Formatter<'_>, words: &[W]) -> fmt::Result {
    for (word_index, word) in words.iter().enumerate() {
        if word_index > 0 {
            formatter.write_str(" ")?;
        }
        for position in (0..W::BITS).rev() {
            write!(formatter, "{}", u8::from(word.bit(position)))?;
        }
    }
    Ok(())
}
