use std::fmt;
use std::ops::Range;

use sorted_iter::SortedIterator;
use sorted_iter::assume::AssumeSortedByItemExt;

use crate::Error;
use crate::display;
use crate::word::{PackedWord, word_and_bit_index};

/// A fixed-length boolean sequence packed into unsigned words.
///
/// `PackedBoolArray` stores `len()` booleans in `len() / W::BITS + 1` words of
/// type `W` (default `u32`), one bit per element: index `i` lives at bit
/// `i % W::BITS` of word `i / W::BITS`. Storage is proportional to the word
/// count rather than the element count, which is the entire point over a
/// `Vec<bool>`.
///
/// The length is fixed at construction. Indices in `[0, len())` are the only
/// valid ones; the backing store always carries one word of slack beyond the
/// exact ceiling (see [`word_count`](PackedBoolArray::word_count)), but that
/// slack is not addressable through the API.
///
/// # Example
///
/// ```
/// use boolpack::PackedBoolArray;
///
/// let mut bits = PackedBoolArray::<u32>::zeros(5);
/// bits.assign_index(0, true);
/// bits.assign_index(2, true);
/// bits.assign_index(4, true);
///
/// assert_eq!(bits.index(0), true);
/// assert_eq!(bits.index(1), false);
/// assert_eq!(bits.weight(), 3);
/// assert_eq!(bits.support().collect::<Vec<_>>(), vec![0, 2, 4]);
/// ```
#[must_use]
#[derive(Eq, PartialEq, Clone, Hash)]
pub struct PackedBoolArray<W: PackedWord = u32> {
    bit_length: usize,
    words: Vec<W>,
}

/// Number of backing words for a given bit length.
///
/// Deliberately `bit_length / W::BITS + 1` rather than the exact ceiling: the
/// final word is pure slack whenever `bit_length` divides evenly. The slack is
/// a documented constant-factor cost, kept so that the word count is a total
/// function of the length with no special case at zero.
#[inline]
#[must_use]
pub fn word_count_for<W: PackedWord>(bit_length: usize) -> usize {
    bit_length / W::BITS + 1
}

impl<W: PackedWord> PackedBoolArray<W> {
    /// Creates a packed array of `bit_length` booleans, all `false`.
    pub fn zeros(bit_length: usize) -> PackedBoolArray<W> {
        PackedBoolArray {
            bit_length,
            words: vec![W::default(); word_count_for::<W>(bit_length)],
        }
    }

    /// Creates a packed array of `bit_length` booleans, all `false`.
    pub fn of_length(bit_length: usize) -> PackedBoolArray<W> {
        Self::zeros(bit_length)
    }

    /// Returns the number of booleans in the array.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bit_length
    }

    /// Returns `true` if the array has a length of zero.
    ///
    /// A zero-length array still owns one (slack) word, but no index is valid.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }

    /// Returns the number of backing words, `len() / W::BITS + 1`.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Returns the boolean at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    #[must_use]
    pub fn index(&self, index: usize) -> bool {
        assert!(index < self.bit_length, "index {index} out of range for length {}", self.bit_length);
        let (word_index, bit_index) = word_and_bit_index::<W>(index);
        self.words[word_index].bit(bit_index)
    }

    /// Returns the boolean at `index`, or [`Error::IndexOutOfRange`] if
    /// `index >= len()`.
    pub fn try_index(&self, index: usize) -> Result<bool, Error> {
        self.check_index(index)?;
        Ok(self.index(index))
    }

    /// Assigns the boolean at `index`.
    ///
    /// Exactly one backing word is touched: its target bit is OR-ed in when
    /// `to` is `true` and AND-ed out against the complement mask when `to` is
    /// `false`. No other index is affected, and assigning the same value
    /// twice is a no-op the second time.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn assign_index(&mut self, index: usize, to: bool) {
        assert!(index < self.bit_length, "index {index} out of range for length {}", self.bit_length);
        let (word_index, bit_index) = word_and_bit_index::<W>(index);
        self.words[word_index] = self.words[word_index].with_bit(bit_index, to);
    }

    /// Assigns the boolean at `index`, or returns [`Error::IndexOutOfRange`]
    /// if `index >= len()`.
    pub fn try_assign_index(&mut self, index: usize, to: bool) -> Result<(), Error> {
        self.check_index(index)?;
        self.assign_index(index, to);
        Ok(())
    }

    /// Flips the boolean at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= len()`.
    pub fn negate_index(&mut self, index: usize) {
        assert!(index < self.bit_length, "index {index} out of range for length {}", self.bit_length);
        let (word_index, bit_index) = word_and_bit_index::<W>(index);
        self.words[word_index] = self.words[word_index].with_bit_negated(bit_index);
    }

    /// Set all bits to zero.
    pub fn clear(&mut self) {
        self.words.fill(W::default());
    }

    /// Returns the number of `true` elements.
    ///
    /// Full words are counted with popcount; slack bits beyond `len()` are
    /// excluded even if word-level deserialization left them set.
    #[must_use]
    pub fn weight(&self) -> usize {
        let full_words = self.bit_length / W::BITS;
        let tail_bits = self.bit_length % W::BITS;
        let full: usize = self.words[..full_words].iter().map(|word| word.ones()).sum();
        let tail_word = self.words[full_words];
        full + (0..tail_bits).filter(|&position| tail_word.bit(position)).count()
    }

    /// Returns the indices of the `true` elements in increasing order.
    pub fn support(&self) -> impl SortedIterator<Item = usize> + '_ {
        self.iter()
            .enumerate()
            .filter(|pair| pair.1)
            .map(|pair| pair.0)
            .assume_sorted_by_item()
    }

    /// Returns an iterator over the booleans in index order.
    #[must_use]
    pub fn iter(&self) -> BitIterator<'_, W> {
        BitIterator {
            array: self,
            indices: 0..self.bit_length,
        }
    }

    /// View the backing storage as a flat slice of words.
    ///
    /// The slice includes the slack word; bits beyond `len()` carry no
    /// meaning.
    #[must_use]
    pub fn as_words(&self) -> &[W] {
        &self.words
    }

    /// Reconstructs a packed array of `bit_length` booleans from its word
    /// storage, as produced by [`as_words`](PackedBoolArray::as_words).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] if `words.len()` is not exactly
    /// `bit_length / W::BITS + 1`.
    pub fn from_words(bit_length: usize, words: &[W]) -> Result<PackedBoolArray<W>, Error> {
        if words.len() != word_count_for::<W>(bit_length) {
            return Err(Error::InvalidLength {
                bit_length,
                word_count: words.len(),
            });
        }
        Ok(PackedBoolArray {
            bit_length,
            words: words.to_vec(),
        })
    }

    fn check_index(&self, index: usize) -> Result<(), Error> {
        if index < self.bit_length {
            Ok(())
        } else {
            Err(Error::IndexOutOfRange {
                index,
                bit_length: self.bit_length,
            })
        }
    }
}

impl<W: PackedWord> FromIterator<bool> for PackedBoolArray<W> {
    fn from_iter<Iterator: IntoIterator<Item = bool>>(iterator: Iterator) -> Self {
        let mut words = vec![W::default()];
        let mut bit_length = 0;
        for bit in iterator {
            let (word_index, bit_index) = word_and_bit_index::<W>(bit_length);
            if word_index == words.len() {
                words.push(W::default());
            }
            words[word_index] = words[word_index].with_bit(bit_index, bit);
            bit_length += 1;
        }
        words.resize(word_count_for::<W>(bit_length), W::default());
        PackedBoolArray { bit_length, words }
    }
}

/// Iterator over the booleans of a [`PackedBoolArray`] in index order.
#[derive(Clone)]
pub struct BitIterator<'life, W: PackedWord> {
    array: &'life PackedBoolArray<W>,
    indices: Range<usize>,
}

impl<W: PackedWord> Iterator for BitIterator<'_, W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        self.indices.next().map(|index| self.array.index(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

impl<W: PackedWord> ExactSizeIterator for BitIterator<'_, W> {}

impl<W: PackedWord> DoubleEndedIterator for BitIterator<'_, W> {
    fn next_back(&mut self) -> Option<bool> {
        self.indices.next_back().map(|index| self.array.index(index))
    }
}

impl<'life, W: PackedWord> IntoIterator for &'life PackedBoolArray<W> {
    type Item = bool;
    type IntoIter = BitIterator<'life, W>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<W: PackedWord> fmt::Display for PackedBoolArray<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if formatter.alternate() {
            display::write_words_msb_first(formatter, &self.words)
        } else {
            display::write_words_lsb_first(formatter, &self.words)
        }
    }
}

impl<W: PackedWord> fmt::Debug for PackedBoolArray<W> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "PackedBoolArray(len={}, words={})", self.bit_length, self)
    }
}
