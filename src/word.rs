/// An unsigned integer usable as the backing word of a [`PackedBoolArray`].
///
/// [`PackedBoolArray`]: crate::PackedBoolArray
pub trait PackedWord: Copy + Default + Eq + std::fmt::Debug + std::hash::Hash + 'static {
    const BITS: usize;

    /// Whether bit `position` of this word is set.
    fn bit(self, position: usize) -> bool;

    /// This word with bit `position` set (`to == true`) or cleared (`to == false`).
    #[must_use]
    fn with_bit(self, position: usize, to: bool) -> Self;

    /// This word with bit `position` flipped.
    #[must_use]
    fn with_bit_negated(self, position: usize) -> Self;

    /// Number of set bits in this word.
    fn ones(self) -> usize;
}

macro_rules! implement_packed_word {
    ($word_type:ty) => {
        impl PackedWord for $word_type {
            const BITS: usize = <$word_type>::BITS as usize;

            #[inline]
            fn bit(self, position: usize) -> bool {
                (self & (1 << position)) != 0
            }

            #[inline]
            fn with_bit(self, position: usize, to: bool) -> Self {
                if to {
                    self | (1 << position)
                } else {
                    self & !(1 << position)
                }
            }

            #[inline]
            fn with_bit_negated(self, position: usize) -> Self {
                self ^ (1 << position)
            }

            #[inline]
            fn ones(self) -> usize {
                self.count_ones() as usize
            }
        }
    };
}

implement_packed_word!(u16);
implement_packed_word!(u32);
implement_packed_word!(u64);
implement_packed_word!(u128);

/// Splits a logical bit index into a word index and a bit position within that word.
#[inline]
#[must_use]
pub fn word_and_bit_index<W: PackedWord>(index: usize) -> (usize, usize) {
    let word_index = index / W::BITS;
    let bit_index = index % W::BITS;
    (word_index, bit_index)
}
