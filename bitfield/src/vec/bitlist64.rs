use crate::bit::bitwise_for_words as words;
use crate::bit::words::{WORD_BYTE_LEN, Word, bit_len_of, trimmed_le_bytes, word_count, words_from_le_bytes};
use crate::error::{BitfieldError, Result};
use crate::{BitLength, BitSupport, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, ToBytes};
use crate::{
    delegate_bitwise, delegate_bitwise_body, delegate_bitwise_mut, delegate_bitwise_mut_body, delegate_bitwise_pair,
    delegate_bitwise_pair_body, delegate_bitwise_pair_mut, delegate_bitwise_pair_mut_body,
};
use std::fmt;
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not};

/// A bit vector whose length is derived from its backing words.
///
/// `Bitlist64` is the full-featured vector of this crate. Its length is always
/// `words.len() * 64`: there are no slack bits. On top of the single-bit accessors it
/// provides the canonical minimal-length byte encoding, set algebra with allocating and
/// non-allocating forms, superset and overlap predicates, and index enumeration.
///
/// # Construction
///
/// ```
/// use bitfield::{BitLength, Bitlist64};
///
/// // Zeroed, length rounded up to whole words
/// let zeros = Bitlist64::new(100);
/// assert_eq!(zeros.bit_len(), 128);
///
/// // From raw words
/// let bits = Bitlist64::from_words(vec![0x5, 0x0]);
/// assert_eq!(bits.bit_len(), 128);
/// ```
///
/// # Set algebra
///
/// ```
/// use bitfield::{Bitlist64, BitwisePair, BitwisePairMut};
///
/// let left = Bitlist64::from_words(vec![0b0110]);
/// let right = Bitlist64::from_words(vec![0b0011]);
///
/// assert_eq!(left.or(&right).words(), &[0b0111]);
/// assert_eq!(left.and(&right).words(), &[0b0010]);
/// assert_eq!(left.xor(&right).words(), &[0b0101]);
/// assert!(left.overlaps(&right));
/// assert!(!left.contains(&right));
///
/// // Reuse a destination on hot paths
/// let mut union = Bitlist64::new(64);
/// left.or_into(&right, &mut union);
/// assert_eq!(union, left.or(&right));
/// ```
///
/// # Serialization
///
/// [`bytes`](ToBytes::bytes) encodes the words little-endian and drops trailing zero
/// bytes. [`from_bytes`](Bitlist64::from_bytes) zero-extends back to a known word count.
///
/// ```
/// use bitfield::{Bitlist64, ToBytes};
///
/// let bits = Bitlist64::from_words(vec![0x5, 0x0]);
/// assert_eq!(bits.bytes(), vec![0x05]);
/// assert_eq!(Bitlist64::from_bytes(&bits.bytes(), 2).unwrap(), bits);
/// ```
///
/// # Panics
///
/// Every pairwise operation panics when the operands differ in length.
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitlist64 {
    words: Vec<Word>,
}

impl AsRef<[Word]> for Bitlist64 {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl AsMut<[Word]> for Bitlist64 {
    fn as_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }
}

impl BitLength for Bitlist64 {
    fn bit_len(&self) -> u64 {
        bit_len_of(&self.words)
    }
}

delegate_bitwise!(Bitlist64, words::BitwiseForWords);
delegate_bitwise_mut!(Bitlist64, words::BitwiseMutForWords);
delegate_bitwise_pair!(Bitlist64, Bitlist64, words::BitwisePairForWords<Bitlist64>);
delegate_bitwise_pair_mut!(Bitlist64, Bitlist64, words::BitwisePairMutForWords<Bitlist64>);

impl BitSupport for Bitlist64 {
    #[inline]
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = u64> {
        <Self as words::BitSupportForWords>::support(self)
    }
}

impl ToBytes for Bitlist64 {
    fn bytes(&self) -> Vec<u8> {
        trimmed_le_bytes(&self.words)
    }
}

impl Bitlist64 {
    /// Zeroed vector with room for `bit_count` bits.
    ///
    /// The length is rounded up to whole words, since this vector has no slack bits.
    pub fn new(bit_count: u64) -> Bitlist64 {
        Self::with_word_count(word_count(bit_count))
    }

    pub fn with_word_count(word_count: usize) -> Bitlist64 {
        Bitlist64 {
            words: vec![0; word_count],
        }
    }

    pub fn from_words(words: Vec<Word>) -> Bitlist64 {
        Bitlist64 { words }
    }

    /// Decodes the canonical encoding produced by [`ToBytes::bytes`], zero-extending it to
    /// `word_count` words.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::TooManyBytes`] if `bytes` is longer than `word_count * 8`.
    pub fn from_bytes(bytes: &[u8], word_count: usize) -> Result<Bitlist64> {
        match words_from_le_bytes(bytes, word_count) {
            Some(words) => Ok(Self::from_words(words)),
            None => {
                log::debug!("rejecting {} byte bitlist for {word_count} word(s)", bytes.len());
                Err(BitfieldError::TooManyBytes {
                    max: word_count.saturating_mul(WORD_BYTE_LEN),
                    actual: bytes.len(),
                })
            }
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words.len()
    }

    /// Number of bits, always a multiple of 64.
    #[must_use]
    pub fn len(&self) -> u64 {
        self.bit_len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl From<Vec<Word>> for Bitlist64 {
    fn from(words: Vec<Word>) -> Self {
        Self::from_words(words)
    }
}

impl From<Bitlist64> for Vec<Word> {
    fn from(bits: Bitlist64) -> Self {
        bits.words
    }
}

impl fmt::Display for Bitlist64 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.bit_len() {
            formatter.write_str(if self.bit_at(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl BitOr for &Bitlist64 {
    type Output = Bitlist64;
    fn bitor(self, other: Self) -> Bitlist64 {
        <Bitlist64 as BitwisePairMut>::or(self, other)
    }
}

impl BitAnd for &Bitlist64 {
    type Output = Bitlist64;
    fn bitand(self, other: Self) -> Bitlist64 {
        <Bitlist64 as BitwisePairMut>::and(self, other)
    }
}

impl BitXor for &Bitlist64 {
    type Output = Bitlist64;
    fn bitxor(self, other: Self) -> Bitlist64 {
        <Bitlist64 as BitwisePairMut>::xor(self, other)
    }
}

impl Not for &Bitlist64 {
    type Output = Bitlist64;
    fn not(self) -> Bitlist64 {
        <Bitlist64 as BitwisePairMut>::not(self)
    }
}

impl BitOrAssign<&Bitlist64> for Bitlist64 {
    fn bitor_assign(&mut self, other: &Bitlist64) {
        <Bitlist64 as BitwisePairMut>::bitor_assign(self, other);
    }
}

impl BitAndAssign<&Bitlist64> for Bitlist64 {
    fn bitand_assign(&mut self, other: &Bitlist64) {
        <Bitlist64 as BitwisePairMut>::bitand_assign(self, other);
    }
}

impl BitXorAssign<&Bitlist64> for Bitlist64 {
    fn bitxor_assign(&mut self, other: &Bitlist64) {
        <Bitlist64 as BitwisePairMut>::bitxor_assign(self, other);
    }
}
