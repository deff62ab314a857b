use crate::bit::bitwise_for_words as words;
use crate::bit::words::{WORD_BIT_LEN, Word, WordAccessor, bit_len_of, word_count};
use crate::error::{BitfieldError, Result};
use crate::{BitLength, Bitwise, BitwiseMut};
use crate::{delegate_bitwise, delegate_bitwise_body};
use std::fmt;

/// A bit vector with a declared length, packed into 64-bit words.
///
/// The length is independent of the word count: the backing storage is rounded up to
/// whole words and the bits past the declared length (slack bits) always read as `false`
/// and can never be set. Only single-bit access and counting are supported; see
/// [`Bitlist64`](crate::Bitlist64) for set algebra and serialization.
///
/// ```
/// use bitfield::{BitLength, Bitlist, Bitwise, BitwiseMut};
///
/// let mut bits = Bitlist::new(10);
/// bits.set_bit_at(3, true);
/// bits.set_bit_at(12, true); // out of bounds, ignored
/// assert_eq!(bits.bit_len(), 10);
/// assert_eq!(bits.count(), 1);
/// assert!(bits.bit_at(3));
/// ```
#[must_use]
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bitlist {
    bit_length: u64,
    words: Vec<Word>,
}

impl AsRef<[Word]> for Bitlist {
    fn as_ref(&self) -> &[Word] {
        &self.words
    }
}

impl BitLength for Bitlist {
    fn bit_len(&self) -> u64 {
        self.bit_length
    }
}

delegate_bitwise!(Bitlist, words::BitwiseForWords);

// No public `AsMut<[Word]>`: writes go through the bounds check so slack bits stay clear.
impl BitwiseMut for Bitlist {
    #[inline]
    fn set_bit_at(&mut self, index: u64, to: bool) {
        if index < self.bit_length {
            WordAccessor::for_index(index).set_value_of(&mut self.words, to);
        }
    }

    #[inline]
    fn clear_bits(&mut self) {
        self.words.fill(0);
    }
}

impl Bitlist {
    /// Zeroed vector of exactly `bit_length` bits, backed by `ceil(bit_length / 64)` words.
    pub fn new(bit_length: u64) -> Bitlist {
        Bitlist {
            bit_length,
            words: vec![0; word_count(bit_length)],
        }
    }

    /// Wraps `words` as a vector of `words.len() * 64` bits.
    pub fn from_words(words: Vec<Word>) -> Bitlist {
        Bitlist {
            bit_length: bit_len_of(&words),
            words,
        }
    }

    /// Wraps `words` as a vector of `bit_length` bits, checking the storage layout.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::WordCount`] unless there are exactly `ceil(bit_length / 64)`
    /// words, and [`BitfieldError::SlackBitsSet`] if any bit past `bit_length` is set.
    pub fn from_words_with_len(bit_length: u64, words: Vec<Word>) -> Result<Bitlist> {
        let expected = word_count(bit_length);
        if words.len() != expected {
            log::debug!("rejecting {} word(s) for a {bit_length} bit list", words.len());
            return Err(BitfieldError::WordCount {
                bit_len: bit_length,
                expected,
                actual: words.len(),
            });
        }
        let used_bits = bit_length % WORD_BIT_LEN;
        if used_bits != 0 && words.last().is_some_and(|word| word >> used_bits != 0) {
            log::debug!("rejecting bit list with slack bits set past {bit_length}");
            return Err(BitfieldError::SlackBitsSet { bit_len: bit_length });
        }
        Ok(Bitlist { bit_length, words })
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    #[must_use]
    pub fn len(&self) -> u64 {
        self.bit_length
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bit_length == 0
    }
}

impl fmt::Display for Bitlist {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.bit_length {
            formatter.write_str(if self.bit_at(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
