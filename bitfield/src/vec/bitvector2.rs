use crate::error::{BitfieldError, Result};
use crate::{BitLength, BitSupport, Bitwise, BitwiseMut, ToBytes};
use derive_more::{Deref, From, Into};
use sorted_iter::assume::AssumeSortedByItemExt;
use std::fmt;

const BYTE_LEN: usize = 1;
const BIT_LEN: u64 = 2;
const MASK: u8 = 0b11;
const MAX_SHIFT: i64 = 2;

/// A bit vector of exactly two bits stored in the low bits of a single byte.
///
/// The backing bytes are a raw view that may come from untrusted data, so every operation
/// checks the layout first: when the storage is not exactly one byte, reads return
/// `false`, writes are ignored and no index is reported. [`count`](Bitwise::count) and
/// [`bytes`](ToBytes::bytes) only look at the first byte and return nothing for empty
/// storage. The length is always 2, whatever the storage.
///
/// ```
/// use bitfield::{Bitvector2, Bitwise, ToBytes};
///
/// let mut bits = Bitvector2::from(vec![0x03]);
/// assert_eq!(bits.count(), 2);
/// assert_eq!(bits.bytes(), vec![0x03]);
/// bits.shift(1);
/// assert_eq!(bits.bytes(), vec![0x02]);
/// ```
#[must_use]
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deref, From, Into)]
pub struct Bitvector2(Vec<u8>);

impl Default for Bitvector2 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<[u8]> for Bitvector2 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Bitvector2 {
    pub fn new() -> Bitvector2 {
        Bitvector2(vec![0; BYTE_LEN])
    }

    /// Wraps raw storage without any check.
    pub fn from_raw(bytes: Vec<u8>) -> Bitvector2 {
        Bitvector2(bytes)
    }

    /// Decodes the canonical single-byte form.
    ///
    /// # Errors
    ///
    /// Returns [`BitfieldError::ByteLength`] unless `bytes` holds exactly one byte, and
    /// [`BitfieldError::SlackBitsSet`] if any bit above the low two is set.
    pub fn from_bytes(bytes: &[u8]) -> Result<Bitvector2> {
        let &[byte] = bytes else {
            log::debug!("rejecting {} byte 2-bit vector", bytes.len());
            return Err(BitfieldError::ByteLength {
                expected: BYTE_LEN,
                actual: bytes.len(),
            });
        };
        if byte & !MASK != 0 {
            log::debug!("rejecting 2-bit vector {byte:#04x} with high bits set");
            return Err(BitfieldError::SlackBitsSet { bit_len: BIT_LEN });
        }
        Ok(Bitvector2(vec![byte]))
    }

    /// Shifts left by `shift` for non-negative values and right otherwise, then drops the
    /// bits that left the two-bit field. Magnitudes past 2 behave like 2. Does nothing on
    /// empty storage.
    pub fn shift(&mut self, shift: i64) {
        let Some(byte) = self.0.first_mut() else {
            return;
        };
        let clamped = shift.clamp(-MAX_SHIFT, MAX_SHIFT);
        if clamped >= 0 {
            *byte <<= clamped;
        } else {
            *byte >>= -clamped;
        }
        *byte &= MASK;
    }

    /// Number of bits, always 2. Shadows the byte count of the dereferenced storage.
    #[must_use]
    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> u64 {
        BIT_LEN
    }

    fn single_byte(&self) -> Option<u8> {
        match self.0.as_slice() {
            &[byte] => Some(byte),
            _ => None,
        }
    }
}

impl BitLength for Bitvector2 {
    fn bit_len(&self) -> u64 {
        BIT_LEN
    }
}

impl Bitwise for Bitvector2 {
    #[inline]
    fn bit_at(&self, index: u64) -> bool {
        index < BIT_LEN && self.single_byte().is_some_and(|byte| byte & (1 << index) != 0)
    }

    #[inline]
    fn count(&self) -> u64 {
        self.0.first().map_or(0, |byte| u64::from((byte & MASK).count_ones()))
    }
}

impl BitwiseMut for Bitvector2 {
    #[inline]
    fn set_bit_at(&mut self, index: u64, to: bool) {
        if index >= BIT_LEN {
            return;
        }
        if let [byte] = self.0.as_mut_slice() {
            let bit = 1 << index;
            if to {
                *byte |= bit;
            } else {
                *byte &= !bit;
            }
        }
    }

    #[inline]
    fn clear_bits(&mut self) {
        if let [byte] = self.0.as_mut_slice() {
            *byte = 0;
        }
    }
}

impl BitSupport for Bitvector2 {
    fn support(&self) -> impl sorted_iter::SortedIterator<Item = u64> {
        (0..BIT_LEN).filter(|index| self.bit_at(*index)).assume_sorted_by_item()
    }
}

impl ToBytes for Bitvector2 {
    fn bytes(&self) -> Vec<u8> {
        self.0.first().map(|byte| byte & MASK).into_iter().collect()
    }
}

impl fmt::Display for Bitvector2 {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..BIT_LEN {
            formatter.write_str(if self.bit_at(index) { "1" } else { "0" })?;
        }
        Ok(())
    }
}
