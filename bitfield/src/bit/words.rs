pub type Word = u64;

/// Number of bits held by a single [`Word`].
pub const WORD_BIT_LEN: u64 = Word::BITS as u64;

/// Number of bytes in the little-endian encoding of a single [`Word`].
pub const WORD_BYTE_LEN: usize = size_of::<Word>();

/// Number of words required to hold `bit_count` bits, i.e. `ceil(bit_count / 64)`.
///
/// Never overflows, including for `bit_count` close to `u64::MAX`.
///
/// ```
/// use bitfield::bit::words::word_count;
///
/// assert_eq!(word_count(0), 0);
/// assert_eq!(word_count(64), 1);
/// assert_eq!(word_count(65), 2);
/// assert_eq!(word_count(u64::MAX), 1 << 58);
/// ```
#[inline]
#[must_use]
pub fn word_count(bit_count: u64) -> usize {
    // A `Vec<Word>` of this many words could never be allocated anyway.
    usize::try_from(bit_count.div_ceil(WORD_BIT_LEN)).unwrap_or(usize::MAX)
}

/// Logical length of a word-derived vector: every bit of every word.
#[inline]
#[must_use]
pub fn bit_len_of(words: &[Word]) -> u64 {
    words.len() as u64 * WORD_BIT_LEN
}

/// Isolates the least-significant set bit of `word` by two's-complement negation.
#[inline]
#[must_use]
pub const fn lowest_set_bit(word: Word) -> Word {
    word & word.wrapping_neg()
}

/// Translation of a bit index into the owning word and the in-word mask.
#[must_use]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct WordAccessor {
    word_index: usize,
    bitmask: Word,
}

impl WordAccessor {
    /// Locates `index` within a word array. No bounds check happens here; callers compare
    /// `index` against their logical length first.
    #[inline]
    pub fn for_index(index: u64) -> Self {
        Self {
            word_index: usize::try_from(index / WORD_BIT_LEN).unwrap_or(usize::MAX),
            bitmask: 1 << (index % WORD_BIT_LEN),
        }
    }

    #[inline]
    #[must_use]
    pub fn word_index(&self) -> usize {
        self.word_index
    }

    #[inline]
    #[must_use]
    pub fn bitmask(&self) -> Word {
        self.bitmask
    }

    /// Value of the addressed bit, or `false` when the word is not present.
    #[inline]
    #[must_use]
    pub fn value_of(&self, words: &[Word]) -> bool {
        words
            .get(self.word_index)
            .is_some_and(|word| word & self.bitmask == self.bitmask)
    }

    /// Sets or clears the addressed bit. Does nothing when the word is not present.
    #[inline]
    pub fn set_value_of(&self, words: &mut [Word], to: bool) {
        if let Some(word) = words.get_mut(self.word_index) {
            if to {
                *word |= self.bitmask;
            } else {
                *word &= !self.bitmask;
            }
        }
    }
}

/// Ascending indices of the set bits of a word slice.
///
/// Each step isolates the lowest set bit of the current word, reports
/// `word_index * 64 + trailing_zeros`, and clears that bit, so the cost is
/// proportional to the number of set bits rather than to the word width.
#[derive(Clone, Debug)]
pub struct SetBitIndices<'life> {
    words: &'life [Word],
    word_index: usize,
    current: Word,
}

impl<'life> SetBitIndices<'life> {
    pub fn new(words: &'life [Word]) -> Self {
        Self {
            words,
            word_index: 0,
            current: words.first().copied().unwrap_or(0),
        }
    }
}

impl Iterator for SetBitIndices<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        while self.current == 0 {
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
        let lowest = lowest_set_bit(self.current);
        self.current ^= lowest;
        Some(self.word_index as u64 * WORD_BIT_LEN + u64::from(lowest.trailing_zeros()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.count_ones() as usize
            + self
                .words
                .get(self.word_index + 1..)
                .map_or(0, |rest| rest.iter().map(|word| word.count_ones() as usize).sum());
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for SetBitIndices<'_> {}

impl std::iter::FusedIterator for SetBitIndices<'_> {}

/// Little-endian encoding of `words` with trailing zero bytes removed.
///
/// Only the most-significant nonzero word can contribute zero bytes to the trimmed tail,
/// so the result is computed from its leading-zero count. All-zero input encodes as an
/// empty vector.
#[must_use]
pub fn trimmed_le_bytes(words: &[Word]) -> Vec<u8> {
    let Some(last_nonzero) = words.iter().rposition(|word| *word != 0) else {
        return Vec::new();
    };
    let significant = &words[..=last_nonzero];
    let mut bytes = Vec::with_capacity(significant.len() * WORD_BYTE_LEN);
    for word in significant {
        bytes.extend_from_slice(&word.to_le_bytes());
    }
    let zero_tail = (significant[last_nonzero].leading_zeros() / u8::BITS) as usize;
    bytes.truncate(bytes.len() - zero_tail);
    bytes
}

/// Reassembles little-endian `bytes` into exactly `word_count` words, zero-extending.
///
/// Returns `None` when `bytes` does not fit into `word_count` words.
#[must_use]
pub fn words_from_le_bytes(bytes: &[u8], word_count: usize) -> Option<Vec<Word>> {
    if bytes.len() > word_count.checked_mul(WORD_BYTE_LEN)? {
        return None;
    }
    let mut words = vec![0; word_count];
    for (word, chunk) in words.iter_mut().zip(bytes.chunks(WORD_BYTE_LEN)) {
        let mut buffer = [0u8; WORD_BYTE_LEN];
        buffer[..chunk.len()].copy_from_slice(chunk);
        *word = Word::from_le_bytes(buffer);
    }
    Some(words)
}
