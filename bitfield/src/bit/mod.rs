#[macro_use]
pub mod bitwise;

pub use bitwise::{BitLength, BitSupport, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, ToBytes};
pub use words::{SetBitIndices, WORD_BIT_LEN, WORD_BYTE_LEN, Word, WordAccessor, word_count};

pub mod bitwise_for_words;
pub mod words;
