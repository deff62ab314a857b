/// Rejection of raw input on the decoding and validated-construction paths.
///
/// Mismatched operand lengths in set algebra are programmer errors and panic instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BitfieldError {
    #[error("expected {expected} byte(s), got {actual}")]
    ByteLength { expected: usize, actual: usize },

    #[error("encoding of {actual} bytes does not fit into {max} bytes")]
    TooManyBytes { max: usize, actual: usize },

    #[error("{bit_len} bits require {expected} word(s), got {actual}")]
    WordCount { bit_len: u64, expected: usize, actual: usize },

    #[error("bits at or beyond length {bit_len} are set")]
    SlackBitsSet { bit_len: u64 },
}

pub type Result<T> = std::result::Result<T, BitfieldError>;
