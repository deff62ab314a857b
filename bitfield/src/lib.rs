//! Compact boolean sets packed into bytes and 64-bit words.
//!
//! Three vector disciplines share one capability set ([`Bitwise`], [`BitwiseMut`], ...):
//!
//! - [`Bitvector2`]: exactly two bits in a single byte.
//! - [`Bitlist`]: a declared length packed into words; single-bit access and counting only.
//! - [`Bitlist64`]: length derived from the word count; adds the canonical minimal-byte
//!   encoding, set algebra and index enumeration.
//!
//! Single-bit accessors never fail: reads past the end return `false` and writes past the
//! end are ignored. Pairwise operations on vectors of different lengths panic.

#[macro_use]
pub mod bit;
pub use bit::{BitLength, BitSupport, Bitwise, BitwiseMut, BitwisePair, BitwisePairMut, ToBytes, Word};

pub mod vec;
pub use vec::{Bitlist, Bitlist64, Bitvector2};

mod error;
pub use error::{BitfieldError, Result};

#[cfg(feature = "serde")]
mod serde;
