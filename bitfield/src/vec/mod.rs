mod bitlist;
mod bitlist64;
mod bitvector2;

pub use bitlist::Bitlist;
pub use bitlist64::Bitlist64;
pub use bitvector2::Bitvector2;
