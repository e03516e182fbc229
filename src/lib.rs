//! Fixed-width bit vectors over `i8`, `i16`, `i32` and `i64`.
//!
//! A `FixedBitVector` keeps one signed scalar and exposes it as an ordered
//! sequence of bits, least significant first. Bits can be read and assigned by
//! index, combined with the bitwise operators, parsed from `0`/`1`/`t`/`f`
//! lines and converted to and from primitive scalars, characters, floats and
//! little-endian byte buffers.
pub const BITS_IN_BYTE: usize = 8;

pub mod convert;
pub mod errors;
pub mod io;
mod math;
pub mod parse;
pub mod traits;
pub mod types;
pub mod vector;

pub use errors::{BitsError, StreamError};
pub use io::{ReadBitsExt, WriteBitsExt};
pub use traits::{Bitable, Byteable};
pub use types::Word;
pub use vector::{FixedBitVector, Iter};

macro_rules! width_aliases {
    ($($bits:literal => $word:ty),*) => {
        paste::paste! {
            $(
                #[doc = concat!("Bit vector over a ", stringify!($bits), "-bit scalar.")]
                pub type [<Bit $bits>] = FixedBitVector<$word>;
            )*
        }
    };
}

width_aliases!(8 => i8, 16 => i16, 32 => i32, 64 => i64);
