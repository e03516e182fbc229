/// types.rs
///
/// File containing the `Word` trait implemented by the four scalar types a
/// bit vector can be built over, along with the per-width mask tables.
use core::fmt;
use core::hash::Hash;
use core::ops::{BitAnd, BitOr, BitXor, Not};

use super::math::combine_halves;

mod sealed {
    pub trait Sealed {}
}

/// Signed scalar backing a `FixedBitVector`. Implemented for `i8`, `i16`,
/// `i32` and `i64` only.
pub trait Word:
    sealed::Sealed
    + Copy
    + Default
    + Eq
    + Ord
    + Hash
    + fmt::Debug
    + fmt::Display
    + Not<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Unsigned integer sharing the bit pattern of the scalar.
    type Unsigned: Copy + Eq + fmt::Debug + fmt::Binary;
    /// Little-endian byte array of length `BYTES`.
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Copy + Default;

    const BITS: usize;
    const BYTES: usize;
    const ZERO: Self;
    const MIN: Self;
    const MAX: Self;

    /// `BIT[i] = 1 << i`.
    fn bit_masks() -> &'static [Self];
    /// `NOT_BIT[i] = !(1 << i)`.
    fn clear_masks() -> &'static [Self];

    fn to_unsigned(self) -> Self::Unsigned;
    fn from_unsigned(value: Self::Unsigned) -> Self;
    fn to_le_bytes(self) -> Self::Bytes;
    fn from_le_bytes(bytes: Self::Bytes) -> Self;

    /// Widens the scalar, copying the sign bit into the high bits.
    fn sign_extend(self) -> i128;
    /// Widens the scalar, filling the high bits with zeros.
    fn zero_extend(self) -> i128;
    /// Keeps the low `BITS` bits of `value`.
    fn truncate(value: i128) -> Self;

    /// Hash code of the scalar. Widths up to 32 bits use the bit pattern
    /// directly, 64-bit scalars mix their two halves.
    fn hash_code(self) -> i32 {
        let wide = self.sign_extend() as i64;
        if Self::BITS <= 32 {
            wide as i32
        } else {
            combine_halves(wide as u32, (wide >> 32) as u32) as i32
        }
    }
}

macro_rules! implement_word {
    ($word:ty, $unsigned:ty, $bits:literal, $bytes:literal) => {
        const _: () = assert!($bits == $bytes * crate::BITS_IN_BYTE);

        paste::paste! {
            static [<BIT_MASKS_ $bits>]: [$word; $bits] = {
                let mut masks = [0; $bits];
                let mut index = 0;
                while index < $bits {
                    masks[index] = ((1 as $unsigned) << index) as $word;
                    index += 1;
                }
                masks
            };

            static [<CLEAR_MASKS_ $bits>]: [$word; $bits] = {
                let mut masks = [0; $bits];
                let mut index = 0;
                while index < $bits {
                    masks[index] = !(((1 as $unsigned) << index) as $word);
                    index += 1;
                }
                masks
            };

            impl sealed::Sealed for $word {}

            impl Word for $word {
                type Unsigned = $unsigned;
                type Bytes = [u8; $bytes];

                const BITS: usize = $bits;
                const BYTES: usize = $bytes;
                const ZERO: Self = 0;
                const MIN: Self = <$word>::MIN;
                const MAX: Self = <$word>::MAX;

                #[inline]
                fn bit_masks() -> &'static [Self] {
                    &[<BIT_MASKS_ $bits>]
                }

                #[inline]
                fn clear_masks() -> &'static [Self] {
                    &[<CLEAR_MASKS_ $bits>]
                }

                #[inline]
                fn to_unsigned(self) -> $unsigned {
                    self as $unsigned
                }

                #[inline]
                fn from_unsigned(value: $unsigned) -> Self {
                    value as $word
                }

                #[inline]
                fn to_le_bytes(self) -> [u8; $bytes] {
                    <$word>::to_le_bytes(self)
                }

                #[inline]
                fn from_le_bytes(bytes: [u8; $bytes]) -> Self {
                    <$word>::from_le_bytes(bytes)
                }

                #[inline]
                fn sign_extend(self) -> i128 {
                    self as i128
                }

                #[inline]
                fn zero_extend(self) -> i128 {
                    self as $unsigned as i128
                }

                #[inline]
                fn truncate(value: i128) -> Self {
                    value as $word
                }
            }
        }
    };
}

implement_word!(i8, u8, 8, 1);
implement_word!(i16, u16, 16, 2);
implement_word!(i32, u32, 32, 4);
implement_word!(i64, u64, 64, 8);
