/// convert.rs
///
/// File containing the conversions between bit vectors, primitive scalars,
/// characters, floats and byte buffers.
///
/// Conversions that can not lose information are `From` impls. Conversions
/// that can are either `TryFrom` impls, which reject values outside
/// `[-2^(W-1), 2^W)` and never saturate, or explicit truncating calls
/// (`truncating`, `truncate_from`) that keep the low-order bits.
///
/// | source                    | target          | rule                  |
/// |---------------------------|-----------------|-----------------------|
/// | signed int, width <= W    | vector W        | sign-follows-source   |
/// | unsigned int, width <= W  | vector W        | zero-extend           |
/// | int, width > W            | vector W        | checked, then truncate-low-bits |
/// | float                     | vector W        | round toward zero, checked, then truncate-low-bits |
/// | vector W' < W             | vector W        | zero-extend           |
/// | vector W' > W             | vector W        | truncate-low-bits (explicit) |
/// | vector W                  | int, width >= W | signed: sign-follows-source, unsigned: zero-extend |
use super::errors::BitsError;
use super::math::{fits_width, truncate_float};
use super::types::Word;
use super::vector::FixedBitVector;

impl<W: Word> FixedBitVector<W> {
    /// Keeps the low `BIT_COUNT` bits of any integer. Never fails.
    pub fn truncating<T: Into<i128>>(value: T) -> Self {
        Self::from_scalar(W::truncate(value.into()))
    }

    /// Accepts `value` if it has a signed or unsigned representation in
    /// `BIT_COUNT` bits.
    fn checked(value: i128) -> Result<Self, BitsError> {
        if fits_width(value, W::BITS) {
            Ok(Self::from_scalar(W::truncate(value)))
        } else {
            Err(BitsError::OutOfRange { width: W::BITS })
        }
    }

    /// Rounds a float toward zero and stores the integer.
    /// Returns a Result with `InvalidValue` for NaN and infinities, or `OutOfRange`
    /// if the integer has no representation in `BIT_COUNT` bits.
    pub fn from_float(value: f64) -> Result<Self, BitsError> {
        truncate_float(value, W::BITS).map(|integer| Self::from_scalar(W::truncate(integer)))
    }

    /// Converts from a vector of any width, keeping the low-order bits of a
    /// wider source and clearing the high-order bits for a narrower one.
    pub fn truncate_from<V: Word>(other: FixedBitVector<V>) -> Self {
        Self::from_scalar(W::truncate(other.scalar().zero_extend()))
    }

    /// Like `truncate_from`, but a narrower source fills the high-order bits
    /// with its sign bit.
    pub fn sign_extend_from<V: Word>(other: FixedBitVector<V>) -> Self {
        Self::from_scalar(W::truncate(other.scalar().sign_extend()))
    }
}

macro_rules! implement_from_narrow {
    ($word:ty; $($source:ty),*) => {
        $(
            impl From<$source> for FixedBitVector<$word> {
                fn from(value: $source) -> Self {
                    Self::from_scalar(value as $word)
                }
            }
        )*
    };
}

macro_rules! implement_try_from_wide {
    ($word:ty; $($source:ty),*) => {
        $(
            impl TryFrom<$source> for FixedBitVector<$word> {
                type Error = BitsError;

                fn try_from(value: $source) -> Result<Self, BitsError> {
                    Self::checked(value as i128)
                }
            }
        )*

        impl TryFrom<u128> for FixedBitVector<$word> {
            type Error = BitsError;

            fn try_from(value: u128) -> Result<Self, BitsError> {
                let value = i128::try_from(value).map_err(|_| BitsError::OutOfRange {
                    width: <$word as Word>::BITS,
                })?;
                Self::checked(value)
            }
        }
    };
}

macro_rules! implement_into_ints {
    ($word:ty; signed: $($signed:ty),*; unsigned: $($unsigned:ty),*) => {
        $(
            impl From<FixedBitVector<$word>> for $signed {
                fn from(value: FixedBitVector<$word>) -> Self {
                    value.scalar() as $signed
                }
            }
        )*
        $(
            impl From<FixedBitVector<$word>> for $unsigned {
                fn from(value: FixedBitVector<$word>) -> Self {
                    value.unsigned() as $unsigned
                }
            }
        )*
    };
}

macro_rules! implement_bytes {
    ($word:ty, $bytes:literal) => {
        impl From<[u8; $bytes]> for FixedBitVector<$word> {
            fn from(bytes: [u8; $bytes]) -> Self {
                Self::from_scalar(<$word>::from_le_bytes(bytes))
            }
        }

        impl From<FixedBitVector<$word>> for [u8; $bytes] {
            fn from(value: FixedBitVector<$word>) -> Self {
                value.to_le_bytes()
            }
        }
    };
}

macro_rules! implement_widening {
    ($($narrow:ty => $wide:ty),*) => {
        $(
            impl From<FixedBitVector<$narrow>> for FixedBitVector<$wide> {
                fn from(value: FixedBitVector<$narrow>) -> Self {
                    Self::truncate_from(value)
                }
            }
        )*
    };
}

implement_from_narrow!(i8; i8, u8);
implement_from_narrow!(i16; i8, u8, i16, u16);
implement_from_narrow!(i32; i8, u8, i16, u16, i32, u32);
implement_from_narrow!(i64; i8, u8, i16, u16, i32, u32, i64, u64);

implement_try_from_wide!(i8; i16, u16, i32, u32, i64, u64, i128, isize, usize);
implement_try_from_wide!(i16; i32, u32, i64, u64, i128, isize, usize);
implement_try_from_wide!(i32; i64, u64, i128, isize, usize);
implement_try_from_wide!(i64; i128, isize, usize);

implement_into_ints!(i8; signed: i8, i16, i32, i64, i128; unsigned: u8, u16, u32, u64, u128);
implement_into_ints!(i16; signed: i16, i32, i64, i128; unsigned: u16, u32, u64, u128);
implement_into_ints!(i32; signed: i32, i64, i128; unsigned: u32, u64, u128);
implement_into_ints!(i64; signed: i64, i128; unsigned: u64, u128);

implement_bytes!(i8, 1);
implement_bytes!(i16, 2);
implement_bytes!(i32, 4);
implement_bytes!(i64, 8);

implement_widening!(i8 => i16, i8 => i32, i8 => i64, i16 => i32, i16 => i64, i32 => i64);

impl<W: Word> TryFrom<f64> for FixedBitVector<W> {
    type Error = BitsError;

    fn try_from(value: f64) -> Result<Self, BitsError> {
        Self::from_float(value)
    }
}

impl<W: Word> TryFrom<f32> for FixedBitVector<W> {
    type Error = BitsError;

    fn try_from(value: f32) -> Result<Self, BitsError> {
        Self::from_float(f64::from(value))
    }
}

impl From<FixedBitVector<i32>> for f32 {
    fn from(value: FixedBitVector<i32>) -> Self {
        value.scalar() as f32
    }
}

impl From<FixedBitVector<i64>> for f64 {
    fn from(value: FixedBitVector<i64>) -> Self {
        value.scalar() as f64
    }
}

impl From<FixedBitVector<i32>> for f64 {
    fn from(value: FixedBitVector<i32>) -> Self {
        f64::from(value.scalar())
    }
}

impl TryFrom<char> for FixedBitVector<i8> {
    type Error = BitsError;

    fn try_from(value: char) -> Result<Self, BitsError> {
        let code = u8::try_from(u32::from(value)).map_err(|_| BitsError::OutOfRange { width: 8 })?;
        Ok(Self::from(code))
    }
}

impl TryFrom<char> for FixedBitVector<i16> {
    type Error = BitsError;

    fn try_from(value: char) -> Result<Self, BitsError> {
        let code = u16::try_from(u32::from(value)).map_err(|_| BitsError::OutOfRange { width: 16 })?;
        Ok(Self::from(code))
    }
}

impl From<char> for FixedBitVector<i32> {
    fn from(value: char) -> Self {
        Self::from(u32::from(value))
    }
}

impl From<char> for FixedBitVector<i64> {
    fn from(value: char) -> Self {
        Self::from(u32::from(value))
    }
}

impl From<FixedBitVector<i8>> for char {
    fn from(value: FixedBitVector<i8>) -> Self {
        char::from(value.unsigned())
    }
}

/// Surrogate code units have no `char` and fail with `InvalidValue`.
impl TryFrom<FixedBitVector<i16>> for char {
    type Error = BitsError;

    fn try_from(value: FixedBitVector<i16>) -> Result<Self, BitsError> {
        char::from_u32(u32::from(value.unsigned())).ok_or(BitsError::InvalidValue)
    }
}

impl<'a, W: Word> TryFrom<&'a [bool]> for FixedBitVector<W> {
    type Error = BitsError;

    fn try_from(bits: &'a [bool]) -> Result<Self, BitsError> {
        Self::from_bits(bits)
    }
}

impl<'a, W: Word> TryFrom<&'a [u8]> for FixedBitVector<W> {
    type Error = BitsError;

    fn try_from(bytes: &'a [u8]) -> Result<Self, BitsError> {
        Self::from_bytes(bytes)
    }
}

impl<W: Word> From<FixedBitVector<W>> for Vec<bool> {
    fn from(value: FixedBitVector<W>) -> Self {
        value.bits()
    }
}

impl<W: Word> From<FixedBitVector<W>> for Vec<u8> {
    fn from(value: FixedBitVector<W>) -> Self {
        value.to_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Bit8 = FixedBitVector<i8>;
    type Bit16 = FixedBitVector<i16>;
    type Bit32 = FixedBitVector<i32>;
    type Bit64 = FixedBitVector<i64>;

    #[test]
    fn test_from_same_width() {
        assert_eq!(-1, Bit8::from(0xFF_u8).scalar());
        assert_eq!(0xFF_u8, Bit8::from(-1_i8).unsigned());
        assert_eq!(i32::MIN, Bit32::from(0x8000_0000_u32).scalar());
        assert_eq!(u64::MAX, u64::from(Bit64::from(-1_i64)));
        assert_eq!(-7_i16, i16::from(Bit16::from(-7_i16)));
    }

    #[test]
    fn test_from_narrow() {
        // Signed sources carry their sign, unsigned sources are zero-extended.
        assert_eq!(-1, Bit16::from(-1_i8).scalar());
        assert_eq!(0xFF, Bit16::from(0xFF_u8).scalar());
        assert_eq!(-2, Bit64::from(-2_i32).scalar());
        assert_eq!(0xFFFF_FFFE, Bit64::from(0xFFFF_FFFE_u32).scalar());
    }

    #[test]
    fn test_try_from_wide() {
        assert_eq!(Ok(-56), Bit8::try_from(200_i32).map(|v| v.scalar()));
        assert_eq!(Ok(-128), Bit8::try_from(-128_i64).map(|v| v.scalar()));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), Bit8::try_from(256_u16));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), Bit8::try_from(-129_i32));
        assert_eq!(Ok(-1), Bit32::try_from(u32::MAX as u64).map(|v| v.scalar()));
        assert_eq!(Err(BitsError::OutOfRange { width: 64 }), Bit64::try_from(u128::MAX));
        assert_eq!(Ok(-1), Bit64::try_from(u64::MAX as u128).map(|v| v.scalar()));
        assert_eq!(Ok(3), Bit16::try_from(3_usize).map(|v| v.scalar()));
    }

    #[test]
    fn test_truncating() {
        assert_eq!(-1, Bit8::truncating(0x1FF_i16).scalar());
        assert_eq!(0x5678, Bit16::truncating(0x1234_5678_i64).scalar());
        assert_eq!(0, Bit8::truncating(256_u32).scalar());
        assert_eq!(-1, Bit32::truncating(-1_i8).scalar());
    }

    #[test]
    fn test_cross_width() {
        let wide = Bit16::from(0x1FF_i16);
        assert_eq!(-1, Bit8::truncate_from(wide).scalar());

        let narrow = Bit8::from(-1_i8);
        assert_eq!(0xFF, Bit16::from(narrow).scalar());
        assert_eq!(0xFF, Bit64::from(narrow).scalar());
        assert_eq!(-1, Bit64::sign_extend_from(narrow).scalar());
        assert_eq!(0xFFFF, Bit32::from(Bit16::from(-1_i16)).scalar());
        assert_eq!(-1, Bit32::truncate_from(Bit64::from(-1_i64)).scalar());
        assert_eq!(narrow, Bit8::truncate_from(narrow));
    }

    #[test]
    fn test_floats() {
        assert_eq!(Ok(3), Bit32::try_from(3.99_f32).map(|v| v.scalar()));
        assert_eq!(Ok(-3), Bit32::try_from(-3.99_f64).map(|v| v.scalar()));
        assert_eq!(Ok(-1), Bit8::try_from(255.0_f64).map(|v| v.scalar()));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), Bit8::try_from(300.0_f32));
        assert_eq!(Err(BitsError::InvalidValue), Bit16::try_from(f32::NAN));
        assert_eq!(Err(BitsError::InvalidValue), Bit64::try_from(f64::NEG_INFINITY));
        assert_eq!(
            Err(BitsError::OutOfRange { width: 32 }),
            Bit32::try_from(5_000_000_000.0_f64)
        );

        assert_eq!(-12.0_f32, f32::from(Bit32::from(-12_i32)));
        assert_eq!(1024.0_f64, f64::from(Bit64::from(1024_i64)));
        assert_eq!(-1.0_f64, f64::from(Bit32::from(-1_i32)));
    }

    #[test]
    fn test_chars() {
        assert_eq!(Ok(0x41), Bit8::try_from('A').map(|v| v.scalar()));
        assert_eq!(Ok(-23), Bit8::try_from('é').map(|v| v.scalar()));
        assert_eq!(Err(BitsError::OutOfRange { width: 8 }), Bit8::try_from('Ж'));
        assert_eq!(Ok(0x0416), Bit16::try_from('Ж').map(|v| v.scalar()));
        assert_eq!(Err(BitsError::OutOfRange { width: 16 }), Bit16::try_from('😀'));
        assert_eq!(0x1F600, Bit32::from('😀').scalar());
        assert_eq!(0x1F600, Bit64::from('😀').scalar());

        assert_eq!('é', char::from(Bit8::from(-23_i8)));
        assert_eq!(Ok('Ж'), char::try_from(Bit16::from(0x0416_u16)));
        assert_eq!(Err(BitsError::InvalidValue), char::try_from(Bit16::from(0xD800_u16)));
    }

    #[test]
    fn test_bytes_and_bits() {
        assert_eq!([0x78, 0x56, 0x34, 0x12], <[u8; 4]>::from(Bit32::from(0x1234_5678_i32)));
        assert_eq!(0x1234, Bit16::from([0x34_u8, 0x12]).scalar());
        assert_eq!(vec![0xFE, 0xFF], Vec::<u8>::from(Bit16::from(-2_i16)));

        let bytes: &[u8] = &[1, 2, 3];
        assert_eq!(
            Err(BitsError::TooManyBytes {
                provided: 3,
                width: 2
            }),
            Bit16::try_from(bytes)
        );
        let bits: &[bool] = &[true, true];
        assert_eq!(Ok(3), Bit8::try_from(bits).map(|v| v.scalar()));
        assert_eq!(vec![true, true, false, false, false, false, false, false], Vec::<bool>::from(Bit8::from(3_i8)));
    }

    #[test]
    fn test_into_wider_ints() {
        let vector = Bit8::from(-2_i8);
        assert_eq!(-2_i64, i64::from(vector));
        assert_eq!(0xFE_u32, u32::from(vector));
        assert_eq!(0xFFFE_u128, u128::from(Bit16::from(-2_i16)));
        assert_eq!(-2_i128, i128::from(Bit32::from(-2_i32)));
    }
}
