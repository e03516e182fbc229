/// vector.rs
///
/// Module containing `FixedBitVector`, a fixed-width view of a signed scalar
/// as an ordered sequence of bits (least significant bit first).
use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Index, Not};

use super::errors::BitsError;
use super::traits::{Bitable, Byteable};
use super::types::Word;

/// Bit vector over a scalar of width `W::BITS`.
///
/// The scalar is the only stored state; every bit observed through `get`,
/// `bits` or iteration is read from it, so the scalar and the bit sequence
/// always agree. Equality and ordering follow the signed scalar.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct FixedBitVector<W: Word> {
    scalar: W,
}

impl<W: Word> FixedBitVector<W> {
    /// Number of bits held by the vector.
    pub const BIT_COUNT: usize = W::BITS;
    /// Size of the scalar in bytes.
    pub const SIZE: usize = W::BYTES;
    pub const MIN: W = W::MIN;
    pub const MAX: W = W::MAX;

    /// Creates a vector with every bit cleared.
    pub fn new() -> Self {
        Self { scalar: W::ZERO }
    }

    pub fn from_scalar(scalar: W) -> Self {
        Self { scalar }
    }

    /// Creates a vector from the unsigned integer with the same bit pattern.
    pub fn from_unsigned(value: W::Unsigned) -> Self {
        Self::from_scalar(W::from_unsigned(value))
    }

    /// Creates a vector from an explicit bit sequence, index 0 being the least
    /// significant bit. Missing high-order bits are cleared.
    /// # Arguments:
    /// * bits: At most `BIT_COUNT` bits.
    /// Returns a Result with the vector, or `TooManyBits` if the sequence is longer than the vector.
    pub fn from_bits(bits: &[bool]) -> Result<Self, BitsError> {
        if bits.len() > W::BITS {
            return Err(BitsError::TooManyBits {
                provided: bits.len(),
                width: W::BITS,
            });
        }

        Ok(Self::from_scalar(Self::pack(bits.iter().copied())))
    }

    /// Creates a vector from any value exposing a bit sequence. Bits past
    /// `BIT_COUNT` or past the source's `bit_len` are dropped and missing bits
    /// are cleared.
    pub fn from_bitable<B: Bitable + ?Sized>(bitable: &B) -> Self {
        let length = bitable.bit_len();
        let bits = (0..W::BITS).map(|index| index < length && bitable.bit(index).unwrap_or(false));
        Self::from_scalar(Self::pack(bits))
    }

    /// Creates a vector from a little-endian byte buffer. Missing high-order
    /// bytes are zero.
    /// # Arguments:
    /// * bytes: At most `SIZE` bytes.
    /// Returns a Result with the vector, or `TooManyBytes` if the buffer is longer than the scalar.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, BitsError> {
        if bytes.len() > W::BYTES {
            return Err(BitsError::TooManyBytes {
                provided: bytes.len(),
                width: W::BYTES,
            });
        }

        let mut buffer = W::Bytes::default();
        buffer.as_mut()[..bytes.len()].copy_from_slice(bytes);
        Ok(Self::from_scalar(W::from_le_bytes(buffer)))
    }

    /// Creates a vector from any value exposing a byte sequence. Bytes past
    /// `SIZE` or past the source's `byte_len` are dropped and missing bytes
    /// are zero.
    pub fn from_byteable<B: Byteable + ?Sized>(byteable: &B) -> Self {
        let length = byteable.byte_len();
        let mut buffer = W::Bytes::default();
        for (index, byte) in buffer.as_mut().iter_mut().enumerate().take(length) {
            *byte = byteable.byte(index).unwrap_or(0);
        }
        Self::from_scalar(W::from_le_bytes(buffer))
    }

    /// ORs the mask of every set position into a scalar.
    fn pack<I: Iterator<Item = bool>>(bits: I) -> W {
        let masks = W::bit_masks();
        bits.zip(masks)
            .filter(|(bit, _)| *bit)
            .fold(W::ZERO, |scalar, (_, mask)| scalar | *mask)
    }

    #[inline]
    pub fn scalar(&self) -> W {
        self.scalar
    }

    #[inline]
    pub fn unsigned(&self) -> W::Unsigned {
        self.scalar.to_unsigned()
    }

    /// Returns a copy of the bit sequence, least significant bit first.
    pub fn bits(&self) -> Vec<bool> {
        self.iter().collect()
    }

    pub fn to_le_bytes(&self) -> W::Bytes {
        self.scalar.to_le_bytes()
    }

    pub fn to_bytes(&self) -> Vec<u8> {
        self.to_le_bytes().as_ref().to_vec()
    }

    pub fn iter(&self) -> Iter<W> {
        Iter {
            vector: *self,
            front: 0,
            back: W::BITS,
        }
    }

    #[inline]
    fn check_index(index: usize) -> Result<(), BitsError> {
        if index < W::BITS {
            Ok(())
        } else {
            Err(BitsError::IndexOutOfRange {
                index,
                width: W::BITS,
            })
        }
    }

    #[inline]
    fn bit_at(&self, index: usize) -> bool {
        self.scalar & W::bit_masks()[index] != W::ZERO
    }

    /// Method to retrieve a single bit.
    /// Returns a Result with the bit, or `IndexOutOfRange` if `index >= BIT_COUNT`.
    pub fn get(&self, index: usize) -> Result<bool, BitsError> {
        Self::check_index(index)?;
        Ok(self.bit_at(index))
    }

    /// Method to assign a single bit. The scalar is updated with one mask
    /// operation: OR with `BIT[index]` to set, AND with `NOT_BIT[index]` to clear.
    /// Returns a Result with `IndexOutOfRange` if `index >= BIT_COUNT`, leaving the vector untouched.
    pub fn set(&mut self, index: usize, value: bool) -> Result<(), BitsError> {
        Self::check_index(index)?;
        if value {
            self.scalar = self.scalar | W::bit_masks()[index];
        } else {
            self.scalar = self.scalar & W::clear_masks()[index];
        }
        Ok(())
    }

    /// Flips a single bit.
    pub fn toggle(&mut self, index: usize) -> Result<(), BitsError> {
        let current = self.get(index)?;
        self.set(index, !current)
    }

    /// Three-way comparison where an absent operand is lower than any vector
    /// and two absent operands are equal.
    pub fn compare(x: Option<&Self>, y: Option<&Self>) -> Ordering {
        x.cmp(&y)
    }

    /// Equality where an absent operand differs from any vector and two
    /// absent operands are equal.
    pub fn equals(x: Option<&Self>, y: Option<&Self>) -> bool {
        x == y
    }

    pub fn hash_code(&self) -> i32 {
        self.scalar.hash_code()
    }
}

impl<W: Word> Hash for FixedBitVector<W> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_i32(self.hash_code());
    }
}

impl<W: Word> Index<usize> for FixedBitVector<W> {
    type Output = bool;

    /// Panics when `index >= BIT_COUNT`; use `get` for a checked read.
    fn index(&self, index: usize) -> &bool {
        match self.get(index) {
            Ok(true) => &true,
            Ok(false) => &false,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<W: Word> Not for FixedBitVector<W> {
    type Output = Self;

    /// Flips every bit. This is the boolean complement of each position, not
    /// arithmetic negation.
    fn not(self) -> Self {
        Self::from_scalar(!self.scalar)
    }
}

impl<W: Word> Not for &FixedBitVector<W> {
    type Output = FixedBitVector<W>;

    fn not(self) -> FixedBitVector<W> {
        !*self
    }
}

macro_rules! implement_binary_operator {
    ($trait:ident, $op:tt) => {
        paste::paste! {
            impl<W: Word> $trait for FixedBitVector<W> {
                type Output = Self;

                fn [<$trait:lower>](self, other: Self) -> Self {
                    Self::from_scalar(self.scalar $op other.scalar)
                }
            }

            impl<'a, W: Word> $trait<&'a FixedBitVector<W>> for &'a FixedBitVector<W> {
                type Output = FixedBitVector<W>;

                fn [<$trait:lower>](self, other: &'a FixedBitVector<W>) -> FixedBitVector<W> {
                    *self $op *other
                }
            }

            impl<W: Word> [<$trait Assign>] for FixedBitVector<W> {
                fn [<$trait:lower _assign>](&mut self, other: Self) {
                    self.scalar = self.scalar $op other.scalar;
                }
            }
        }
    };
}

implement_binary_operator!(BitAnd, &);
implement_binary_operator!(BitOr, |);
implement_binary_operator!(BitXor, ^);

impl<W: Word> Bitable for FixedBitVector<W> {
    fn bit_len(&self) -> usize {
        W::BITS
    }

    fn bit(&self, index: usize) -> Option<bool> {
        self.get(index).ok()
    }
}

impl<W: Word> Byteable for FixedBitVector<W> {
    fn byte_len(&self) -> usize {
        W::BYTES
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.to_le_bytes().as_ref().get(index).copied()
    }

    fn to_byte_vec(&self) -> Vec<u8> {
        self.to_bytes()
    }
}

/// Writes the bits least significant first as `0`/`1`, the format `parse` reads.
impl<W: Word> fmt::Display for FixedBitVector<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl<W: Word> fmt::Debug for FixedBitVector<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBitVector<{}>({}: [", W::BITS, self.scalar)?;
        for (index, bit) in self.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("])")
    }
}

/// Conventional binary notation of the unsigned view (most significant bit first).
impl<W: Word> fmt::Binary for FixedBitVector<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Binary::fmt(&self.unsigned(), f)
    }
}

/// Iterator over the bits of a vector, least significant bit first.
#[derive(Clone, Debug)]
pub struct Iter<W: Word> {
    vector: FixedBitVector<W>,
    front: usize,
    back: usize,
}

impl<W: Word> Iterator for Iter<W> {
    type Item = bool;

    fn next(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        let bit = self.vector.bit_at(self.front);
        self.front += 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<W: Word> DoubleEndedIterator for Iter<W> {
    fn next_back(&mut self) -> Option<bool> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.vector.bit_at(self.back))
    }
}

impl<W: Word> ExactSizeIterator for Iter<W> {}

impl<W: Word> FusedIterator for Iter<W> {}

impl<W: Word> IntoIterator for FixedBitVector<W> {
    type Item = bool;
    type IntoIter = Iter<W>;

    fn into_iter(self) -> Iter<W> {
        self.iter()
    }
}

impl<'a, W: Word> IntoIterator for &'a FixedBitVector<W> {
    type Item = bool;
    type IntoIter = Iter<W>;

    fn into_iter(self) -> Iter<W> {
        self.iter()
    }
}
