//! traits.rs
//!
//! File containing the capabilities a value can expose to be turned into a
//! bit vector: an ordered bit sequence or a little-endian byte sequence.

/// A value exposing an ordered bit sequence of known length, index 0 being
/// the least significant bit.
pub trait Bitable {
    fn bit_len(&self) -> usize;

    /// Returns the bit at `index`, or `None` past the end of the sequence.
    fn bit(&self, index: usize) -> Option<bool>;

    fn to_bit_vec(&self) -> Vec<bool> {
        (0..self.bit_len()).filter_map(|index| self.bit(index)).collect()
    }
}

/// A value exposing a little-endian byte sequence of known length.
pub trait Byteable {
    fn byte_len(&self) -> usize;

    /// Returns the byte at `index`, or `None` past the end of the sequence.
    fn byte(&self, index: usize) -> Option<u8>;

    fn to_byte_vec(&self) -> Vec<u8> {
        (0..self.byte_len()).filter_map(|index| self.byte(index)).collect()
    }
}

impl Bitable for [bool] {
    fn bit_len(&self) -> usize {
        self.len()
    }

    fn bit(&self, index: usize) -> Option<bool> {
        self.get(index).copied()
    }

    fn to_bit_vec(&self) -> Vec<bool> {
        self.to_vec()
    }
}

impl<const N: usize> Bitable for [bool; N] {
    fn bit_len(&self) -> usize {
        N
    }

    fn bit(&self, index: usize) -> Option<bool> {
        self.get(index).copied()
    }
}

impl Bitable for Vec<bool> {
    fn bit_len(&self) -> usize {
        self.len()
    }

    fn bit(&self, index: usize) -> Option<bool> {
        self.get(index).copied()
    }
}

impl Byteable for [u8] {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }

    fn to_byte_vec(&self) -> Vec<u8> {
        self.to_vec()
    }
}

impl<const N: usize> Byteable for [u8; N] {
    fn byte_len(&self) -> usize {
        N
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }
}

impl Byteable for Vec<u8> {
    fn byte_len(&self) -> usize {
        self.len()
    }

    fn byte(&self, index: usize) -> Option<u8> {
        self.get(index).copied()
    }
}
