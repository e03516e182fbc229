/// parse.rs
///
/// File containing the text parser for bit vectors. A line is read least
/// significant bit first; every character is either a binary digit (`0`/`1`)
/// or a boolean literal (`t`/`f`, any case), and both kinds may be mixed.
use core::str::FromStr;

use super::errors::BitsError;
use super::types::Word;
use super::vector::FixedBitVector;

/// Value of a single character of a binary line.
#[inline]
fn bit_value(character: char) -> Option<bool> {
    match character {
        '1' | 't' | 'T' => Some(true),
        '0' | 'f' | 'F' => Some(false),
        _ => None,
    }
}

impl<W: Word> FixedBitVector<W> {
    /// Parses a binary line. Only the first `BIT_COUNT` characters are read,
    /// the rest are ignored; a shorter line leaves the high-order bits cleared.
    /// Returns a Result with the vector, or `InvalidFormat` naming the first bad character.
    pub fn parse(line: &str) -> Result<Self, BitsError> {
        let mut vector = Self::new();
        for (position, character) in line.chars().take(W::BITS).enumerate() {
            match bit_value(character) {
                Some(bit) => vector.set(position, bit)?,
                None => return Err(BitsError::InvalidFormat { character, position }),
            }
        }
        Ok(vector)
    }

    /// Same rules as `parse`, without the error detail.
    pub fn try_parse(line: &str) -> Option<Self> {
        Self::parse(line).ok()
    }
}

impl<W: Word> FromStr for FixedBitVector<W> {
    type Err = BitsError;

    fn from_str(line: &str) -> Result<Self, BitsError> {
        Self::parse(line)
    }
}
