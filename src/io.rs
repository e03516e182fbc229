/// io.rs
///
/// File containing the length-prefixed framing used to write byteable values
/// to a stream and read bit vectors back. The prefix is the byte count as a
/// 7-bit encoded integer (little-endian groups of 7 bits, high bit set on
/// every byte but the last), followed by the bytes themselves.
use std::io::{ErrorKind, Read, Write};

use super::errors::StreamError;
use super::traits::Byteable;
use super::types::Word;
use super::vector::FixedBitVector;

/// A 32-bit count never needs more than 5 groups of 7 bits.
pub const MAX_LENGTH_BYTES: usize = 5;

const CONTINUATION: u8 = 0x80;
const GROUP_MASK: u8 = 0x7F;
const GROUP_BITS: usize = 7;

/// Writes `length` as a 7-bit encoded integer.
/// Returns a Result with `LengthTooLarge` if the length exceeds `i32::MAX`.
pub fn write_length<Wr: Write + ?Sized>(writer: &mut Wr, length: usize) -> Result<(), StreamError> {
    let mut value = match i32::try_from(length) {
        Ok(value) => value as u32,
        Err(_) => return Err(StreamError::LengthTooLarge { length }),
    };

    let mut buffer = [0_u8; MAX_LENGTH_BYTES];
    let mut used = 0;
    while value >= u32::from(CONTINUATION) {
        buffer[used] = (value as u8 & GROUP_MASK) | CONTINUATION;
        value >>= GROUP_BITS;
        used += 1;
    }
    buffer[used] = value as u8;
    used += 1;

    writer.write_all(&buffer[..used])?;
    Ok(())
}

/// Reads a 7-bit encoded length.
/// Returns a Result with `MalformedLength` if the prefix runs past 5 bytes or
/// encodes a value above `i32::MAX`.
pub fn read_length<R: Read + ?Sized>(reader: &mut R) -> Result<usize, StreamError> {
    let mut value: u32 = 0;
    for group in 0..MAX_LENGTH_BYTES {
        let mut byte = [0_u8; 1];
        reader.read_exact(&mut byte)?;
        let byte = byte[0];

        // The last group only has room for the 4 high bits of a u32.
        if group == MAX_LENGTH_BYTES - 1 && byte > 0x0F {
            return Err(StreamError::MalformedLength);
        }

        value |= u32::from(byte & GROUP_MASK) << (group * GROUP_BITS);
        if byte & CONTINUATION == 0 {
            return match i32::try_from(value) {
                Ok(length) => Ok(length as usize),
                Err(_) => Err(StreamError::MalformedLength),
            };
        }
    }

    Err(StreamError::MalformedLength)
}

/// Writes the length-prefixed bytes of `value`.
pub fn write_byteable<Wr, B>(writer: &mut Wr, value: &B) -> Result<(), StreamError>
where
    Wr: Write + ?Sized,
    B: Byteable + ?Sized,
{
    let bytes = value.to_byte_vec();
    write_length(writer, bytes.len())?;
    writer.write_all(&bytes)?;
    Ok(())
}

/// Reads one length-prefixed byte buffer.
pub fn read_byteable<R: Read + ?Sized>(reader: &mut R) -> Result<Vec<u8>, StreamError> {
    let length = read_length(reader)?;

    // Grow with the data actually present instead of trusting the prefix.
    let mut buffer = Vec::new();
    reader.take(length as u64).read_to_end(&mut buffer)?;
    if buffer.len() != length {
        return Err(StreamError::Io(ErrorKind::UnexpectedEof.into()));
    }

    Ok(buffer)
}

/// Reads one length-prefixed buffer into a bit vector.
/// Returns a Result with `TooManyBytes` if the buffer is longer than the vector's scalar.
pub fn read_bits<W: Word, R: Read + ?Sized>(reader: &mut R) -> Result<FixedBitVector<W>, StreamError> {
    let bytes = read_byteable(reader)?;
    Ok(FixedBitVector::from_bytes(&bytes)?)
}

/// Framing helpers available on every writer.
pub trait WriteBitsExt: Write {
    fn write_byteable<B: Byteable + ?Sized>(&mut self, value: &B) -> Result<(), StreamError> {
        write_byteable(self, value)
    }
}

impl<Wr: Write + ?Sized> WriteBitsExt for Wr {}

/// Framing helpers available on every reader.
pub trait ReadBitsExt: Read {
    fn read_byteable(&mut self) -> Result<Vec<u8>, StreamError> {
        read_byteable(self)
    }

    fn read_bits<W: Word>(&mut self) -> Result<FixedBitVector<W>, StreamError> {
        read_bits(self)
    }
}

impl<R: Read + ?Sized> ReadBitsExt for R {}
