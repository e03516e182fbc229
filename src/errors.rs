/// errors.rs
///
/// File containing the errors returned by bit vector construction, access,
/// conversion and stream framing.
use thiserror_no_std::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BitsError {
    #[error("{} bits provided but the vector only holds {} bits", provided, width)]
    TooManyBits { provided: usize, width: usize },
    #[error("{} bytes provided but the vector only holds {} bytes", provided, width)]
    TooManyBytes { provided: usize, width: usize },
    #[error("Bit index {} out of range for a {}-bit vector", index, width)]
    IndexOutOfRange { index: usize, width: usize },
    #[error("Invalid character {:?} at position {} in binary line", character, position)]
    InvalidFormat { character: char, position: usize },
    #[error("Value has no integer representation")]
    InvalidValue,
    #[error("Value does not fit in {} bits", width)]
    OutOfRange { width: usize },
}

#[derive(Error, Debug)]
pub enum StreamError {
    #[error("Stream I/O failed: {0}")]
    Io(std::io::Error),
    #[error("Malformed 7-bit encoded length prefix")]
    MalformedLength,
    #[error("Length {} cannot be encoded as a length prefix", length)]
    LengthTooLarge { length: usize },
    #[error("{0}")]
    Bits(BitsError),
}

impl From<std::io::Error> for StreamError {
    fn from(err: std::io::Error) -> Self {
        StreamError::Io(err)
    }
}

impl From<BitsError> for StreamError {
    fn from(err: BitsError) -> Self {
        StreamError::Bits(err)
    }
}
