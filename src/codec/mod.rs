//! Compact, link-safe encoding of chart text

use std::fmt;

/// Literal-versus-compressed classification of undecodable input
pub mod heuristic;
/// Compression, base64 wrapping and tolerant loading of pattern text
pub mod link;

pub use link::{LoadOutcome, decode, decode_or_default, encode, load};

/// Reasons an encoded pattern cannot be decoded
#[derive(Debug)]
pub enum DecodeError {
    /// Text contains characters outside the base64 alphabet or is badly padded
    InvalidAlphabet(base64::DecodeError),
    /// Bytes are not a valid compressed stream
    InvalidStream(std::io::Error),
    /// Decompressed pattern exceeds the size limit
    TooLarge {
        /// Maximum accepted number of bytes
        limit: usize,
    },
    /// Decompressed bytes are not UTF-8 text
    InvalidUtf8(std::string::FromUtf8Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAlphabet(source) => write!(f, "invalid base64 data: {source}"),
            Self::InvalidStream(source) => write!(f, "invalid compressed stream: {source}"),
            Self::TooLarge { limit } => {
                write!(f, "decoded pattern exceeds {limit} bytes")
            }
            Self::InvalidUtf8(source) => write!(f, "decoded pattern is not UTF-8: {source}"),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::InvalidAlphabet(source) => Some(source),
            Self::InvalidStream(source) => Some(source),
            Self::InvalidUtf8(source) => Some(source),
            Self::TooLarge { .. } => None,
        }
    }
}
