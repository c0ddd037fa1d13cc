//! Error kinds shared by the codecs.

use thiserror::Error;

/// Result alias for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

/// An invalid unit met while decoding, or an invalid scalar met while
/// encoding.
///
/// For decode errors `index` is the byte offset into the input at which
/// the offending element starts. For encode rejections it is the position
/// of the offending value in the scalar slice.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// A byte that cannot begin any UTF-8 sequence.
    #[error("invalid lead byte at index {index}")]
    InvalidLeadByte { index: usize },

    /// A continuation byte outside the range its sequence allows.
    #[error("invalid continuation byte at index {index} in a {width}-byte sequence")]
    InvalidContinuationByte { index: usize, width: usize },

    /// The input ended before a multi-byte sequence completed.
    #[error("truncated sequence at index {index}, {width} bytes expected")]
    TruncatedSequence { index: usize, width: usize },

    /// A surrogate half without a well-formed partner.
    #[error("unpaired surrogate at index {index}")]
    UnpairedSurrogate { index: usize },

    /// A value outside the Unicode scalar range.
    #[error("code point {value:#x} at index {index} is not a Unicode scalar")]
    CodePointOutOfRange { index: usize, value: u32 },

    /// Endianness inference scored both byte orders equally.
    #[error("ambiguous endianness, big-endian scored {big_score} and little-endian {little_score}")]
    AmbiguousEndianness { big_score: i32, little_score: i32 },
}
