//! Unicode transformation-format codecs.
//!
//! The [`utf8`] and [`utf16`] modules decode byte streams into Unicode
//! scalar values (`u32`) and encode scalar values back into bytes. Both
//! directions validate strictly: overlong forms, surrogate halves in the
//! wrong place, and values above U+10FFFF are rejected rather than passed
//! through. UTF-16 additionally handles byte-order marks and can infer
//! the byte order of unmarked data.
//!
//! Decoding reports errors by byte index and either stops at the first
//! one or records it and resynchronizes, controlled by [`OnError`].
//!
//! # Example
//!
//! ```
//! use unitext::{utf16, utf8, OnError};
//! use unitext_bytes::ByteOrder;
//!
//! let scalars = utf8::decode_strict(b"hi \xf0\x9f\x98\x80").unwrap();
//! assert_eq!(scalars, [0x68, 0x69, 0x20, 0x1f600]);
//!
//! let bytes = utf16::encode(&scalars, ByteOrder::BigEndian, true).unwrap();
//! let decoded = utf16::decode(&bytes, None, OnError::Stop);
//! assert_eq!(decoded.scalars, scalars);
//! assert!(decoded.errors.is_empty());
//! ```

mod error;

pub mod utf16;
pub mod utf8;

pub use error::{Error, Result};
pub use unitext_bytes::ByteOrder;

/// Policy applied when a decoder meets an invalid unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnError {
    /// Stop at the first error, returning everything decoded before it.
    Stop,
    /// Record the error, skip one input element, and keep decoding.
    Continue,
}

/// Outcome of a decode call: the scalars produced and the errors met.
///
/// Under [`OnError::Stop`] the `errors` vector holds at most one entry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Decoded {
    /// Decoded Unicode scalar values, in input order.
    pub scalars: Vec<u32>,
    /// Errors encountered, in input order.
    pub errors: Vec<Error>,
}

impl Decoded {
    /// The scalars if no error occurred, otherwise the first error.
    pub fn into_result(self) -> Result<Vec<u32>> {
        match self.errors.first() {
            Some(&error) => Err(error),
            None => Ok(self.scalars),
        }
    }
}

/// Widens the characters of a string into scalar values.
pub fn string_to_scalars(s: &str) -> Vec<u32> {
    s.chars().map(|c| c as u32).collect()
}

/// Builds a string from scalar values.
///
/// Fails at the first value that is not a Unicode scalar, reporting its
/// position in the slice.
///
/// ```
/// use unitext::scalars_to_string;
///
/// assert_eq!(scalars_to_string(&[0x68, 0x69]).unwrap(), "hi");
/// assert!(scalars_to_string(&[0xd800]).is_err());
/// ```
pub fn scalars_to_string(scalars: &[u32]) -> Result<String> {
    let mut out = String::with_capacity(scalars.len());
    for (index, &value) in scalars.iter().enumerate() {
        match char::from_u32(value) {
            Some(c) => out.push(c),
            None => return Err(Error::CodePointOutOfRange { index, value }),
        }
    }
    Ok(out)
}
