//! Byte-order aware integer conversions and single-bit operations.
//!
//! This crate provides the low-level primitives the codec crates are built
//! on: converting 16/32/64-bit integers to and from byte sequences in an
//! explicitly requested byte order, and reading, setting, or toggling a
//! single bit inside a byte. Conversions produce the same bytes on every
//! host architecture.
//!
//! # Example
//!
//! ```
//! use unitext_bytes::{u16_to_bytes, u16_from_bytes, ByteOrder};
//!
//! assert_eq!(u16_to_bytes(0x1234, ByteOrder::BigEndian), [0x12, 0x34]);
//! assert_eq!(u16_to_bytes(0x1234, ByteOrder::LittleEndian), [0x34, 0x12]);
//! assert_eq!(u16_from_bytes(&[0x12, 0x34], 0, ByteOrder::BigEndian), 0x1234);
//! ```

mod bitfield;
mod convert;
mod order;

pub use bitfield::{get_bit, set_bit, toggle_bit};
pub use convert::{
    i16_from_bytes, i16_to_bytes, i32_from_bytes, i32_to_bytes, i64_from_bytes, i64_to_bytes,
    u16_from_bytes, u16_to_bytes, u32_from_bytes, u32_to_bytes, u64_from_bytes, u64_to_bytes,
};
pub use order::ByteOrder;

/// Error type for bit-level operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BytesError {
    /// The bit index was outside 0..=7.
    BitIndexOutOfRange {
        /// The rejected index.
        index: u32,
    },
}

impl std::fmt::Display for BytesError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BytesError::BitIndexOutOfRange { index } => {
                write!(f, "bit index {} out of range 0..=7", index)
            }
        }
    }
}

impl std::error::Error for BytesError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BytesError::BitIndexOutOfRange { index: 9 };
        assert_eq!(err.to_string(), "bit index 9 out of range 0..=7");
    }
}
