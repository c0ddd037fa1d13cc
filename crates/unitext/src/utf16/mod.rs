//! UTF-16 decoding, encoding, byte-order marks and endianness inference.
//!
//! A code unit is 16 bits wide, so every operation here is relative to a
//! byte order. [`decode`] resolves it in three steps: an explicit order
//! from the caller, a leading byte-order mark, and finally the
//! [`infer_order`] heuristic over the data itself.

mod decode;
mod encode;
mod endian;

pub use decode::{decode, decode_strict};
pub use encode::{encode, encoded_size};
pub use endian::infer_order;

use unitext_bytes::ByteOrder;

/// The big-endian byte-order mark.
pub const BOM_BE: [u8; 2] = [0xfe, 0xff];

/// The little-endian byte-order mark.
pub const BOM_LE: [u8; 2] = [0xff, 0xfe];

/// Offset between a surrogate pair's combined payload and the scalar it
/// names.
pub(crate) const SURROGATE_OFFSET: u32 = 0x10000;

pub(crate) const HIGH_SURROGATE_MIN: u16 = 0xd800;
pub(crate) const HIGH_SURROGATE_MAX: u16 = 0xdbff;
pub(crate) const LOW_SURROGATE_MIN: u16 = 0xdc00;
pub(crate) const LOW_SURROGATE_MAX: u16 = 0xdfff;

/// True when `bytes` begins with either byte-order mark.
pub fn has_bom(bytes: &[u8]) -> bool {
    bom_order(bytes).is_some()
}

/// The byte order a leading byte-order mark declares, if one is present.
pub fn bom_order(bytes: &[u8]) -> Option<ByteOrder> {
    if bytes.len() < 2 {
        None
    } else if bytes[..2] == BOM_BE {
        Some(ByteOrder::BigEndian)
    } else if bytes[..2] == BOM_LE {
        Some(ByteOrder::LittleEndian)
    } else {
        None
    }
}

/// Length in bytes of the encoded form of `scalar`, or 0 when `scalar`
/// is a surrogate code point or above U+10FFFF.
pub fn encode_width(scalar: u32) -> usize {
    match scalar {
        0x0000..=0xd7ff => 2,
        0xd800..=0xdfff => 0,
        0xe000..=0xffff => 2,
        0x10000..=0x10ffff => 4,
        _ => 0,
    }
}

pub(crate) fn is_high_surrogate(unit: u16) -> bool {
    (HIGH_SURROGATE_MIN..=HIGH_SURROGATE_MAX).contains(&unit)
}

pub(crate) fn is_low_surrogate(unit: u16) -> bool {
    (LOW_SURROGATE_MIN..=LOW_SURROGATE_MAX).contains(&unit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bom_order_recognizes_both_marks() {
        assert_eq!(bom_order(&[0xfe, 0xff, 0x00, 0x41]), Some(ByteOrder::BigEndian));
        assert_eq!(bom_order(&[0xff, 0xfe, 0x41, 0x00]), Some(ByteOrder::LittleEndian));
        assert_eq!(bom_order(&[0x00, 0x41]), None);
        assert_eq!(bom_order(&[0xfe]), None);
        assert_eq!(bom_order(&[]), None);
    }

    #[test]
    fn utf8_bom_is_not_a_utf16_bom() {
        // 0xEF 0xBB is neither mark even though it opens the UTF-8 one.
        assert!(!has_bom(&[0xef, 0xbb, 0xbf]));
    }

    #[test]
    fn encode_width_boundaries() {
        assert_eq!(encode_width(0x0000), 2);
        assert_eq!(encode_width(0xd7ff), 2);
        assert_eq!(encode_width(0xd800), 0);
        assert_eq!(encode_width(0xdfff), 0);
        assert_eq!(encode_width(0xe000), 2);
        assert_eq!(encode_width(0xffff), 2);
        assert_eq!(encode_width(0x10000), 4);
        assert_eq!(encode_width(0x10ffff), 4);
        assert_eq!(encode_width(0x110000), 0);
    }

    #[test]
    fn surrogate_classification() {
        assert!(is_high_surrogate(0xd800));
        assert!(is_high_surrogate(0xdbff));
        assert!(!is_high_surrogate(0xdc00));
        assert!(is_low_surrogate(0xdc00));
        assert!(is_low_surrogate(0xdfff));
        assert!(!is_low_surrogate(0xe000));
        assert!(!is_high_surrogate(0x41));
        assert!(!is_low_surrogate(0x41));
    }
}
