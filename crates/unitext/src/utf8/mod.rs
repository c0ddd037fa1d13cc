//! UTF-8 decoding and encoding.
//!
//! Sequences are classified by their lead byte and validated byte by
//! byte. The second-byte ranges are narrowed for the leads `0xE0`,
//! `0xED`, `0xF0` and `0xF4` so that overlong forms, surrogate code
//! points and values above U+10FFFF are rejected at the byte that
//! introduces them.

mod decode;
mod encode;

pub use decode::{decode, decode_strict};
pub use encode::{encode, encoded_size};

/// The UTF-8 byte-order mark, the encoded form of U+FEFF.
pub const BOM: [u8; 3] = [0xef, 0xbb, 0xbf];

/// True when `bytes` begins with the UTF-8 byte-order mark.
///
/// Decoding never strips the mark; it comes out as the scalar U+FEFF.
/// Callers that want to drop it check here and skip three bytes.
pub fn has_bom(bytes: &[u8]) -> bool {
    bytes.len() >= 3 && bytes[..3] == BOM
}

/// Length in bytes of the sequence introduced by `lead`, or 0 when
/// `lead` cannot begin a sequence.
///
/// Continuation bytes (`0x80..=0xBF`), the overlong leads `0xC0` and
/// `0xC1`, and `0xF5..=0xFF` all map to 0.
pub fn decode_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => 0,
    }
}

/// Length in bytes of the encoded form of `scalar`, or 0 when `scalar`
/// is a surrogate code point or above U+10FFFF.
pub fn encode_width(scalar: u32) -> usize {
    match scalar {
        0x0000..=0x007f => 1,
        0x0080..=0x07ff => 2,
        0x0800..=0xd7ff => 3,
        0xd800..=0xdfff => 0,
        0xe000..=0xffff => 3,
        0x10000..=0x10ffff => 4,
        _ => 0,
    }
}
