//! UTF-16 scalar-stream encoding.

use unitext_buffers::Writer;
use unitext_bytes::ByteOrder;

use crate::utf16::{encode_width, BOM_BE, BOM_LE, SURROGATE_OFFSET};
use crate::{Error, Result};

/// Encodes scalar values as UTF-16 in the given byte order.
///
/// Values below U+10000 become one code unit; the rest split into a
/// surrogate pair. With `write_bom` set, the mark for `order` is written
/// first. The output is sized in a first pass, which rejects surrogate
/// code points and values above U+10FFFF before a single byte is
/// produced.
///
/// ```
/// use unitext::utf16;
/// use unitext_bytes::ByteOrder;
///
/// let bytes = utf16::encode(&[0x10000], ByteOrder::LittleEndian, false).unwrap();
/// assert_eq!(bytes, [0x00, 0xd8, 0x00, 0xdc]);
/// ```
pub fn encode(scalars: &[u32], order: ByteOrder, write_bom: bool) -> Result<Vec<u8>> {
    let mut size = encoded_size(scalars)?;
    if write_bom {
        size += 2;
    }
    let mut writer = Writer::with_capacity(size);
    if write_bom {
        writer.push_buf(match order {
            ByteOrder::BigEndian => &BOM_BE,
            ByteOrder::LittleEndian => &BOM_LE,
        });
    }
    for &scalar in scalars {
        if scalar < SURROGATE_OFFSET {
            writer.push_u16(scalar as u16, order);
        } else {
            let v = scalar - SURROGATE_OFFSET;
            writer.push_u16(0xd800 | (v >> 10) as u16, order);
            writer.push_u16(0xdc00 | (v & 0x3ff) as u16, order);
        }
    }
    Ok(writer.into_vec())
}

/// Total bytes [`encode`] will produce for `scalars`, not counting any
/// byte-order mark.
///
/// Fails at the first value that is not a Unicode scalar.
pub fn encoded_size(scalars: &[u32]) -> Result<usize> {
    let mut size = 0;
    for (index, &value) in scalars.iter().enumerate() {
        match encode_width(value) {
            0 => return Err(Error::CodePointOutOfRange { index, value }),
            width => size += width,
        }
    }
    Ok(size)
}
