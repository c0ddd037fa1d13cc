//! UTF-16 byte-stream decoding.

use unitext_buffers::Reader;
use unitext_bytes::ByteOrder;

use crate::utf16::{bom_order, infer_order, is_high_surrogate, is_low_surrogate, SURROGATE_OFFSET};
use crate::{Decoded, Error, OnError, Result};

/// Decodes `bytes` as UTF-16 into Unicode scalar values.
///
/// When `order` is given it is used as-is and any leading byte-order
/// mark decodes as the scalar U+FEFF. With `order` absent, a leading
/// mark decides the byte order and is consumed; unmarked data goes
/// through [`infer_order`], and an inconclusive inference is reported as
/// [`Error::AmbiguousEndianness`] without decoding anything.
///
/// Error indices are byte offsets into `bytes`, so they account for a
/// consumed mark. Under [`OnError::Continue`] the decoder skips one code
/// unit and resumes.
///
/// ```
/// use unitext::{utf16, OnError};
///
/// // Big-endian mark followed by "Hi".
/// let decoded = utf16::decode(&[0xfe, 0xff, 0x00, 0x48, 0x00, 0x69], None, OnError::Stop);
/// assert_eq!(decoded.scalars, [0x48, 0x69]);
/// assert!(decoded.errors.is_empty());
/// ```
pub fn decode(bytes: &[u8], order: Option<ByteOrder>, on_error: OnError) -> Decoded {
    let mut out = Decoded::default();
    if bytes.is_empty() {
        return out;
    }
    let (payload, resolved) = match resolve_order(bytes, order) {
        Ok(pair) => pair,
        Err(error) => {
            out.errors.push(error);
            return out;
        }
    };
    out.scalars.reserve(payload.len() / 2);
    let base = bytes.len() - payload.len();
    let mut reader = Reader::new(payload);
    loop {
        let index = base + reader.pos();
        let unit = match reader.try_u16(resolved) {
            Ok(unit) => unit,
            Err(_) => {
                if reader.is_empty() {
                    break;
                }
                out.errors.push(Error::TruncatedSequence { index, width: 2 });
                if let OnError::Stop = on_error {
                    return out;
                }
                reader.advance(2);
                continue;
            }
        };
        if is_high_surrogate(unit) {
            match reader.try_peek_u16(resolved) {
                Ok(low) if is_low_surrogate(low) => {
                    reader.advance(2);
                    let scalar = (((unit as u32 & 0x3ff) << 10) | (low as u32 & 0x3ff))
                        + SURROGATE_OFFSET;
                    out.scalars.push(scalar);
                }
                _ => {
                    // Missing or malformed partner. The high unit is
                    // already consumed, so the next unit is examined
                    // fresh on the next pass.
                    out.errors.push(Error::UnpairedSurrogate { index });
                    if let OnError::Stop = on_error {
                        return out;
                    }
                }
            }
        } else if is_low_surrogate(unit) {
            out.errors.push(Error::UnpairedSurrogate { index });
            if let OnError::Stop = on_error {
                return out;
            }
        } else {
            out.scalars.push(unit as u32);
        }
    }
    out
}

/// Decodes with all-or-nothing semantics.
pub fn decode_strict(bytes: &[u8], order: Option<ByteOrder>) -> Result<Vec<u32>> {
    decode(bytes, order, OnError::Stop).into_result()
}

fn resolve_order(bytes: &[u8], order: Option<ByteOrder>) -> Result<(&[u8], ByteOrder)> {
    if let Some(order) = order {
        return Ok((bytes, order));
    }
    if let Some(order) = bom_order(bytes) {
        return Ok((&bytes[2..], order));
    }
    Ok((bytes, infer_order(bytes)?))
}
