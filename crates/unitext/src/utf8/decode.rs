//! UTF-8 byte-stream decoding.

use crate::utf8::decode_width;
use crate::{Decoded, Error, OnError, Result};

/// Decodes `bytes` as UTF-8 into Unicode scalar values.
///
/// Errors are reported at the byte that breaks the sequence. Under
/// [`OnError::Continue`] the decoder records the error, skips one byte
/// and resumes at the next; under [`OnError::Stop`] it returns with what
/// was decoded up to that point and the error itself.
///
/// A leading byte-order mark is not stripped; it decodes to U+FEFF.
///
/// ```
/// use unitext::{utf8, OnError};
///
/// let decoded = utf8::decode(&[0x48, 0x65, 0x6c, 0x6c, 0x6f], OnError::Stop);
/// assert_eq!(decoded.scalars, [0x48, 0x65, 0x6c, 0x6c, 0x6f]);
/// assert!(decoded.errors.is_empty());
/// ```
pub fn decode(bytes: &[u8], on_error: OnError) -> Decoded {
    let mut out = Decoded {
        scalars: Vec::with_capacity(bytes.len()),
        errors: Vec::new(),
    };
    let mut x = 0;
    while x < bytes.len() {
        let lead = bytes[x];
        let width = decode_width(lead);
        if width == 0 {
            if !report(&mut out, Error::InvalidLeadByte { index: x }, on_error) {
                return out;
            }
            x += 1;
            continue;
        }
        if x + width > bytes.len() {
            if !report(&mut out, Error::TruncatedSequence { index: x, width }, on_error) {
                return out;
            }
            x += 1;
            continue;
        }
        match take_sequence(bytes, x, width) {
            Ok(scalar) => {
                out.scalars.push(scalar);
                x += width;
            }
            Err(error) => {
                if !report(&mut out, error, on_error) {
                    return out;
                }
                x += 1;
            }
        }
    }
    out
}

/// Decodes with all-or-nothing semantics.
///
/// ```
/// use unitext::utf8;
///
/// assert_eq!(utf8::decode_strict(&[0xf0, 0x9f, 0x98, 0x80]).unwrap(), [0x1f600]);
/// assert!(utf8::decode_strict(&[0xc0, 0x80]).is_err());
/// ```
pub fn decode_strict(bytes: &[u8]) -> Result<Vec<u32>> {
    decode(bytes, OnError::Stop).into_result()
}

fn report(out: &mut Decoded, error: Error, on_error: OnError) -> bool {
    out.errors.push(error);
    matches!(on_error, OnError::Continue)
}

/// Valid range for the second byte of a sequence led by `lead`. The
/// narrowed rows are what rejects overlong forms, encoded surrogates and
/// values above U+10FFFF.
fn second_byte_range(lead: u8) -> (u8, u8) {
    match lead {
        0xe0 => (0xa0, 0xbf),
        0xed => (0x80, 0x9f),
        0xf0 => (0x90, 0xbf),
        0xf4 => (0x80, 0x8f),
        _ => (0x80, 0xbf),
    }
}

/// Validates and extracts the sequence of `width` bytes starting at `x`.
/// The caller has already checked that the bytes are in bounds.
fn take_sequence(bytes: &[u8], x: usize, width: usize) -> Result<u32> {
    let lead = bytes[x];
    if width == 1 {
        return Ok(lead as u32);
    }
    let (lo, hi) = second_byte_range(lead);
    let second = bytes[x + 1];
    if second < lo || second > hi {
        return Err(Error::InvalidContinuationByte { index: x + 1, width });
    }
    for n in 2..width {
        if !(0x80..=0xbf).contains(&bytes[x + n]) {
            return Err(Error::InvalidContinuationByte { index: x + n, width });
        }
    }
    let payload_mask = match width {
        2 => 0x1f,
        3 => 0x0f,
        _ => 0x07,
    };
    let mut scalar = ((lead as u32) & payload_mask) << ((width - 1) * 6);
    for n in 1..width {
        scalar |= ((bytes[x + n] ^ 0x80) as u32) << ((width - 1 - n) * 6);
    }
    Ok(scalar)
}
