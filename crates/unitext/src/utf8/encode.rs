//! UTF-8 scalar-stream encoding.

use unitext_buffers::Writer;

use crate::utf8::encode_width;
use crate::{Error, Result};

/// Encodes scalar values as UTF-8 bytes.
///
/// The output is sized in a first pass, which rejects any value that is
/// not a Unicode scalar before a single byte is produced. The second
/// pass fills the pre-sized buffer.
///
/// ```
/// use unitext::utf8;
///
/// assert_eq!(utf8::encode(&[0x1f600]).unwrap(), [0xf0, 0x9f, 0x98, 0x80]);
/// ```
pub fn encode(scalars: &[u32]) -> Result<Vec<u8>> {
    let size = encoded_size(scalars)?;
    let mut writer = Writer::with_capacity(size);
    for &scalar in scalars {
        match encode_width(scalar) {
            1 => writer.push(scalar as u8),
            2 => {
                writer.push(0xc0 | (scalar >> 6) as u8);
                writer.push(0x80 | (scalar & 0x3f) as u8);
            }
            3 => {
                writer.push(0xe0 | (scalar >> 12) as u8);
                writer.push(0x80 | ((scalar >> 6) & 0x3f) as u8);
                writer.push(0x80 | (scalar & 0x3f) as u8);
            }
            _ => {
                writer.push(0xf0 | (scalar >> 18) as u8);
                writer.push(0x80 | ((scalar >> 12) & 0x3f) as u8);
                writer.push(0x80 | ((scalar >> 6) & 0x3f) as u8);
                writer.push(0x80 | (scalar & 0x3f) as u8);
            }
        }
    }
    Ok(writer.into_vec())
}

/// Total bytes [`encode`] will produce for `scalars`.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_width_encodes_its_reference_form() {
        assert_eq!(encode(&[0x41]).unwrap(), [0x41]);
        assert_eq!(encode(&[0xe9]).unwrap(), [0xc3, 0xa9]);
        assert_eq!(encode(&[0x20ac]).unwrap(), [0xe2, 0x82, 0xac]);
        assert_eq!(encode(&[0x1f600]).unwrap(), [0xf0, 0x9f, 0x98, 0x80]);
    }

    #[test]
    fn width_boundaries_encode_cleanly() {
        assert_eq!(encode(&[0x7f]).unwrap(), [0x7f]);
        assert_eq!(encode(&[0x80]).unwrap(), [0xc2, 0x80]);
        assert_eq!(encode(&[0x7ff]).unwrap(), [0xdf, 0xbf]);
        assert_eq!(encode(&[0x800]).unwrap(), [0xe0, 0xa0, 0x80]);
        assert_eq!(encode(&[0xffff]).unwrap(), [0xef, 0xbf, 0xbf]);
        assert_eq!(encode(&[0x10000]).unwrap(), [0xf0, 0x90, 0x80, 0x80]);
        assert_eq!(encode(&[0x10ffff]).unwrap(), [0xf4, 0x8f, 0xbf, 0xbf]);
    }

    #[test]
    fn empty_input_encodes_to_nothing() {
        assert!(encode(&[]).unwrap().is_empty());
    }

    #[test]
    fn surrogate_values_are_rejected_before_any_output() {
        let err = encode(&[0x41, 0xd800, 0x42]).unwrap_err();
        assert_eq!(
            err,
            Error::CodePointOutOfRange {
                index: 1,
                value: 0xd800
            }
        );
    }

    #[test]
    fn values_past_the_plane_limit_are_rejected() {
        let err = encode(&[0x110000]).unwrap_err();
        assert_eq!(
            err,
            Error::CodePointOutOfRange {
                index: 0,
                value: 0x110000
            }
        );
    }

    #[test]
    fn encoded_size_matches_the_output_length() {
        let scalars = [0x41, 0xe9, 0x20ac, 0x1f600, 0x00];
        let size = encoded_size(&scalars).unwrap();
        assert_eq!(encode(&scalars).unwrap().len(), size);
        assert_eq!(size, 1 + 2 + 3 + 4 + 1);
    }

    #[test]
    fn output_matches_what_std_produces() {
        let text = "héllo wörld \u{20ac}\u{1f600}";
        let scalars: Vec<u32> = text.chars().map(|c| c as u32).collect();
        assert_eq!(encode(&scalars).unwrap(), text.as_bytes());
    }
}
