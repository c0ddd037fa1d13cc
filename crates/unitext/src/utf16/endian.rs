//! Heuristic byte-order inference for unmarked UTF-16 data.

use unitext_buffers::Reader;
use unitext_bytes::ByteOrder;

use crate::utf16::{is_high_surrogate, is_low_surrogate};
use crate::{Error, Result};

/// Code units sampled per hypothesis before scoring stops.
const SAMPLE_LIMIT: usize = 512;

/// Infers the byte order of UTF-16 data that carries no byte-order mark.
///
/// Both hypotheses are scored over up to 512 code units: +1 for a valid
/// single unit or a well-formed surrogate pair, -1 for an unpaired
/// surrogate half. The strictly higher score wins. Tied scores fall back
/// to counting units in the ASCII range, where byte-swapped text scores
/// zero; a tie there too fails with [`Error::AmbiguousEndianness`].
///
/// ```
/// use unitext::utf16;
/// use unitext_bytes::ByteOrder;
///
/// assert_eq!(
///     utf16::infer_order(&[0x00, 0x48, 0x00, 0x69]).unwrap(),
///     ByteOrder::BigEndian,
/// );
/// ```
pub fn infer_order(bytes: &[u8]) -> Result<ByteOrder> {
    let big = survey(bytes, ByteOrder::BigEndian);
    let little = survey(bytes, ByteOrder::LittleEndian);
    if big.score != little.score {
        return Ok(if big.score > little.score {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        });
    }
    if big.ascii != little.ascii {
        return Ok(if big.ascii > little.ascii {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        });
    }
    Err(Error::AmbiguousEndianness {
        big_score: big.score,
        little_score: little.score,
    })
}

struct Evidence {
    score: i32,
    ascii: i32,
}

fn survey(bytes: &[u8], order: ByteOrder) -> Evidence {
    let mut reader = Reader::new(bytes);
    let mut evidence = Evidence { score: 0, ascii: 0 };
    let mut sampled = 0;
    while sampled < SAMPLE_LIMIT {
        let unit = match reader.try_u16(order) {
            Ok(unit) => unit,
            Err(_) => break,
        };
        sampled += 1;
        if is_high_surrogate(unit) {
            match reader.try_peek_u16(order) {
                Ok(low) if is_low_surrogate(low) => {
                    reader.advance(2);
                    sampled += 1;
                    evidence.score += 1;
                }
                _ => evidence.score -= 1,
            }
        } else if is_low_surrogate(unit) {
            evidence.score -= 1;
        } else {
            evidence.score += 1;
            if unit < 0x80 {
                evidence.ascii += 1;
            }
        }
    }
    evidence
}
