//! Byte and file entry points.

use std::fs;
use std::path::Path;

use log::debug;
use unitext::{scalars_to_string, utf16, utf8};

use crate::{parse, IniDocument, Result};

/// Decode raw INI bytes into text and parse them.
///
/// A UTF-16 byte-order mark routes the bytes through the UTF-16 codec;
/// everything else decodes as UTF-8, with a UTF-8 mark consumed.
/// Decoding is strict, so malformed bytes fail with
/// [`IniError::Decode`](crate::IniError::Decode) instead of parsing
/// mojibake.
pub fn from_bytes(bytes: &[u8]) -> Result<IniDocument> {
    let scalars = if utf16::has_bom(bytes) {
        debug!("decoding {} bytes as UTF-16", bytes.len());
        utf16::decode_strict(bytes, None)?
    } else {
        debug!("decoding {} bytes as UTF-8", bytes.len());
        let payload = if utf8::has_bom(bytes) {
            &bytes[utf8::BOM.len()..]
        } else {
            bytes
        };
        utf8::decode_strict(payload)?
    };
    let text = scalars_to_string(&scalars)?;
    Ok(parse(&text))
}

/// Read and parse the INI file at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<IniDocument> {
    let path = path.as_ref();
    debug!("loading INI file {}", path.display());
    let bytes = fs::read(path)?;
    from_bytes(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::IniError;
    use unitext::{string_to_scalars, ByteOrder};

    #[test]
    fn plain_utf8_bytes() {
        let doc = from_bytes(b"[a]\nk = v\n").unwrap();
        assert_eq!(doc.value("a", "k"), Some("v"));
    }

    #[test]
    fn a_utf8_bom_is_consumed() {
        let doc = from_bytes(b"\xef\xbb\xbf[a]\nk = v\n").unwrap();
        assert_eq!(doc.value("a", "k"), Some("v"));
        assert!(doc.section("a").is_some());
    }

    #[test]
    fn utf16_big_endian_bytes() {
        let bytes =
            utf16::encode(&string_to_scalars("[a]\nk = v\n"), ByteOrder::BigEndian, true).unwrap();
        let doc = from_bytes(&bytes).unwrap();
        assert_eq!(doc.value("a", "k"), Some("v"));
    }

    #[test]
    fn utf16_little_endian_bytes() {
        let bytes = utf16::encode(
            &string_to_scalars("[a]\nk = \u{00e9}\n"),
            ByteOrder::LittleEndian,
            true,
        )
        .unwrap();
        let doc = from_bytes(&bytes).unwrap();
        assert_eq!(doc.value("a", "k"), Some("é"));
    }

    #[test]
    fn malformed_utf8_is_a_decode_error() {
        let err = from_bytes(b"[a]\nk = \xc0\x80\n").unwrap_err();
        assert!(matches!(err, IniError::Decode(_)));
    }

    #[test]
    fn load_round_trips_through_a_file() {
        let path = std::env::temp_dir().join("unitext-ini-load-test.ini");
        fs::write(&path, "\u{feff}[net]\nhost = localhost\n").unwrap();
        let doc = load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(doc.value("net", "host"), Some("localhost"));
    }

    #[test]
    fn a_missing_file_is_an_io_error() {
        let err = load(std::env::temp_dir().join("unitext-ini-no-such-file.ini")).unwrap_err();
        assert!(matches!(err, IniError::Io(_)));
    }
}
