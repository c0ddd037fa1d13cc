//! Growable byte sink and bounds-checked cursor.
//!
//! The codec crates build their outputs through [`Writer`] (append,
//! contains, length) and walk their inputs through [`Reader`], a cursor
//! over a byte slice whose reads are bounds-checked and byte-order aware.
//!
//! # Example
//!
//! ```
//! use unitext_buffers::{Reader, Writer};
//! use unitext_bytes::ByteOrder;
//!
//! let mut writer = Writer::new();
//! writer.push(0x01);
//! writer.push_u16(0x0203, ByteOrder::BigEndian);
//!
//! let bytes = writer.into_vec();
//! let mut reader = Reader::new(&bytes);
//! assert_eq!(reader.try_u8(), Ok(0x01));
//! assert_eq!(reader.try_u16(ByteOrder::BigEndian), Ok(0x0203));
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

use thiserror::Error;

/// Error type for buffer reads.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BufferError {
    /// The read would pass the end of the input.
    #[error("unexpected end of buffer")]
    EndOfBuffer,
}
