//! Growable byte sink for codec output.

use unitext_bytes::{u16_to_bytes, ByteOrder};

/// A growable byte sink.
///
/// Encoders that know their output size pre-size the sink with
/// [`Writer::with_capacity`] and then fill it; decoders append as they go.
///
/// # Example
///
/// ```
/// use unitext_buffers::Writer;
/// use unitext_bytes::ByteOrder;
///
/// let mut writer = Writer::with_capacity(3);
/// writer.push(0x01);
/// writer.push_u16(0x0203, ByteOrder::BigEndian);
/// assert_eq!(writer.into_vec(), [0x01, 0x02, 0x03]);
/// ```
#[derive(Debug, Default)]
pub struct Writer {
    buf: Vec<u8>,
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Writer { buf: Vec::new() }
    }

    /// Creates a writer whose buffer is pre-sized for `capacity` bytes.
    pub fn with_capacity(capacity: usize) -> Self {
        Writer {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Appends one byte.
    #[inline]
    pub fn push(&mut self, byte: u8) {
        self.buf.push(byte);
    }

    /// Appends every byte of `bytes`.
    pub fn push_buf(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    /// Appends one 16-bit unit in the given byte order.
    #[inline]
    pub fn push_u16(&mut self, value: u16, order: ByteOrder) {
        self.push_buf(&u16_to_bytes(value, order));
    }

    /// True when `byte` has been written.
    pub fn contains(&self, byte: u8) -> bool {
        self.buf.contains(&byte)
    }

    /// Number of bytes written so far.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// True when nothing has been written.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Current buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// The written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Consumes the writer and returns the written bytes.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }
}
