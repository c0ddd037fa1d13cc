//! Bounds-checked cursor over a byte slice.

use unitext_bytes::{u16_from_bytes, ByteOrder};

use crate::BufferError;

/// A cursor that walks a byte slice without owning it.
///
/// Every read is bounds-checked; a failed read returns
/// [`BufferError::EndOfBuffer`] and leaves the cursor where it was.
///
/// # Example
///
/// ```
/// use unitext_buffers::Reader;
/// use unitext_bytes::ByteOrder;
///
/// let data = [0xfe, 0xff, 0x00, 0x41];
/// let mut reader = Reader::new(&data);
/// assert_eq!(reader.try_u16(ByteOrder::BigEndian), Ok(0xfeff));
/// assert_eq!(reader.try_u16(ByteOrder::BigEndian), Ok(0x0041));
/// assert!(reader.is_empty());
/// ```
#[derive(Debug)]
pub struct Reader<'a> {
    buf: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a reader positioned at the start of `buf`.
    pub fn new(buf: &'a [u8]) -> Self {
        Reader { buf, x: 0 }
    }

    /// Current cursor position in bytes from the start of the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.x
    }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.buf.len() - self.x
    }

    /// True when every byte has been consumed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.x >= self.buf.len()
    }

    /// The current byte, without advancing. `None` at the end of the input.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.x).copied()
    }

    /// Advances the cursor by up to `n` bytes, clamped to the end.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        self.x = (self.x + n).min(self.buf.len());
    }

    /// Checks that `n` more bytes are available from the current cursor.
    #[inline]
    fn check(&self, n: usize) -> Result<(), BufferError> {
        if self.remaining() < n {
            Err(BufferError::EndOfBuffer)
        } else {
            Ok(())
        }
    }

    /// Reads one byte.
    #[inline]
    pub fn try_u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.buf[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads one 16-bit unit in the given byte order.
    #[inline]
    pub fn try_u16(&mut self, order: ByteOrder) -> Result<u16, BufferError> {
        self.check(2)?;
        let val = u16_from_bytes(self.buf, self.x, order);
        self.x += 2;
        Ok(val)
    }

    /// Reads one 16-bit unit in the given byte order without advancing.
    #[inline]
    pub fn try_peek_u16(&self, order: ByteOrder) -> Result<u16, BufferError> {
        self.check(2)?;
        Ok(u16_from_bytes(self.buf, self.x, order))
    }

    /// Reads `n` raw bytes and advances the cursor.
    pub fn try_buf(&mut self, n: usize) -> Result<&'a [u8], BufferError> {
        self.check(n)?;
        let start = self.x;
        self.x += n;
        Ok(&self.buf[start..self.x])
    }
}
