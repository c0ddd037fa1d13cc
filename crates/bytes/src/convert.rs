use crate::ByteOrder;

/// Convert a `u16` to its two-byte representation in the requested order.
///
/// The output depends only on `value` and `order`, never on the host
/// architecture.
///
/// # Example
///
/// ```
/// use unitext_bytes::{u16_to_bytes, ByteOrder};
///
/// assert_eq!(u16_to_bytes(0x1234, ByteOrder::BigEndian), [0x12, 0x34]);
/// assert_eq!(u16_to_bytes(0x1234, ByteOrder::LittleEndian), [0x34, 0x12]);
/// ```
pub fn u16_to_bytes(value: u16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read a `u16` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 2` exceeds `bytes.len()`. Bounds are the caller's
/// contract; validate them before calling.
pub fn u16_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> u16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&bytes[offset..offset + 2]);
    match order {
        ByteOrder::BigEndian => u16::from_be_bytes(raw),
        ByteOrder::LittleEndian => u16::from_le_bytes(raw),
    }
}

/// Convert an `i16` to its two-byte representation in the requested order.
pub fn i16_to_bytes(value: i16, order: ByteOrder) -> [u8; 2] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read an `i16` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 2` exceeds `bytes.len()`.
pub fn i16_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> i16 {
    let mut raw = [0u8; 2];
    raw.copy_from_slice(&bytes[offset..offset + 2]);
    match order {
        ByteOrder::BigEndian => i16::from_be_bytes(raw),
        ByteOrder::LittleEndian => i16::from_le_bytes(raw),
    }
}

/// Convert a `u32` to its four-byte representation in the requested order.
pub fn u32_to_bytes(value: u32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read a `u32` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 4` exceeds `bytes.len()`.
pub fn u32_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    match order {
        ByteOrder::BigEndian => u32::from_be_bytes(raw),
        ByteOrder::LittleEndian => u32::from_le_bytes(raw),
    }
}

/// Convert an `i32` to its four-byte representation in the requested order.
pub fn i32_to_bytes(value: i32, order: ByteOrder) -> [u8; 4] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read an `i32` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 4` exceeds `bytes.len()`.
pub fn i32_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> i32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    match order {
        ByteOrder::BigEndian => i32::from_be_bytes(raw),
        ByteOrder::LittleEndian => i32::from_le_bytes(raw),
    }
}

/// Convert a `u64` to its eight-byte representation in the requested order.
pub fn u64_to_bytes(value: u64, order: ByteOrder) -> [u8; 8] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read a `u64` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 8` exceeds `bytes.len()`.
pub fn u64_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    match order {
        ByteOrder::BigEndian => u64::from_be_bytes(raw),
        ByteOrder::LittleEndian => u64::from_le_bytes(raw),
    }
}

/// Convert an `i64` to its eight-byte representation in the requested order.
pub fn i64_to_bytes(value: i64, order: ByteOrder) -> [u8; 8] {
    match order {
        ByteOrder::BigEndian => value.to_be_bytes(),
        ByteOrder::LittleEndian => value.to_le_bytes(),
    }
}

/// Read an `i64` from `bytes` starting at `offset`.
///
/// # Panics
///
/// Panics if `offset + 8` exceeds `bytes.len()`.
pub fn i64_from_bytes(bytes: &[u8], offset: usize, order: ByteOrder) -> i64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    match order {
        ByteOrder::BigEndian => i64::from_be_bytes(raw),
        ByteOrder::LittleEndian => i64::from_le_bytes(raw),
    }
}
