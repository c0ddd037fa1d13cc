use crate::BytesError;

/// Read bit `index` of `byte`. Bit 0 is the least significant.
///
/// # Example
///
/// ```
/// use unitext_bytes::get_bit;
///
/// assert_eq!(get_bit(0b0000_0100, 2), Ok(true));
/// assert_eq!(get_bit(0b0000_0100, 3), Ok(false));
/// assert!(get_bit(0, 8).is_err());
/// ```
pub fn get_bit(byte: u8, index: u32) -> Result<bool, BytesError> {
    if index > 7 {
        return Err(BytesError::BitIndexOutOfRange { index });
    }
    Ok(byte & (1 << index) != 0)
}

/// Return `byte` with bit `index` set to `value`. Bit 0 is the least
/// significant.
pub fn set_bit(byte: u8, index: u32, value: bool) -> Result<u8, BytesError> {
    if index > 7 {
        return Err(BytesError::BitIndexOutOfRange { index });
    }
    if value {
        Ok(byte | (1 << index))
    } else {
        Ok(byte & !(1 << index))
    }
}

/// Return `byte` with bit `index` flipped. Bit 0 is the least significant.
pub fn toggle_bit(byte: u8, index: u32) -> Result<u8, BytesError> {
    if index > 7 {
        return Err(BytesError::BitIndexOutOfRange { index });
    }
    Ok(byte ^ (1 << index))
}
