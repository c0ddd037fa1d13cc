/// Byte order of a multi-byte value.
///
/// Meaningful only for values wider than one byte; UTF-8 and single bytes
/// have no byte-order concept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    BigEndian,
    /// Least significant byte first.
    LittleEndian,
}

impl ByteOrder {
    /// The byte order of the build target.
    ///
    /// # Example
    ///
    /// ```
    /// use unitext_bytes::ByteOrder;
    ///
    /// // x86 and aarch64 targets are little-endian.
    /// if cfg!(target_endian = "little") {
    ///     assert_eq!(ByteOrder::host(), ByteOrder::LittleEndian);
    /// }
    /// ```
    pub const fn host() -> ByteOrder {
        if cfg!(target_endian = "big") {
            ByteOrder::BigEndian
        } else {
            ByteOrder::LittleEndian
        }
    }

    /// The opposite byte order.
    pub const fn reversed(self) -> ByteOrder {
        match self {
            ByteOrder::BigEndian => ByteOrder::LittleEndian,
            ByteOrder::LittleEndian => ByteOrder::BigEndian,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_matches_target() {
        if cfg!(target_endian = "big") {
            assert_eq!(ByteOrder::host(), ByteOrder::BigEndian);
        } else {
            assert_eq!(ByteOrder::host(), ByteOrder::LittleEndian);
        }
    }

    #[test]
    fn test_reversed() {
        assert_eq!(ByteOrder::BigEndian.reversed(), ByteOrder::LittleEndian);
        assert_eq!(ByteOrder::LittleEndian.reversed(), ByteOrder::BigEndian);
        assert_eq!(ByteOrder::host().reversed().reversed(), ByteOrder::host());
    }
}
