use thiserror::Error;

/// Result alias for INI loading.
pub type Result<T> = std::result::Result<T, IniError>;

/// Failure while bringing an INI document in from bytes or a file.
///
/// Parsing itself is lenient and never fails; only I/O and text
/// decoding can.
#[derive(Debug, Error)]
pub enum IniError {
    #[error("failed to read INI file")]
    Io(#[from] std::io::Error),

    #[error("INI bytes are not valid text")]
    Decode(#[from] unitext::Error),
}
