//! unitext-util - String utility functions for unitext
//!
//! Trimming over explicit character sets, line-terminator detection and
//! width-based word wrapping, shared by the text-facing crates.

pub mod strings;

// Re-exports for convenience
pub use strings::{
    detect_line_term, is_break_char, pad_line, trim, trim_left, trim_right, word_wrap,
    WrapOptions, BREAK_CHARS, WHITESPACE_CHARS,
};
