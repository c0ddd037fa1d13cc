//! String utilities.
//!
//! Provides functions for trimming, line-terminator detection and word
//! wrapping.

mod line_term;
mod trim;
mod word_wrap;

pub use line_term::detect_line_term;
pub use trim::{trim, trim_left, trim_right, WHITESPACE_CHARS};
pub use word_wrap::{is_break_char, pad_line, word_wrap, WrapOptions, BREAK_CHARS};
