/// Characters the trim functions treat as whitespace when no explicit
/// set is wanted.
pub const WHITESPACE_CHARS: &[char] = &[' ', '\t', '\r', '\n'];

/// Remove leading occurrences of `chars` from `s`.
///
/// # Examples
///
/// ```
/// use unitext_util::strings::{trim_left, WHITESPACE_CHARS};
///
/// assert_eq!(trim_left("  hello  ", WHITESPACE_CHARS), "hello  ");
/// assert_eq!(trim_left("--key", &['-']), "key");
/// ```
pub fn trim_left<'a>(s: &'a str, chars: &[char]) -> &'a str {
    s.trim_start_matches(|c: char| chars.contains(&c))
}

/// Remove trailing occurrences of `chars` from `s`.
///
/// # Examples
///
/// ```
/// use unitext_util::strings::{trim_right, WHITESPACE_CHARS};
///
/// assert_eq!(trim_right("  hello  ", WHITESPACE_CHARS), "  hello");
/// ```
pub fn trim_right<'a>(s: &'a str, chars: &[char]) -> &'a str {
    s.trim_end_matches(|c: char| chars.contains(&c))
}

/// Remove leading and trailing occurrences of `chars` from `s`.
///
/// # Examples
///
/// ```
/// use unitext_util::strings::{trim, WHITESPACE_CHARS};
///
/// assert_eq!(trim("\t value \r\n", WHITESPACE_CHARS), "value");
/// ```
pub fn trim<'a>(s: &'a str, chars: &[char]) -> &'a str {
    trim_right(trim_left(s, chars), chars)
}
