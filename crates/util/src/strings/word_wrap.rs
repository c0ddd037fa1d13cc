/// Characters a wrapped line may break after.
pub const BREAK_CHARS: &[char] = &[' ', '-', '_'];

/// Check if a line may break after `ch`.
pub fn is_break_char(ch: char) -> bool {
    BREAK_CHARS.contains(&ch)
}

/// Options for word wrapping.
#[derive(Debug, Clone)]
pub struct WrapOptions {
    /// Maximum width of each line in characters. Default is 50.
    pub width: usize,
}

impl Default for WrapOptions {
    fn default() -> Self {
        Self { width: 50 }
    }
}

/// Wrap text to a specified width.
///
/// The input is split at existing line breaks first; `\r\n`, `\n` and a
/// lone `\r` all end a line, and blank lines survive as empty output
/// lines. Tabs count as four spaces. A line longer than the width breaks
/// after the last break character that still fits, which stays at the
/// end of the line; a run with no break character in it is cut at the
/// width.
///
/// # Examples
///
/// ```
/// use unitext_util::strings::{word_wrap, WrapOptions};
///
/// let lines = word_wrap("one two three", Some(WrapOptions { width: 8 }));
/// assert_eq!(lines, vec!["one two ", "three"]);
/// ```
pub fn word_wrap(s: &str, options: Option<WrapOptions>) -> Vec<String> {
    if s.is_empty() {
        return Vec::new();
    }

    let opts = options.unwrap_or_default();
    let width = opts.width.max(1);
    let s = s.replace('\t', "    ");

    let mut lines = Vec::new();
    for raw in s.split('\n') {
        let paragraph = raw.strip_suffix('\r').unwrap_or(raw);
        for piece in paragraph.split('\r') {
            wrap_paragraph(piece, width, &mut lines);
        }
    }
    lines
}

fn wrap_paragraph(paragraph: &str, width: usize, lines: &mut Vec<String>) {
    let chars: Vec<char> = paragraph.chars().collect();
    let mut start = 0;
    while chars.len() - start > width {
        let window = &chars[start..start + width];
        let taken = match window.iter().rposition(|&c| is_break_char(c)) {
            Some(p) => p + 1,
            None => width,
        };
        lines.push(chars[start..start + taken].iter().collect());
        start += taken;
    }
    lines.push(chars[start..].iter().collect());
}

/// Right-pad `line` with spaces up to `width` characters.
///
/// Lines already at or past the width come back unchanged.
pub fn pad_line(line: &str, width: usize) -> String {
    let len = line.chars().count();
    let mut out = String::with_capacity(line.len() + width.saturating_sub(len));
    out.push_str(line);
    for _ in len..width {
        out.push(' ');
    }
    out
}
