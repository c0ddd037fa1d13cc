/// Report the line terminator `text` uses, judging by the first one found.
///
/// Returns `"\r\n"`, `"\n"`, or `"\r"`. Text with no terminator at all
/// reports `"\n"`.
///
/// # Examples
///
/// ```
/// use unitext_util::strings::detect_line_term;
///
/// assert_eq!(detect_line_term("a\r\nb\r\n"), "\r\n");
/// assert_eq!(detect_line_term("a\nb"), "\n");
/// assert_eq!(detect_line_term("plain"), "\n");
/// ```
pub fn detect_line_term(text: &str) -> &'static str {
    let bytes = text.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\n' => return "\n",
            b'\r' => {
                return if bytes.get(i + 1) == Some(&b'\n') {
                    "\r\n"
                } else {
                    "\r"
                };
            }
            _ => {}
        }
    }
    "\n"
}
