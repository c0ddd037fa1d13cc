//! The lenient line parser.

use unitext_util::strings::{detect_line_term, trim, WHITESPACE_CHARS};

use crate::IniDocument;

/// Characters that open a comment line.
const COMMENT_CHARS: &[char] = &[';', '#'];

/// Parse INI text into a document. Never fails: comment and blank lines
/// are skipped, a header missing its closing bracket still opens a
/// section, a line without `=` becomes a valueless key, and a line whose
/// key trims away to nothing is dropped.
///
/// Entries before the first header land in the global section, `""`.
/// The document remembers the first line terminator seen in `text`.
///
/// ```
/// use unitext_ini::parse;
///
/// let doc = parse("; defaults\nretries = 3\n[log]\ncolor\n");
/// assert_eq!(doc.value("", "retries"), Some("3"));
/// assert!(doc.section("log").unwrap().contains_key("color"));
/// ```
pub fn parse(text: &str) -> IniDocument {
    let mut doc = IniDocument::new();
    let term = detect_line_term(text);
    doc.set_line_term(term);
    let mut current = String::new();
    for raw in text.split(term) {
        let line = trim(raw, WHITESPACE_CHARS);
        if line.is_empty() || line.starts_with(COMMENT_CHARS) {
            continue;
        }
        if let Some(body) = line.strip_prefix('[') {
            let name = trim(body.strip_suffix(']').unwrap_or(body), WHITESPACE_CHARS);
            current = name.to_string();
            doc.section_mut(name);
            continue;
        }
        match line.split_once('=') {
            Some((key, value)) => {
                let key = trim(key, WHITESPACE_CHARS);
                if key.is_empty() {
                    continue;
                }
                let value = trim(value, WHITESPACE_CHARS).to_string();
                doc.set(&current, key, Some(value));
            }
            None => doc.set(&current, line, None),
        }
    }
    doc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_keys_and_values() {
        let doc = parse("[server]\nhost = example.com\nport=80\n");
        assert_eq!(doc.value("server", "host"), Some("example.com"));
        assert_eq!(doc.value("server", "port"), Some("80"));
    }

    #[test]
    fn entries_before_a_header_are_global() {
        let doc = parse("mode = fast\n[a]\nk = v\n");
        assert_eq!(doc.value("", "mode"), Some("fast"));
        assert_eq!(doc.value("a", "k"), Some("v"));
    }

    #[test]
    fn both_comment_chars_are_honored() {
        let doc = parse("; one\n# two\nk = v\n");
        assert_eq!(doc.section("").unwrap().len(), 1);
        assert_eq!(doc.value("", "k"), Some("v"));
    }

    #[test]
    fn blank_lines_are_skipped() {
        let doc = parse("\n\nk = v\n\n");
        assert_eq!(doc.section("").unwrap().len(), 1);
    }

    #[test]
    fn valueless_keys_parse() {
        let doc = parse("[flags]\nverbose\nquiet\n");
        let section = doc.section("flags").unwrap();
        assert!(section.contains_key("verbose"));
        assert!(section.contains_key("quiet"));
        assert_eq!(section.value("verbose"), None);
    }

    #[test]
    fn an_empty_value_is_kept() {
        let doc = parse("k =\n");
        assert_eq!(doc.value("", "k"), Some(""));
    }

    #[test]
    fn a_key_that_trims_to_nothing_is_dropped() {
        let doc = parse(" = v\n[ok]\n");
        assert!(doc.section("").is_none());
    }

    #[test]
    fn an_unclosed_header_still_opens_the_section() {
        let doc = parse("[broken\nk = v\n");
        assert_eq!(doc.value("broken", "k"), Some("v"));
    }

    #[test]
    fn an_empty_section_is_kept() {
        let doc = parse("[empty]\n");
        assert!(doc.section("empty").unwrap().is_empty());
    }

    #[test]
    fn repeated_sections_merge() {
        let doc = parse("[a]\nx = 1\n[b]\ny = 2\n[A]\nz = 3\n");
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.value("a", "x"), Some("1"));
        assert_eq!(doc.value("a", "z"), Some("3"));
    }

    #[test]
    fn repeated_keys_take_the_last_value() {
        let doc = parse("k = 1\nK = 2\n");
        let section = doc.section("").unwrap();
        assert_eq!(section.len(), 1);
        assert_eq!(section.value("k"), Some("2"));
    }

    #[test]
    fn values_may_contain_separators_and_comment_chars() {
        let doc = parse("url = http://host/a=b;c\n");
        assert_eq!(doc.value("", "url"), Some("http://host/a=b;c"));
    }

    #[test]
    fn crlf_documents_are_detected_and_parsed() {
        let doc = parse("[a]\r\nk = v\r\n");
        assert_eq!(doc.line_term(), "\r\n");
        assert_eq!(doc.value("a", "k"), Some("v"));
    }

    #[test]
    fn cr_only_documents_are_detected_and_parsed() {
        let doc = parse("[a]\rk = v\r");
        assert_eq!(doc.line_term(), "\r");
        assert_eq!(doc.value("a", "k"), Some("v"));
    }

    #[test]
    fn display_round_trips_structurally() {
        let doc = parse("top\n[one]\na = 1\nbare\n[two]\nb = \n");
        assert_eq!(parse(&doc.to_string()), doc);
    }

    #[test]
    fn empty_input_is_an_empty_document() {
        let doc = parse("");
        assert!(doc.is_empty());
    }
}
