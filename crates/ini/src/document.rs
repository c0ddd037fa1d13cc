//! The in-memory document model.

use std::fmt;

use indexmap::IndexMap;

/// One `[section]` of a document.
///
/// Entries keep their insertion order and the key case they were first
/// written with; lookups ignore ASCII case. A key may carry no value at
/// all, which is distinct from an empty one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IniSection {
    entries: IndexMap<String, Option<String>>,
}

impl IniSection {
    /// The value stored under `key`, if the key exists and has one.
    pub fn value(&self, key: &str) -> Option<&str> {
        let index = self.position(key)?;
        self.entries.get_index(index).and_then(|(_, v)| v.as_deref())
    }

    /// True when `key` exists, with or without a value.
    pub fn contains_key(&self, key: &str) -> bool {
        self.position(key).is_some()
    }

    /// Insert or replace `key`. A replaced entry keeps its position and
    /// the key case it was first written with.
    pub fn set(&mut self, key: &str, value: Option<String>) {
        match self.position(key) {
            Some(index) => {
                if let Some((_, slot)) = self.entries.get_index_mut(index) {
                    *slot = value;
                }
            }
            None => {
                self.entries.insert(key.to_string(), value);
            }
        }
    }

    /// Remove `key`, reporting whether it was present.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.position(key) {
            Some(index) => {
                self.entries.shift_remove_index(index);
                true
            }
            None => false,
        }
    }

    /// Keys in insertion order, in their stored case.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.keys().position(|k| k.eq_ignore_ascii_case(key))
    }
}

/// A parsed INI document.
///
/// Sections keep their file order. Entries that appear before the first
/// header live in the global section, named by the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IniDocument {
    sections: IndexMap<String, IniSection>,
    line_term: &'static str,
}

impl Default for IniDocument {
    fn default() -> Self {
        Self {
            sections: IndexMap::new(),
            line_term: "\n",
        }
    }
}

impl IniDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// The section called `name`, ignoring ASCII case. The global
    /// section is named `""`.
    pub fn section(&self, name: &str) -> Option<&IniSection> {
        let index = self.position(name)?;
        self.sections.get_index(index).map(|(_, s)| s)
    }

    /// The section called `name`, created empty if absent. A created
    /// section stores `name` in the given case.
    pub fn section_mut(&mut self, name: &str) -> &mut IniSection {
        let index = match self.position(name) {
            Some(index) => index,
            None => {
                self.sections.insert(name.to_string(), IniSection::default());
                self.sections.len() - 1
            }
        };
        &mut self.sections[index]
    }

    /// Shorthand for a value lookup across section and key.
    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        self.section(section)?.value(key)
    }

    /// Insert or replace a key in `section`, creating the section if
    /// needed.
    pub fn set(&mut self, section: &str, key: &str, value: Option<String>) {
        self.section_mut(section).set(key, value);
    }

    /// Remove a whole section, reporting whether it was present.
    pub fn remove_section(&mut self, name: &str) -> bool {
        match self.position(name) {
            Some(index) => {
                self.sections.shift_remove_index(index);
                true
            }
            None => false,
        }
    }

    /// Sections in file order, the global one included under `""`.
    pub fn sections(&self) -> impl Iterator<Item = (&str, &IniSection)> {
        self.sections.iter().map(|(n, s)| (n.as_str(), s))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The line terminator detected when the document was parsed, `\n`
    /// for documents built in memory.
    pub fn line_term(&self) -> &'static str {
        self.line_term
    }

    pub fn set_line_term(&mut self, term: &'static str) {
        self.line_term = term;
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.sections
            .keys()
            .position(|k| k.eq_ignore_ascii_case(name))
    }
}

/// Writes the document back out in its own line terminator. Global
/// entries come first so that a re-parse puts them back in the global
/// section.
impl fmt::Display for IniDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let term = self.line_term;
        if let Some(global) = self.sections.get("") {
            write_entries(f, global, term)?;
        }
        for (name, section) in &self.sections {
            if name.is_empty() {
                continue;
            }
            write!(f, "[{name}]{term}")?;
            write_entries(f, section, term)?;
        }
        Ok(())
    }
}

fn write_entries(f: &mut fmt::Formatter<'_>, section: &IniSection, term: &str) -> fmt::Result {
    for (key, value) in section.iter() {
        match value {
            Some(value) => write!(f, "{key} = {value}{term}")?,
            None => write!(f, "{key}{term}")?,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookups_ignore_ascii_case() {
        let mut doc = IniDocument::new();
        doc.set("Server", "Host", Some("example.com".to_string()));
        assert_eq!(doc.value("SERVER", "host"), Some("example.com"));
        assert_eq!(doc.value("server", "HOST"), Some("example.com"));
        assert!(doc.section("sErVeR").is_some());
    }

    #[test]
    fn stored_case_is_preserved() {
        let mut doc = IniDocument::new();
        doc.set("Server", "Host", Some("a".to_string()));
        doc.set("SERVER", "HOST", Some("b".to_string()));
        assert_eq!(doc.len(), 1);
        let names: Vec<&str> = doc.sections().map(|(n, _)| n).collect();
        assert_eq!(names, ["Server"]);
        let keys: Vec<&str> = doc.section("server").unwrap().keys().collect();
        assert_eq!(keys, ["Host"]);
        assert_eq!(doc.value("server", "host"), Some("b"));
    }

    #[test]
    fn valueless_keys_are_distinct_from_empty_values() {
        let mut section = IniSection::default();
        section.set("bare", None);
        section.set("blank", Some(String::new()));
        assert!(section.contains_key("bare"));
        assert_eq!(section.value("bare"), None);
        assert_eq!(section.value("blank"), Some(""));
    }

    #[test]
    fn entries_keep_insertion_order() {
        let mut section = IniSection::default();
        section.set("c", Some("3".to_string()));
        section.set("a", Some("1".to_string()));
        section.set("b", Some("2".to_string()));
        let keys: Vec<&str> = section.keys().collect();
        assert_eq!(keys, ["c", "a", "b"]);
    }

    #[test]
    fn remove_reports_presence() {
        let mut doc = IniDocument::new();
        doc.set("s", "k", None);
        assert!(doc.section_mut("s").remove("K"));
        assert!(!doc.section_mut("s").remove("k"));
        assert!(doc.remove_section("S"));
        assert!(!doc.remove_section("s"));
    }

    #[test]
    fn display_writes_global_entries_first() {
        let mut doc = IniDocument::new();
        doc.set("net", "port", Some("80".to_string()));
        doc.set("", "mode", Some("fast".to_string()));
        let text = doc.to_string();
        assert_eq!(text, "mode = fast\n[net]\nport = 80\n");
    }

    #[test]
    fn display_uses_the_documents_line_term() {
        let mut doc = IniDocument::new();
        doc.set_line_term("\r\n");
        doc.set("s", "k", Some("v".to_string()));
        assert_eq!(doc.to_string(), "[s]\r\nk = v\r\n");
    }

    #[test]
    fn display_writes_valueless_keys_bare() {
        let mut doc = IniDocument::new();
        doc.set("flags", "verbose", None);
        assert_eq!(doc.to_string(), "[flags]\nverbose\n");
    }
}
