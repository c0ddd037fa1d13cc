//! unitext-ini - Lenient INI document reading backed by the unitext codecs
//!
//! Parsing never fails: malformed lines are skipped, sections and keys
//! are looked up without regard to ASCII case while keeping the case
//! they were written with, and keys without a value are legal. File
//! bytes are decoded through the unitext codecs, sniffing UTF-16
//! byte-order marks, before any parsing happens.
//!
//! # Example
//!
//! ```
//! use unitext_ini::parse;
//!
//! let doc = parse("timeout = 30\n[server]\nhost = example.com\nno_delay\n");
//! assert_eq!(doc.value("", "timeout"), Some("30"));
//! assert_eq!(doc.value("SERVER", "Host"), Some("example.com"));
//! assert!(doc.section("server").unwrap().contains_key("no_delay"));
//! assert_eq!(doc.value("server", "no_delay"), None);
//! ```

mod document;
mod error;
mod load;
mod parse;

pub use document::{IniDocument, IniSection};
pub use error::{IniError, Result};
pub use load::{from_bytes, load};
pub use parse::parse;
