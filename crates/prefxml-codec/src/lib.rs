//! Streaming XML export and import of typed preference stores.
//!
//! A store is written as a flat document where every entry becomes an element
//! named after its value's kind:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8" standalone="yes"?>
//! <preferences>
//!   <Boolean name="key1">true</Boolean>
//!   <Float name="key2">3.5</Float>
//!   <Integer name="key3">42</Integer>
//!   <Long name="key4">123456789012</Long>
//!   <String name="key5">hello</String>
//! </preferences>
//! ```
//!
//! Import reads such a document back and applies every entry through one
//! editor, committed only after the whole document parsed.
//!
//! # Example
//!
//! ```
//! use prefxml_codec::{export, import};
//! use prefxml_store::{MemoryPreferences, Value};
//!
//! let source: MemoryPreferences = [("count", Value::Integer(7))].into_iter().collect();
//! let mut xml = Vec::new();
//! export(&source, &mut xml, None)?;
//!
//! let target = MemoryPreferences::new();
//! assert!(import(&target, xml.as_slice())?);
//! assert_eq!(target.get("count"), Some(Value::Integer(7)));
//! # Ok::<(), prefxml_codec::Error>(())
//! ```

mod error;
mod export;
mod file;
mod import;
mod logging;
mod options;
mod state;

pub use error::{Error, Result};
pub use export::{export, ExportSummary, Exporter};
pub use file::{export_to_file, import_from_file};
pub use import::{import, read_entries};
pub use options::{ExportOptions, DEFAULT_INDENT};
pub use state::ImportState;
