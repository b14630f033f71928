//! Typed preference values and key/value store collaborators.
//!
//! This crate holds the data model shared by the prefxml codec:
//!
//! - [`Value`] - One of the five supported scalar kinds
//! - [`Kind`] and [`Tag`] - The closed type tag vocabulary used on the wire
//! - [`Preferences`] and [`Editor`] - Read snapshot and transactional write side
//! - [`MemoryPreferences`] - In-memory store with atomic commits
//! - [`JsonPreferences`] - File-backed store (requires the `json` feature)
//!
//! # Example
//!
//! ```
//! use prefxml_store::{Editor, MemoryPreferences, Preferences, Value};
//!
//! let prefs = MemoryPreferences::new();
//! let mut editor = prefs.edit();
//! editor.put_int("count", 7).put_boolean("flag", true);
//! assert!(editor.commit());
//!
//! assert_eq!(prefs.get("count"), Some(Value::Integer(7)));
//! ```

mod error;
mod logging;
mod memory;
mod store;
mod value;

#[cfg(feature = "json")]
mod json;

pub use error::{Error, Result};
pub use memory::{MemoryEditor, MemoryPreferences};
pub use store::{Editor, PendingEdits, Preferences, Snapshot};
pub use value::{Kind, Tag, Value, NAME_ATTR, ROOT_TAG};

#[cfg(feature = "json")]
pub use json::{JsonEditor, JsonPreferences};
