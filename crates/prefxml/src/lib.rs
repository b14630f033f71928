//! prefxml - typed preference stores as XML documents.
//!
//! This crate provides a unified interface to the prefxml crates.
//!
//! # Crates
//!
//! - [`prefxml_store`] - Values, type tags and store collaborators
//! - [`prefxml_codec`] - Streaming XML export and import
//!
//! # Example
//!
//! ```no_run
//! use prefxml::prelude::*;
//!
//! let prefs = JsonPreferences::open("prefs.json")?;
//! export_to_file(&prefs, "prefs.xml", None)?;
//!
//! let restored = MemoryPreferences::new();
//! import_from_file(&restored, "prefs.xml")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use prefxml_codec as codec;
pub use prefxml_store as store;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use prefxml_codec::{
        export, export_to_file, import, import_from_file, read_entries, ExportOptions,
        ExportSummary, Exporter,
    };
    #[cfg(feature = "json")]
    pub use prefxml_store::JsonPreferences;
    pub use prefxml_store::{Editor, Kind, MemoryPreferences, Preferences, Snapshot, Value};
}

// Re-export commonly used types at the crate root
pub use prefxml_codec::{Error, Exporter};

/// Version information.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
