//! File-based convenience wrappers.

use std::collections::HashSet;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use prefxml_store::Preferences;

use crate::logging::debug;
use crate::{export, import, ExportSummary, Result};

/// Export `store` to the file at `path`, creating or truncating it.
pub fn export_to_file<P>(
    store: &P,
    path: impl AsRef<Path>,
    excluded: Option<&HashSet<String>>,
) -> Result<ExportSummary>
where
    P: Preferences + ?Sized,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "exporting preferences to file");

    let file = File::create(path)?;
    export(store, BufWriter::new(file), excluded)
}

/// Import the preferences document at `path` into `store`.
pub fn import_from_file<P>(store: &P, path: impl AsRef<Path>) -> Result<bool>
where
    P: Preferences + ?Sized,
{
    let path = path.as_ref();
    debug!(path = %path.display(), "importing preferences from file");

    let file = File::open(path)?;
    import(store, file)
}

#[cfg(test)]
mod tests {
    use prefxml_store::{MemoryPreferences, Value};

    use super::*;

    #[test]
    fn test_file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.xml");

        let source: MemoryPreferences = [
            ("flag", Value::Boolean(false)),
            ("name", Value::from("Ada")),
            ("password", Value::from("hunter2")),
        ]
        .into_iter()
        .collect();
        let excluded: HashSet<String> = ["password".to_string()].into_iter().collect();

        let summary = export_to_file(&source, &path, Some(&excluded)).unwrap();
        assert_eq!(summary.written, 2);

        let target = MemoryPreferences::new();
        assert!(import_from_file(&target, &path).unwrap());
        assert_eq!(target.len(), 2);
        assert_eq!(target.get("name"), Some(Value::from("Ada")));
        assert!(!target.contains("password"));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let target = MemoryPreferences::new();

        let err = import_from_file(&target, dir.path().join("nope.xml")).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
