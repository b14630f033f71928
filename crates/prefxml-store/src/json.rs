//! JSON file-backed preference store.
//!
//! Entries are kept as a JSON object mapping each key to an externally
//! tagged value, for example `{"count": {"Integer": 7}, "unset": null}`.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use parking_lot::RwLock;

use crate::logging::{debug, warn};
use crate::store::{Editor, PendingEdits, Preferences, Snapshot};
use crate::{Error, Result, Value};

/// A preference store persisted as a JSON document.
///
/// Commits write the full document to a sibling temporary file and rename
/// it over the original, so the file on disk is always a complete document.
#[derive(Debug)]
pub struct JsonPreferences {
    path: PathBuf,
    entries: RwLock<Snapshot>,
}

impl JsonPreferences {
    /// Open the store at `path`, starting empty if the file does not exist.
    ///
    /// Fails with [`Error::UnsupportedValue`] if an entry holds anything other
    /// than one of the five supported kinds or null.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let entries = if path.exists() {
            let data = fs::read(&path)?;
            parse_entries(&data)?
        } else {
            Snapshot::new()
        };

        debug!(path = %path.display(), entries = entries.len(), "opened JSON preferences");

        Ok(Self {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned().flatten()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn persist(&self, entries: &Snapshot) -> Result<()> {
        let mut tmp_name = self
            .path
            .file_name()
            .map(|name| name.to_os_string())
            .unwrap_or_default();
        tmp_name.push(".tmp");
        let tmp_path = self.path.with_file_name(tmp_name);

        let file = File::create(&tmp_path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, entries)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        writer.get_ref().sync_all()?;
        drop(writer);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

fn parse_entries(data: &[u8]) -> Result<Snapshot> {
    let raw: BTreeMap<String, serde_json::Value> = serde_json::from_slice(data)?;

    raw.into_iter()
        .map(|(key, value)| match serde_json::from_value::<Option<Value>>(value) {
            Ok(value) => Ok((key, value)),
            Err(e) => Err(Error::UnsupportedValue {
                key,
                reason: e.to_string(),
            }),
        })
        .collect()
}

impl Preferences for JsonPreferences {
    type Editor<'a> = JsonEditor<'a>;

    fn all(&self) -> Snapshot {
        self.entries.read().clone()
    }

    fn edit(&self) -> JsonEditor<'_> {
        JsonEditor {
            store: self,
            pending: PendingEdits::new(),
        }
    }
}

/// Write transaction for [`JsonPreferences`].
#[derive(Debug)]
pub struct JsonEditor<'a> {
    store: &'a JsonPreferences,
    pending: PendingEdits,
}

impl Editor for JsonEditor<'_> {
    fn put(&mut self, key: &str, value: Value) -> &mut Self {
        self.pending.put(key, value);
        self
    }

    fn remove(&mut self, key: &str) -> &mut Self {
        self.pending.remove(key);
        self
    }

    fn clear(&mut self) -> &mut Self {
        self.pending.clear();
        self
    }

    fn commit(self) -> bool {
        let mut entries = self.store.entries.write();
        let mut updated = entries.clone();
        self.pending.apply(&mut updated);

        match self.store.persist(&updated) {
            Ok(()) => {
                debug!(path = %self.store.path.display(), entries = updated.len(), "committed JSON preferences");
                *entries = updated;
                true
            }
            Err(e) => {
                warn!(path = %self.store.path.display(), error = %e, "failed to persist preferences");
                false
            }
        }
    }
}
