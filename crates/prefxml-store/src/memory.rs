//! In-memory preference store.

use parking_lot::RwLock;

use crate::logging::debug;
use crate::store::{Editor, PendingEdits, Preferences, Snapshot};
use crate::Value;

/// A preference store held entirely in memory.
///
/// Readers take a shared lock; a commit applies every staged change under a
/// single exclusive lock, so concurrent readers see all of a commit or none
/// of it.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    entries: RwLock<Snapshot>,
}

impl MemoryPreferences {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a snapshot, including null-valued entries.
    pub fn from_snapshot(entries: Snapshot) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    /// Get the value stored under `key`.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.entries.read().get(key).cloned().flatten()
    }

    /// Whether `key` is present, with or without a value.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for MemoryPreferences {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self::from_snapshot(
            iter.into_iter()
                .map(|(key, value)| (key.into(), Some(value)))
                .collect(),
        )
    }
}

impl Preferences for MemoryPreferences {
    type Editor<'a> = MemoryEditor<'a>;

    fn all(&self) -> Snapshot {
        self.entries.read().clone()
    }

    fn edit(&self) -> MemoryEditor<'_> {
        MemoryEditor {
            store: self,
            pending: PendingEdits::new(),
        }
    }
}

/// Write transaction for [`MemoryPreferences`].
#[derive(Debug)]
pub struct MemoryEditor<'a> {
    store: &'a MemoryPreferences,
    pending: PendingEdits,
}

impl Editor for MemoryEditor<'_> {
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
        debug!(changes = self.pending.len(), "committing in-memory preferences");
        let mut entries = self.store.entries.write();
        self.pending.apply(&mut entries);
        true
    }
}
