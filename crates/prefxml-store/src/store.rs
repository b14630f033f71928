//! Read and write interfaces of a preference store.

use std::collections::BTreeMap;

use crate::Value;

/// A point-in-time copy of a store's entries.
///
/// A `None` value marks a key that exists without a value.
pub type Snapshot = BTreeMap<String, Option<Value>>;

/// A string-keyed store of typed preference values.
pub trait Preferences {
    /// Write transaction handed out by [`edit`](Preferences::edit).
    type Editor<'a>: Editor
    where
        Self: 'a;

    /// Return a complete snapshot of the store's entries.
    fn all(&self) -> Snapshot;

    /// Open a write transaction against this store.
    fn edit(&self) -> Self::Editor<'_>;
}

/// A write transaction staging changes until [`commit`](Editor::commit).
///
/// Staged changes are invisible to readers until commit, and all of them
/// become visible together. Dropping an editor without committing discards
/// everything it staged.
pub trait Editor {
    /// Stage a value for `key`, replacing any existing one.
    fn put(&mut self, key: &str, value: Value) -> &mut Self;

    /// Stage removal of `key`.
    fn remove(&mut self, key: &str) -> &mut Self;

    /// Stage removal of every entry in the store.
    fn clear(&mut self) -> &mut Self;

    /// Apply all staged changes atomically.
    ///
    /// Returns `false` if the store rejected the commit, in which case none
    /// of the changes are visible.
    fn commit(self) -> bool;

    fn put_boolean(&mut self, key: &str, value: bool) -> &mut Self {
        self.put(key, Value::Boolean(value))
    }

    fn put_float(&mut self, key: &str, value: f32) -> &mut Self {
        self.put(key, Value::Float(value))
    }

    fn put_int(&mut self, key: &str, value: i32) -> &mut Self {
        self.put(key, Value::Integer(value))
    }

    fn put_long(&mut self, key: &str, value: i64) -> &mut Self {
        self.put(key, Value::Long(value))
    }

    fn put_string(&mut self, key: &str, value: impl Into<String>) -> &mut Self {
        self.put(key, Value::String(value.into()))
    }
}

#[derive(Debug, Clone)]
enum Edit {
    Put(String, Value),
    Remove(String),
    Clear,
}

/// Ordered list of staged changes shared by the bundled editors.
#[derive(Debug, Clone, Default)]
pub struct PendingEdits {
    edits: Vec<Edit>,
}

impl PendingEdits {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&mut self, key: &str, value: Value) {
        self.edits.push(Edit::Put(key.to_string(), value));
    }

    pub fn remove(&mut self, key: &str) {
        self.edits.push(Edit::Remove(key.to_string()));
    }

    pub fn clear(&mut self) {
        self.edits.push(Edit::Clear);
    }

    /// Number of staged changes.
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Apply the staged changes to `entries` in the order they were staged.
    pub fn apply(self, entries: &mut Snapshot) {
        for edit in self.edits {
            match edit {
                Edit::Put(key, value) => {
                    entries.insert(key, Some(value));
                }
                Edit::Remove(key) => {
                    entries.remove(&key);
                }
                Edit::Clear => entries.clear(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_edits_apply_in_order() {
        let mut entries = Snapshot::new();
        entries.insert("old".to_string(), Some(Value::Integer(1)));
        entries.insert("gone".to_string(), None);

        let mut edits = PendingEdits::new();
        assert!(edits.is_empty());
        edits.put("a", Value::Boolean(true));
        edits.clear();
        edits.put("b", Value::Long(2));
        edits.put("c", Value::from("x"));
        edits.remove("c");
        assert_eq!(edits.len(), 5);
        assert!(!edits.is_empty());

        edits.apply(&mut entries);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries.get("b"), Some(&Some(Value::Long(2))));
    }
}
