//! Export configuration.

use std::collections::HashSet;

/// Default number of spaces per nesting level.
pub const DEFAULT_INDENT: usize = 2;

/// Options controlling how a document is written.
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Keys that are never written (passwords, tokens, and so on).
    pub excluded: Option<HashSet<String>>,
    /// Spaces per nesting level, or `None` for a compact document.
    pub indent: Option<usize>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            excluded: None,
            indent: Some(DEFAULT_INDENT),
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add keys to the exclusion set.
    pub fn exclude<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.excluded
            .get_or_insert_with(HashSet::new)
            .extend(keys.into_iter().map(Into::into));
        self
    }

    /// Replace the exclusion set.
    pub fn excluded(mut self, excluded: Option<HashSet<String>>) -> Self {
        self.excluded = excluded;
        self
    }

    /// Set the indentation width.
    pub fn indent(mut self, indent: usize) -> Self {
        self.indent = Some(indent);
        self
    }

    /// Write the document without indentation or line breaks.
    pub fn compact(mut self) -> Self {
        self.indent = None;
        self
    }

    /// Whether `key` must be skipped.
    pub fn is_excluded(&self, key: &str) -> bool {
        self.excluded
            .as_ref()
            .is_some_and(|excluded| excluded.contains(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_excludes_nothing() {
        let options = ExportOptions::default();
        assert!(!options.is_excluded("password"));
        assert_eq!(options.indent, Some(DEFAULT_INDENT));
    }

    #[test]
    fn test_exclude_accumulates() {
        let options = ExportOptions::new()
            .exclude(["password"])
            .exclude(vec!["token".to_string()])
            .compact();

        assert!(options.is_excluded("password"));
        assert!(options.is_excluded("token"));
        assert!(!options.is_excluded("user"));
        assert_eq!(options.indent, None);
    }
}
