//! Parse-time state machine reconstructing typed entries.
//!
//! The machine is fed element starts, text and element ends by the importer
//! and knows nothing about the XML tokenizer, so it can be driven directly.
//!
//! ```text
//! Idle --start--> InElement --text--> InElement --end--> Idle
//! ```

use prefxml_store::{Kind, Tag, Value};

use crate::{Error, Result};

/// State of the import parse.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ImportState {
    /// Outside any element, or between the children of the root.
    #[default]
    Idle,
    /// Inside the most recently opened element.
    InElement {
        tag: Tag,
        key: Option<String>,
        text: String,
    },
}

impl ImportState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ImportState::Idle)
    }

    /// Handle an element start with its `name` attribute.
    ///
    /// Fails on names outside the tag vocabulary, on value elements without
    /// a key, and on elements nested inside a value element.
    pub fn start(&mut self, name: &str, key: Option<String>) -> Result<()> {
        let tag = Tag::parse(name).ok_or_else(|| Error::UnknownTag(name.to_string()))?;

        if let ImportState::InElement {
            tag: Tag::Value(parent),
            ..
        } = self
        {
            return Err(Error::NestedElement {
                parent: *parent,
                child: name.to_string(),
            });
        }

        if let Tag::Value(kind) = tag {
            if key.is_none() {
                return Err(Error::MissingName { tag: kind });
            }
        }

        *self = ImportState::InElement {
            tag,
            key,
            text: String::new(),
        };
        Ok(())
    }

    /// Handle text content.
    ///
    /// Text outside any element or directly under the root is ignored.
    /// Several text chunks inside one value element are concatenated.
    pub fn text(&mut self, chunk: &str) {
        if let ImportState::InElement {
            tag: Tag::Value(_),
            text,
            ..
        } = self
        {
            text.push_str(chunk);
        }
    }

    /// Handle an element end, returning the entry to stage if the element
    /// was a value element.
    pub fn end(&mut self) -> Result<Option<(String, Value)>> {
        match std::mem::take(self) {
            ImportState::InElement {
                tag: Tag::Value(kind),
                key: Some(key),
                text,
            } => coerce(kind, key, text).map(Some),
            _ => Ok(None),
        }
    }
}

fn coerce(kind: Kind, key: String, text: String) -> Result<(String, Value)> {
    match kind.parse_text(&text) {
        Ok(value) => Ok((key, value)),
        Err(_) => Err(Error::InvalidValue { kind, key, text }),
    }
}
