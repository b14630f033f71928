//! XML import into preference stores.

use std::io::{BufReader, Read};

use prefxml_store::{Editor, Preferences, Tag, Value, NAME_ATTR};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::logging::{debug, trace, warn};
use crate::state::ImportState;
use crate::{Error, Result};

/// Parse a preferences document, calling `on_entry` for every value element
/// in document order.
///
/// Stops at the first error; entries already reported stay reported.
pub fn read_entries<R, F>(source: R, mut on_entry: F) -> Result<usize>
where
    R: Read,
    F: FnMut(String, Value),
{
    let mut reader = Reader::from_reader(BufReader::new(source));
    reader.config_mut().expand_empty_elements = true;

    let mut buf = Vec::new();
    let mut state = ImportState::new();
    let mut open: Vec<String> = Vec::new();
    let mut saw_root = false;
    let mut closed_top_level = false;
    let mut count = 0;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(e) => {
                let name = std::str::from_utf8(e.name().as_ref())?.to_string();
                if open.is_empty() && closed_top_level {
                    return Err(Error::Xml(format!(
                        "<{}> after the document element",
                        name
                    )));
                }
                let key = name_attribute(&e)?;

                state.start(&name, key)?;
                if Tag::parse(&name) == Some(Tag::Root) {
                    saw_root = true;
                }
                open.push(name);
            }
            Event::Text(e) => {
                let text = e.unescape().map_err(|e| Error::Xml(e.to_string()))?;
                if open.is_empty() {
                    reject_top_level_text(&text)?;
                }
                state.text(&text);
            }
            Event::CData(e) => {
                let bytes = e.into_inner();
                let text = std::str::from_utf8(&bytes)?;
                if open.is_empty() {
                    reject_top_level_text(text)?;
                }
                state.text(text);
            }
            Event::End(_) => {
                open.pop();
                if open.is_empty() {
                    closed_top_level = true;
                }
                if let Some((key, value)) = state.end()? {
                    trace!(key = %key, kind = %value.kind(), "read entry");
                    on_entry(key, value);
                    count += 1;
                }
            }
            Event::Eof => break,
            _ => {} // Declarations, comments, processing instructions, doctypes
        }
        buf.clear();
    }

    if let Some(name) = open.last() {
        return Err(Error::Xml(format!("unexpected end of document inside <{}>", name)));
    }
    if !saw_root {
        return Err(Error::MissingRoot);
    }

    Ok(count)
}

/// Only whitespace may appear outside the document element.
fn reject_top_level_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        Ok(())
    } else {
        Err(Error::Xml(format!(
            "text outside the document element: {:?}",
            text.trim()
        )))
    }
}

/// Read the unescaped `name` attribute of an element, if present.
fn name_attribute(e: &BytesStart<'_>) -> Result<Option<String>> {
    let attr = e
        .try_get_attribute(NAME_ATTR)
        .map_err(|e| Error::Xml(e.to_string()))?;

    match attr {
        Some(attr) => {
            let value = attr.unescape_value().map_err(|e| Error::Xml(e.to_string()))?;
            Ok(Some(value.into_owned()))
        }
        None => Ok(None),
    }
}

/// Import a preferences document from `source` into `store`.
///
/// All entries are staged in a single editor and committed together once the
/// whole document has been read. On any error the editor is dropped without
/// committing, leaving `store` unchanged. Returns the store's commit result.
pub fn import<P, R>(store: &P, source: R) -> Result<bool>
where
    P: Preferences + ?Sized,
    R: Read,
{
    let mut editor = store.edit();

    let staged = read_entries(source, |key, value| {
        editor.put(&key, value);
    })?;

    debug!(entries = staged, "committing imported preferences");

    let committed = editor.commit();
    if !committed {
        warn!(entries = staged, "store rejected imported preferences");
    }

    Ok(committed)
}
