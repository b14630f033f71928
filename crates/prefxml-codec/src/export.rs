//! XML export of preference stores.

use std::collections::HashSet;
use std::io::Write;

use prefxml_store::{Preferences, Value, NAME_ATTR, ROOT_TAG};
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::logging::{debug, trace};
use crate::{ExportOptions, Result};

/// Counts of what an export wrote and skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExportSummary {
    /// Value elements written.
    pub written: usize,
    /// Entries skipped because their key was excluded.
    pub excluded: usize,
    /// Entries skipped because they had no value.
    pub null: usize,
}

/// Writes preference stores as XML documents.
#[derive(Debug, Clone, Default)]
pub struct Exporter {
    options: ExportOptions,
}

impl Exporter {
    /// Create a new exporter.
    pub fn new(options: ExportOptions) -> Self {
        Self { options }
    }

    /// The options this exporter writes with.
    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Write every entry of `store` to `sink`.
    ///
    /// The sink is flushed and dropped before returning. Bytes written before
    /// a failure are left in the sink.
    pub fn export<P, W>(&self, store: &P, sink: W) -> Result<ExportSummary>
    where
        P: Preferences + ?Sized,
        W: Write,
    {
        let entries = store.all();
        debug!(entries = entries.len(), "exporting preferences");

        let mut writer = match self.options.indent {
            Some(indent) => Writer::new_with_indent(sink, b' ', indent),
            None => Writer::new(sink),
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        writer.write_event(Event::Start(BytesStart::new(ROOT_TAG)))?;

        let mut summary = ExportSummary::default();

        for (key, value) in &entries {
            if self.options.is_excluded(key) {
                trace!(key = %key, "skipping excluded key");
                summary.excluded += 1;
                continue;
            }

            let Some(value) = value else {
                trace!(key = %key, "skipping null value");
                summary.null += 1;
                continue;
            };

            write_entry(&mut writer, key, value)?;
            summary.written += 1;
        }

        writer.write_event(Event::End(BytesEnd::new(ROOT_TAG)))?;

        let mut sink = writer.into_inner();
        sink.flush()?;

        debug!(
            written = summary.written,
            excluded = summary.excluded,
            null = summary.null,
            "export complete"
        );

        Ok(summary)
    }

    /// Export to an in-memory string.
    pub fn export_to_string<P>(&self, store: &P) -> Result<String>
    where
        P: Preferences + ?Sized,
    {
        let mut output = Vec::new();
        self.export(store, &mut output)?;
        // quick-xml only ever writes UTF-8
        String::from_utf8(output).map_err(|e| crate::Error::Xml(e.to_string()))
    }
}

/// Write a single `<Kind name="key">text</Kind>` element.
fn write_entry<W: Write>(writer: &mut Writer<W>, key: &str, value: &Value) -> Result<()> {
    let tag = value.kind().as_str();
    let text = value.to_string();

    let mut elem = BytesStart::new(tag);
    elem.push_attribute((NAME_ATTR, key));

    writer.write_event(Event::Start(elem))?;
    writer.write_event(Event::Text(BytesText::new(&text)))?;
    writer.write_event(Event::End(BytesEnd::new(tag)))?;

    trace!(key = %key, kind = tag, "wrote entry");
    Ok(())
}

/// Export `store` to `sink`, skipping keys in `excluded`.
///
/// Uses the default indentation. See [`Exporter`] for more control.
pub fn export<P, W>(store: &P, sink: W, excluded: Option<&HashSet<String>>) -> Result<ExportSummary>
where
    P: Preferences + ?Sized,
    W: Write,
{
    let options = ExportOptions::default().excluded(excluded.cloned());
    Exporter::new(options).export(store, sink)
}

#[cfg(test)]
mod tests {
    use prefxml_store::{MemoryPreferences, Snapshot};

    use super::*;

    fn sample() -> MemoryPreferences {
        [
            ("flag", Value::Boolean(true)),
            ("ratio", Value::Float(1.5)),
            ("count", Value::Integer(7)),
            ("big", Value::Long(9_999_999_999)),
            ("label", Value::from("x")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_export_document_shape() {
        let xml = Exporter::default().export_to_string(&sample()).unwrap();

        assert!(xml.starts_with(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#));
        assert!(xml.contains("<preferences>"));
        assert!(xml.contains(r#"<Boolean name="flag">true</Boolean>"#));
        assert!(xml.contains(r#"<Float name="ratio">1.5</Float>"#));
        assert!(xml.contains(r#"<Integer name="count">7</Integer>"#));
        assert!(xml.contains(r#"<Long name="big">9999999999</Long>"#));
        assert!(xml.contains(r#"<String name="label">x</String>"#));
        assert!(xml.trim_end().ends_with("</preferences>"));
    }

    #[test]
    fn test_export_skips_excluded_keys() {
        let excluded: HashSet<String> = ["label".to_string()].into_iter().collect();
        let mut output = Vec::new();
        let summary = export(&sample(), &mut output, Some(&excluded)).unwrap();

        let xml = String::from_utf8(output).unwrap();
        assert_eq!(summary.written, 4);
        assert_eq!(summary.excluded, 1);
        assert!(!xml.contains("label"));
    }

    #[test]
    fn test_export_skips_null_values() {
        let mut snapshot = Snapshot::new();
        snapshot.insert("present".to_string(), Some(Value::Integer(1)));
        snapshot.insert("absent".to_string(), None);
        let prefs = MemoryPreferences::from_snapshot(snapshot);

        let mut output = Vec::new();
        let summary = export(&prefs, &mut output, None).unwrap();

        let xml = String::from_utf8(output).unwrap();
        assert_eq!(summary, ExportSummary { written: 1, excluded: 0, null: 1 });
        assert!(!xml.contains("absent"));
    }

    #[test]
    fn test_export_escapes_markup() {
        let prefs: MemoryPreferences = [("a&b", Value::from("<tag> & \"quotes\""))]
            .into_iter()
            .collect();
        let xml = Exporter::default().export_to_string(&prefs).unwrap();

        assert!(xml.contains(r#"name="a&amp;b""#));
        assert!(xml.contains("&lt;tag&gt; &amp;"));
    }

    #[test]
    fn test_compact_export() {
        let prefs: MemoryPreferences = [("count", Value::Integer(7))].into_iter().collect();
        let xml = Exporter::new(ExportOptions::new().compact())
            .export_to_string(&prefs)
            .unwrap();

        assert_eq!(
            xml,
            concat!(
                r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
                r#"<preferences><Integer name="count">7</Integer></preferences>"#
            )
        );
    }

    #[test]
    fn test_exporter_keeps_its_options() {
        let exporter = Exporter::new(ExportOptions::new().exclude(["secret"]).indent(4));
        assert_eq!(exporter.options().indent, Some(4));
        assert!(exporter.options().is_excluded("secret"));
        assert!(!exporter.options().is_excluded("count"));

        let default = Exporter::default();
        assert_eq!(default.options().indent, Some(crate::DEFAULT_INDENT));
        assert!(default.options().excluded.is_none());
    }

    #[test]
    fn test_empty_store_exports_empty_root() {
        let xml = Exporter::new(ExportOptions::new().compact())
            .export_to_string(&MemoryPreferences::new())
            .unwrap();
        assert!(xml.ends_with("<preferences></preferences>"));
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct FailingSink;

        impl Write for FailingSink {
            fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }

            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let err = export(&sample(), FailingSink, None).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
    }
}
