//! Error types for preference export and import.

use prefxml_store::Kind;
use thiserror::Error;

/// Errors that can occur while exporting or importing a preferences document.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error on the sink or source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed XML.
    #[error("XML error: {0}")]
    Xml(String),

    /// UTF-8 decoding error in an element or attribute name.
    #[error("UTF-8 error: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Element name outside the tag vocabulary.
    #[error("unknown type tag <{0}>")]
    UnknownTag(String),

    /// Element text that does not parse as its tagged kind.
    #[error("invalid {kind} value for key {key:?}: {text:?}")]
    InvalidValue { kind: Kind, key: String, text: String },

    /// Value element without a `name` attribute.
    #[error("<{tag}> element is missing the \"name\" attribute")]
    MissingName { tag: Kind },

    /// Element opened inside a value element.
    #[error("<{child}> cannot appear inside <{parent}>")]
    NestedElement { parent: Kind, child: String },

    /// Document without a `preferences` root element.
    #[error("document has no <preferences> root element")]
    MissingRoot,
}

impl Error {
    /// Whether this error describes bad input rather than an I/O failure.
    pub fn is_parse_failure(&self) -> bool {
        matches!(
            self,
            Error::Xml(_)
                | Error::Utf8(_)
                | Error::UnknownTag(_)
                | Error::InvalidValue { .. }
                | Error::MissingName { .. }
                | Error::NestedElement { .. }
                | Error::MissingRoot
        )
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        match err {
            quick_xml::Error::Io(io) => Error::Io(std::io::Error::new(io.kind(), io.to_string())),
            other => Error::Xml(other.to_string()),
        }
    }
}

/// Result type for codec operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_failure_classification() {
        assert!(Error::UnknownTag("Double".to_string()).is_parse_failure());
        assert!(Error::MissingRoot.is_parse_failure());
        assert!(Error::Xml("bad".to_string()).is_parse_failure());
        assert!(!Error::Io(std::io::Error::other("disk")).is_parse_failure());
    }

    #[test]
    fn test_quick_xml_io_error_maps_to_io() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let err = Error::from(quick_xml::Error::from(io));
        assert!(matches!(err, Error::Io(ref e) if e.kind() == std::io::ErrorKind::BrokenPipe));
    }
}
