//! Scalar preference values and the type tag vocabulary.
//!
//! Every value carries one of five [`Kind`]s. The kind's name doubles as the
//! XML element name, so the vocabulary is closed: `Boolean`, `Float`,
//! `Integer`, `Long` and `String`, plus the `preferences` root tag.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "json")]
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Name of the document root element.
pub const ROOT_TAG: &str = "preferences";

/// Name of the attribute holding an entry's key.
pub const NAME_ATTR: &str = "name";

/// The kind of a preference value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Boolean,
    Float,
    Integer,
    Long,
    String,
}

impl Kind {
    /// All supported kinds, in tag vocabulary order.
    pub const ALL: [Kind; 5] = [
        Kind::Boolean,
        Kind::Float,
        Kind::Integer,
        Kind::Long,
        Kind::String,
    ];

    /// The element name used for this kind.
    pub const fn as_str(self) -> &'static str {
        match self {
            Kind::Boolean => "Boolean",
            Kind::Float => "Float",
            Kind::Integer => "Integer",
            Kind::Long => "Long",
            Kind::String => "String",
        }
    }

    /// Coerce element text into a value of this kind.
    ///
    /// Strings are taken verbatim. Other kinds ignore surrounding whitespace.
    ///
    /// Booleans accept only `true`/`false` in any ASCII case. This is stricter
    /// than a lenient "anything but `true` is `false`" reading: text such as
    /// `yes`, `1` or an empty element is an [`Error::InvalidValue`], not
    /// `false`.
    pub fn parse_text(self, text: &str) -> Result<Value> {
        let invalid = || Error::InvalidValue {
            kind: self,
            text: text.to_string(),
        };
        let trimmed = text.trim();

        let value = match self {
            Kind::Boolean => {
                if trimmed.eq_ignore_ascii_case("true") {
                    Value::Boolean(true)
                } else if trimmed.eq_ignore_ascii_case("false") {
                    Value::Boolean(false)
                } else {
                    return Err(invalid());
                }
            }
            Kind::Float => Value::Float(trimmed.parse().map_err(|_| invalid())?),
            Kind::Integer => Value::Integer(trimmed.parse().map_err(|_| invalid())?),
            Kind::Long => Value::Long(trimmed.parse().map_err(|_| invalid())?),
            Kind::String => Value::String(text.to_string()),
        };

        Ok(value)
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Kind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| Error::UnknownKind(s.to_string()))
    }
}

/// An element name in a preferences document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// The `preferences` root element.
    Root,
    /// A value-bearing element.
    Value(Kind),
}

impl Tag {
    /// Resolve an element name, or `None` if it is outside the vocabulary.
    pub fn parse(name: &str) -> Option<Self> {
        if name == ROOT_TAG {
            return Some(Tag::Root);
        }
        name.parse::<Kind>().ok().map(Tag::Value)
    }

    /// The element name for this tag.
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Root => ROOT_TAG,
            Tag::Value(kind) => kind.as_str(),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A typed preference value.
///
/// `Display` renders the canonical text form written into documents.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "json", derive(Serialize, Deserialize))]
pub enum Value {
    Boolean(bool),
    Float(f32),
    Integer(i32),
    Long(i64),
    String(String),
}

impl Value {
    /// The kind (and therefore the element name) of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Float(_) => Kind::Float,
            Value::Integer(_) => Kind::Integer,
            Value::Long(_) => Kind::Long,
            Value::String(_) => Kind::String,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_f32(&self) -> Option<f32> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i32(&self) -> Option<i32> {
        match self {
            Value::Integer(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Long(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(v) => Some(v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(v) => write!(f, "{}", v),
            Value::Float(v) => write_float(f, *v),
            Value::Integer(v) => write!(f, "{}", v),
            Value::Long(v) => write!(f, "{}", v),
            Value::String(v) => f.write_str(v),
        }
    }
}

/// Shortest round-tripping decimal, always with a fractional part.
fn write_float(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }
    if v.is_infinite() {
        return f.write_str(if v > 0.0 { "Infinity" } else { "-Infinity" });
    }

    let text = v.to_string();
    if text.contains('.') {
        f.write_str(&text)
    } else {
        write!(f, "{}.0", text)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names_round_trip() {
        for kind in Kind::ALL {
            assert_eq!(kind.as_str().parse::<Kind>().unwrap(), kind);
        }
        assert!(matches!("Double".parse::<Kind>(), Err(Error::UnknownKind(_))));
        assert!("boolean".parse::<Kind>().is_err());
    }

    #[test]
    fn test_tag_parse() {
        assert_eq!(Tag::parse("preferences"), Some(Tag::Root));
        assert_eq!(Tag::parse("Long"), Some(Tag::Value(Kind::Long)));
        assert_eq!(Tag::parse("Preferences"), None);
        assert_eq!(Tag::parse("StringSet"), None);
    }

    #[test]
    fn test_canonical_text() {
        assert_eq!(Value::Boolean(true).to_string(), "true");
        assert_eq!(Value::Float(1.5).to_string(), "1.5");
        assert_eq!(Value::Float(2.75).to_string(), "2.75");
        assert_eq!(Value::Float(2.0).to_string(), "2.0");
        assert_eq!(Value::Float(-0.25).to_string(), "-0.25");
        assert_eq!(Value::Float(f32::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Float(f32::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::Float(f32::NAN).to_string(), "NaN");
        assert_eq!(Value::Integer(-42).to_string(), "-42");
        assert_eq!(Value::Long(9_999_999_999).to_string(), "9999999999");
        assert_eq!(Value::from("a <b>").to_string(), "a <b>");
    }

    #[test]
    fn test_parse_text() {
        assert_eq!(Kind::Boolean.parse_text("TRUE").unwrap(), Value::Boolean(true));
        assert_eq!(Kind::Boolean.parse_text(" false\n").unwrap(), Value::Boolean(false));
        assert_eq!(Kind::Float.parse_text("2.75").unwrap(), Value::Float(2.75));
        assert_eq!(Kind::Float.parse_text("1.0E10").unwrap(), Value::Float(1.0e10));
        assert_eq!(
            Kind::Float.parse_text("-Infinity").unwrap(),
            Value::Float(f32::NEG_INFINITY)
        );
        assert_eq!(Kind::Integer.parse_text("42").unwrap(), Value::Integer(42));
        assert_eq!(
            Kind::Long.parse_text("123456789012").unwrap(),
            Value::Long(123_456_789_012)
        );
        assert_eq!(
            Kind::String.parse_text("  padded ").unwrap(),
            Value::from("  padded ")
        );
    }

    #[test]
    fn test_parse_text_rejects_bad_input() {
        assert!(matches!(
            Kind::Float.parse_text("abc"),
            Err(Error::InvalidValue { kind: Kind::Float, .. })
        ));
        for text in ["yes", "1", "", "truthy"] {
            assert!(matches!(
                Kind::Boolean.parse_text(text),
                Err(Error::InvalidValue { kind: Kind::Boolean, .. })
            ));
        }
        assert!(Kind::Integer.parse_text("notanumber").is_err());
        assert!(Kind::Integer.parse_text("123456789012").is_err());
        assert!(Kind::Long.parse_text("").is_err());
    }

    #[test]
    fn test_accessors_match_kind() {
        assert_eq!(Value::Boolean(true).as_bool(), Some(true));
        assert_eq!(Value::Float(1.5).as_f32(), Some(1.5));
        assert_eq!(Value::Integer(-3).as_i32(), Some(-3));
        assert_eq!(Value::Long(1 << 40).as_i64(), Some(1 << 40));
        assert_eq!(Value::from("x").as_str(), Some("x"));

        // No widening between kinds.
        assert_eq!(Value::Integer(7).as_i64(), None);
        assert_eq!(Value::Long(7).as_i32(), None);
        assert_eq!(Value::Integer(1).as_bool(), None);
        assert_eq!(Value::from("1.5").as_f32(), None);
        assert_eq!(Value::Boolean(false).as_str(), None);
    }

    #[test]
    fn test_float_text_round_trips() {
        for v in [0.1f32, 1.0 / 3.0, f32::MAX, f32::MIN_POSITIVE, -7.0] {
            let text = Value::Float(v).to_string();
            assert_eq!(Kind::Float.parse_text(&text).unwrap(), Value::Float(v));
        }
    }
}
