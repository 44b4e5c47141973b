//! Loosely-typed record representation.
//!
//! Records are kept as plain JSON maps. Every check looks a field up
//! explicitly, so an absent or wrongly-typed field becomes a finding instead
//! of a decoding failure.

use dqa_core::{Timestamp, parse_identifier, parse_wrapped_date};
use serde_json::{Map, Value};

/// Field holding the wrapped record identifier.
pub const ID_FIELD: &str = "_id";

/// A single decoded line of a dataset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    fields: Map<String, Value>,
}

impl Record {
    /// Decodes one line.
    ///
    /// Returns `None` if the line is not valid UTF-8 JSON or does not hold an
    /// object.
    pub fn parse(line: impl AsRef<[u8]>) -> Option<Self> {
        match serde_json::from_slice::<Value>(line.as_ref()).ok()? {
            Value::Object(fields) => Some(Self { fields }),
            _ => None,
        }
    }

    /// Returns true if the key exists, whatever its value (null included).
    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Raw field lookup.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Field lookup treating null as absent.
    pub fn get_present(&self, field: &str) -> Option<&Value> {
        present(self.fields.get(field))
    }

    /// Non-empty string field.
    pub fn get_str(&self, field: &str) -> Option<&str> {
        non_empty_str(self.fields.get(field))
    }

    /// Resolves the wrapped `_id` of the record.
    pub fn identifier(&self) -> Option<String> {
        self.get(ID_FIELD).and_then(parse_identifier)
    }

    /// Resolves a wrapped date field.
    pub fn date(&self, field: &str) -> Option<Timestamp> {
        self.get(field).and_then(parse_wrapped_date)
    }

    /// Underlying map.
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

impl From<Map<String, Value>> for Record {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

/// Drops null values.
pub fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

/// Keeps only non-empty strings.
pub fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_object_line() {
        let record = Record::parse(r#"{"_id": {"$oid": "u1"}, "active": null}"#).unwrap();
        assert_eq!(record.identifier(), Some("u1".to_string()));
        assert!(record.has("active"));
        assert!(record.get_present("active").is_none());
        assert!(!record.has("role"));
    }

    #[test]
    fn test_parse_rejects_non_objects() {
        assert!(Record::parse("not json").is_none());
        assert!(Record::parse("").is_none());
        assert!(Record::parse("[1, 2]").is_none());
        assert!(Record::parse("42").is_none());
        assert!(Record::parse(r#"{"_id": "#).is_none());
    }

    #[test]
    fn test_parse_rejects_invalid_utf8() {
        assert!(Record::parse(b"\xff\xfe garbage").is_none());
        assert!(Record::parse(b"{\"name\": \"caf\xe9\"}").is_none());
        assert!(Record::parse("{\"name\": \"café\"}".as_bytes()).is_some());
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert!(Record::parse("  {\"a\": 1}\r").is_some());
    }

    #[test]
    fn test_string_accessors() {
        let record = Record::from(
            json!({"userId": "u1", "empty": "", "n": 3})
                .as_object()
                .cloned()
                .unwrap(),
        );
        assert_eq!(record.get_str("userId"), Some("u1"));
        assert_eq!(record.get_str("empty"), None);
        assert_eq!(record.get_str("n"), None);
        assert_eq!(record.get_str("missing"), None);
    }

    #[test]
    fn test_missing_identifier() {
        let record = Record::parse(r#"{"_id": "plain"}"#).unwrap();
        assert_eq!(record.identifier(), None);
    }
}
