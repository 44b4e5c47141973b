//! Parsers for the wrapped-value conventions used by the source datasets.
//!
//! Identifiers and dates are never stored as bare primitives. Instead they are
//! wrapped in a single-key object:
//!
//! - identifiers: `{"$oid": "5ff1e194b6a9d73a3a9f1052"}`
//! - dates: `{"$date": 1609687531000}` (epoch milliseconds)
//!
//! Both parsers are total: malformed shapes resolve to `None` and never panic.

use chrono::{DateTime, Local, TimeZone};
use serde_json::Value;

/// Key holding the identifier inside a wrapped identifier.
pub const OID_KEY: &str = "$oid";

/// Key holding the epoch-milliseconds value inside a wrapped date.
pub const DATE_KEY: &str = "$date";

/// Timestamp type produced by [`parse_wrapped_date`].
pub type Timestamp = DateTime<Local>;

/// Resolves a wrapped identifier to its inner string.
///
/// Returns `None` if `value` is not an object, has no `$oid` key, or the key
/// does not hold a non-empty string.
///
/// # Example
///
/// ```rust
/// use dqa_core::parse_identifier;
/// use serde_json::json;
///
/// assert_eq!(parse_identifier(&json!({"$oid": "abc"})), Some("abc".to_string()));
/// assert_eq!(parse_identifier(&json!("abc")), None);
/// ```
pub fn parse_identifier(value: &Value) -> Option<String> {
    value
        .as_object()?
        .get(OID_KEY)?
        .as_str()
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Resolves a wrapped date to a local timestamp.
///
/// The inner value may be an integer, a float (truncated toward zero) or a
/// string holding a decimal integer. Anything else, including values outside
/// the representable range, yields `None`.
pub fn parse_wrapped_date(value: &Value) -> Option<Timestamp> {
    let millis = epoch_millis(value.as_object()?.get(DATE_KEY)?)?;
    Local.timestamp_millis_opt(millis).single()
}

fn epoch_millis(raw: &Value) -> Option<i64> {
    match raw {
        Value::Number(n) => n.as_i64().or_else(|| {
            let f = n.as_f64()?;
            // i64::MAX is not exactly representable; stay strictly below it
            (f.is_finite() && f >= i64::MIN as f64 && f < i64::MAX as f64).then(|| f.trunc() as i64)
        }),
        Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    }
}

/// Renders a timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// A microsecond suffix (`.ffffff`) is appended only when the timestamp has a
/// non-zero sub-second part.
pub fn render_timestamp(ts: &Timestamp) -> String {
    if ts.timestamp_subsec_micros() == 0 {
        ts.format("%Y-%m-%d %H:%M:%S").to_string()
    } else {
        ts.format("%Y-%m-%d %H:%M:%S%.6f").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_identifier() {
        assert_eq!(
            parse_identifier(&json!({"$oid": "5ff1e194"})),
            Some("5ff1e194".to_string())
        );
        assert_eq!(parse_identifier(&json!({"$oid": ""})), None);
        assert_eq!(parse_identifier(&json!({"$oid": 42})), None);
        assert_eq!(parse_identifier(&json!({"id": "5ff1e194"})), None);
        assert_eq!(parse_identifier(&json!("5ff1e194")), None);
        assert_eq!(parse_identifier(&Value::Null), None);
    }

    #[test]
    fn test_parse_wrapped_date_variants() {
        let expected = Local.timestamp_millis_opt(1609687531000).single();

        assert_eq!(parse_wrapped_date(&json!({"$date": 1609687531000_i64})), expected);
        assert_eq!(parse_wrapped_date(&json!({"$date": 1609687531000.9})), expected);
        assert_eq!(parse_wrapped_date(&json!({"$date": "1609687531000"})), expected);
    }

    #[test]
    fn test_parse_wrapped_date_rejects_malformed() {
        assert!(parse_wrapped_date(&json!({"$date": "yesterday"})).is_none());
        assert!(parse_wrapped_date(&json!({"$date": null})).is_none());
        assert!(parse_wrapped_date(&json!({"$date": true})).is_none());
        assert!(parse_wrapped_date(&json!({"$date": 1e300})).is_none());
        assert!(parse_wrapped_date(&json!({"$date": i64::MAX})).is_none());
        assert!(parse_wrapped_date(&json!({"date": 1609687531000_i64})).is_none());
        assert!(parse_wrapped_date(&json!(1609687531000_i64)).is_none());
    }

    #[test]
    fn test_render_timestamp() {
        let whole = Local.timestamp_millis_opt(1609687531000).unwrap();
        let rendered = render_timestamp(&whole);
        assert_eq!(rendered.len(), "2021-01-03 15:25:31".len());
        assert!(!rendered.contains('.'));

        let fractional = Local.timestamp_millis_opt(1609687531250).unwrap();
        assert!(render_timestamp(&fractional).ends_with(".250000"));
    }
}
