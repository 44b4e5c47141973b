//! Best-effort value coercions used by the validators.
//!
//! Every function here is total: conversions that cannot succeed return `None`
//! so each call site decides explicitly what an unparsable value means.

use serde_json::Value;

/// Converts a JSON value to a float.
///
/// Accepts JSON numbers and strings holding a float literal (surrounding
/// whitespace is ignored). Null, booleans, arrays, objects and non-numeric
/// strings yield `None`.
///
/// # Example
///
/// ```rust
/// use dqa_core::to_number;
/// use serde_json::json;
///
/// assert_eq!(to_number(&json!("4.50")), Some(4.5));
/// assert_eq!(to_number(&json!(2)), Some(2.0));
/// assert_eq!(to_number(&json!("n/a")), None);
/// ```
pub fn to_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Renders a possibly-absent field value for inclusion in an issue message.
///
/// Strings are rendered without quotes, absent and null values as `null`,
/// everything else as compact JSON.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "null".to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

/// Renders a monetary amount using the shortest round-trip representation.
///
/// Integral values keep a single decimal place so `4.0` never collapses to `4`.
pub fn format_amount(amount: f64) -> String {
    if amount.is_finite() && amount.fract() == 0.0 {
        format!("{amount:.1}")
    } else {
        amount.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_to_number() {
        assert_eq!(to_number(&json!(1.5)), Some(1.5));
        assert_eq!(to_number(&json!(-3)), Some(-3.0));
        assert_eq!(to_number(&json!(" 2.25 ")), Some(2.25));
        assert_eq!(to_number(&json!("")), None);
        assert_eq!(to_number(&json!("abc")), None);
        assert_eq!(to_number(&json!(null)), None);
        assert_eq!(to_number(&json!(true)), None);
        assert_eq!(to_number(&json!([1])), None);
    }

    #[test]
    fn test_display_value() {
        assert_eq!(display_value(None), "null");
        assert_eq!(display_value(Some(&json!(null))), "null");
        assert_eq!(display_value(Some(&json!("fraud"))), "fraud");
        assert_eq!(display_value(Some(&json!(7))), "7");
        assert_eq!(display_value(Some(&json!(false))), "false");
        assert_eq!(display_value(Some(&json!({"a": 1}))), r#"{"a":1}"#);
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(4.5), "4.5");
        assert_eq!(format_amount(4.0), "4.0");
        assert_eq!(format_amount(0.0), "0.0");
        assert_eq!(format_amount(12.34), "12.34");
        assert_eq!(format_amount(f64::NAN), "NaN");
    }
}
