//! Input records and the value inspections shared by rules.
//!
//! A record is an ordered JSON object. Rules never mutate it; they inspect
//! single values through the pure helpers in this module.

use serde_json::{Map, Value};

/// Mapping from field name to value, in insertion order.
pub type Record = Map<String, Value>;

/// Build a record from any JSON value.
///
/// Objects become records as-is. Anything else yields an empty record,
/// since a non-object input has no named fields to validate.
///
/// # Example
///
/// ```rust
/// use vetting::core::record;
/// use serde_json::json;
///
/// let data = record(json!({ "username": "haris", "password": "secret" }));
/// assert_eq!(data.len(), 2);
/// assert!(record(json!("not an object")).is_empty());
/// ```
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        _ => Record::new(),
    }
}

/// Whether a value counts as absent for the purpose of presence rules.
///
/// Missing keys, `null`, strings that are empty after trimming, and empty
/// arrays or objects are all absent.
pub fn is_empty_value(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(Value::Array(items)) => items.is_empty(),
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    }
}

/// Whether non-implicit rules should run against this value.
///
/// Only a missing key or a blank string disqualifies a value; an explicit
/// `null` is still validated unless the field is marked nullable.
pub fn is_validatable(value: Option<&Value>) -> bool {
    match value {
        None => false,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(_) => true,
    }
}

/// The unit a size rule measures a value in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeKind {
    Numeric,
    String,
    Array,
}

/// Measure a value for `min`/`max`/`between`.
///
/// Numbers measure by value. Strings measure by character count, unless
/// `numeric` is set and the string parses as a number. Arrays and objects
/// measure by element count. Booleans and `null` have no size.
pub fn size_of(value: &Value, numeric: bool) -> Option<(f64, SizeKind)> {
    match value {
        Value::Number(n) => n.as_f64().map(|v| (v, SizeKind::Numeric)),
        Value::String(s) => {
            if numeric {
                if let Ok(v) = s.trim().parse::<f64>() {
                    return Some((v, SizeKind::Numeric));
                }
            }
            Some((s.chars().count() as f64, SizeKind::String))
        }
        Value::Array(items) => Some((items.len() as f64, SizeKind::Array)),
        Value::Object(map) => Some((map.len() as f64, SizeKind::Array)),
        Value::Bool(_) | Value::Null => None,
    }
}

/// Render a scalar as the string a list or comparison rule matches against.
///
/// Strings render without quotes, booleans as `1`/`0`, numbers via their
/// JSON form. Structured values have no scalar form.
pub fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(true) => Some("1".to_string()),
        Value::Bool(false) => Some("0".to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}
