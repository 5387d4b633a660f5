//! The rule capability shared by built-in and user-defined checks.
//!
//! Every check the engine runs, whether it came from a compact string like
//! `"max:100"` or from a caller-supplied object, is a value implementing
//! this trait. The engine never dispatches on rule names while evaluating.

use super::value::Record;
use serde_json::Value;

/// A single named check applied to one field's value.
///
/// Rules are pure: given the same attribute, value and record they must
/// return the same answer, and they must not mutate anything. They are
/// `Send + Sync` so one compiled rule set can be shared across threads.
///
/// A failing rule returns a message template. The engine substitutes
/// `:attribute` and every placeholder from [`Rule::placeholders`] after
/// resolving any caller-supplied override for the rule's name.
///
/// # Example
///
/// ```rust
/// use vetting::core::{Record, Rule};
/// use serde_json::Value;
///
/// struct Uppercase;
///
/// impl Rule for Uppercase {
///     fn name(&self) -> &str {
///         "uppercase"
///     }
///
///     fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
///         match value.and_then(Value::as_str) {
///             Some(s) if s == s.to_uppercase() => None,
///             _ => Some("The :attribute must be uppercase.".to_string()),
///         }
///     }
/// }
///
/// let rule = Uppercase;
/// let record = Record::new();
/// assert!(rule.evaluate("code", Some(&Value::from("ABC")), &record).is_none());
/// assert!(rule.evaluate("code", Some(&Value::from("abc")), &record).is_some());
/// ```
pub trait Rule: Send + Sync {
    /// Name used for message overrides and diagnostics.
    fn name(&self) -> &str;

    /// Run the check. `None` passes; `Some(template)` fails.
    ///
    /// `value` is `None` when the record has no such key.
    fn evaluate(&self, attribute: &str, value: Option<&Value>, record: &Record) -> Option<String>;

    /// Whether the rule runs even when the value is missing or blank.
    ///
    /// Default implementation returns `false`.
    fn is_implicit(&self) -> bool {
        false
    }

    /// Whether a failure stops the remaining rules of the same field.
    ///
    /// Default implementation returns `false`.
    fn short_circuits(&self) -> bool {
        false
    }

    /// Rule-specific placeholder substitutions, e.g. `(":min", "6")`.
    fn placeholders(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }
}
