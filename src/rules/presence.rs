//! Presence rules.
//!
//! These are the implicit rules: they run even when the value is missing
//! or blank, because absence is exactly what they check for.

use crate::core::{is_empty_value, Record, Rule};
use crate::parser::SpecError;
use crate::registry::RuleArgs;
use serde_json::Value;
use std::sync::Arc;

/// The field must be present and not empty.
///
/// A failure stops the field's remaining rules, so a missing value is
/// reported once rather than once per format rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct Required;

impl Rule for Required {
    fn name(&self) -> &str {
        "required"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        is_empty_value(value).then(|| "The :attribute field is required.".to_string())
    }

    fn is_implicit(&self) -> bool {
        true
    }

    fn short_circuits(&self) -> bool {
        true
    }
}

/// The field is required when any of the named fields is filled.
#[derive(Debug, Clone)]
pub struct RequiredWith {
    others: Vec<String>,
}

impl RequiredWith {
    pub fn new(others: Vec<String>) -> Self {
        Self { others }
    }
}

impl Rule for RequiredWith {
    fn name(&self) -> &str {
        "required_with"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, record: &Record) -> Option<String> {
        let triggered = self
            .others
            .iter()
            .any(|other| !is_empty_value(record.get(other)));

        (triggered && is_empty_value(value))
            .then(|| "The :attribute field is required when :values is present.".to_string())
    }

    fn is_implicit(&self) -> bool {
        true
    }

    fn short_circuits(&self) -> bool {
        true
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":values", self.others.join(" / "))]
    }
}

/// The field must be "yes", "on", "1", 1, true or "true".
#[derive(Debug, Clone, Copy, Default)]
pub struct Accepted;

impl Rule for Accepted {
    fn name(&self) -> &str {
        "accepted"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let accepted = match value {
            Some(Value::Bool(b)) => *b,
            Some(Value::Number(n)) => n.as_i64() == Some(1),
            Some(Value::String(s)) => matches!(s.as_str(), "yes" | "on" | "1" | "true"),
            _ => false,
        };

        (!accepted).then(|| "The :attribute field must be accepted.".to_string())
    }

    fn is_implicit(&self) -> bool {
        true
    }
}

pub(crate) fn required(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Required))
}

pub(crate) fn required_with(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_at_least(1)?;
    Ok(Arc::new(RequiredWith::new(args.params.to_vec())))
}

pub(crate) fn accepted(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Accepted))
}
