//! Membership and cross-field comparison rules.
//!
//! `confirmed`, `same` and `different` read other fields from the record,
//! which is why every rule receives the full record.

use crate::core::{scalar_string, Record, Rule};
use crate::parser::SpecError;
use crate::registry::RuleArgs;
use serde_json::Value;
use std::sync::Arc;

/// Membership in a fixed list. Arrays pass when every element is a member.
#[derive(Debug, Clone)]
pub struct In {
    values: Vec<String>,
    negated: bool,
}

impl In {
    pub fn new(values: Vec<String>) -> Self {
        Self {
            values,
            negated: false,
        }
    }

    pub fn not(values: Vec<String>) -> Self {
        Self {
            values,
            negated: true,
        }
    }

    fn contains(&self, value: &Value) -> bool {
        scalar_string(value).is_some_and(|s| self.values.contains(&s))
    }
}

impl Rule for In {
    fn name(&self) -> &str {
        if self.negated {
            "not_in"
        } else {
            "in"
        }
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match (value, self.negated) {
            (Some(Value::Array(items)), false) => items.iter().all(|v| self.contains(v)),
            (Some(Value::Array(items)), true) => !items.iter().any(|v| self.contains(v)),
            (Some(v), false) => self.contains(v),
            (Some(v), true) => !self.contains(v),
            (None, negated) => negated,
        };
        (!ok).then(|| "The selected :attribute is invalid.".to_string())
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":values", self.values.join(", "))]
    }
}

/// The value must equal `<attribute>_confirmation`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Confirmed;

impl Rule for Confirmed {
    fn name(&self) -> &str {
        "confirmed"
    }

    fn evaluate(&self, attribute: &str, value: Option<&Value>, record: &Record) -> Option<String> {
        let confirmation = record.get(&format!("{attribute}_confirmation"));
        (value != confirmation)
            .then(|| "The :attribute field confirmation does not match.".to_string())
    }
}

#[derive(Debug, Clone)]
pub struct Same {
    other: String,
}

impl Same {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }
}

impl Rule for Same {
    fn name(&self) -> &str {
        "same"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, record: &Record) -> Option<String> {
        (value != record.get(&self.other))
            .then(|| "The :attribute field must match :other.".to_string())
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":other", self.other.clone())]
    }
}

/// Passes when the other field is absent.
#[derive(Debug, Clone)]
pub struct Different {
    other: String,
}

impl Different {
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }
}

impl Rule for Different {
    fn name(&self) -> &str {
        "different"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, record: &Record) -> Option<String> {
        let other = record.get(&self.other)?;
        (value == Some(other))
            .then(|| "The :attribute field and :other must be different.".to_string())
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":other", self.other.clone())]
    }
}

pub(crate) fn in_list(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_at_least(1)?;
    Ok(Arc::new(In::new(args.params.to_vec())))
}

pub(crate) fn not_in_list(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_at_least(1)?;
    Ok(Arc::new(In::not(args.params.to_vec())))
}

pub(crate) fn confirmed(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Confirmed))
}

pub(crate) fn same(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    Ok(Arc::new(Same::new(args.params[0].clone())))
}

pub(crate) fn different(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    Ok(Arc::new(Different::new(args.params[0].clone())))
}
