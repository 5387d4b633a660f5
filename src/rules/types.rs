//! Type rules.

use crate::core::{Record, Rule};
use crate::parser::SpecError;
use crate::registry::RuleArgs;
use serde_json::Value;
use std::sync::Arc;

/// Numbers, or strings that parse as a number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Numeric;

impl Rule for Numeric {
    fn name(&self) -> &str {
        "numeric"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match value {
            Some(Value::Number(_)) => true,
            Some(Value::String(s)) => s.trim().parse::<f64>().is_ok_and(f64::is_finite),
            _ => false,
        };
        (!ok).then(|| "The :attribute field must be a number.".to_string())
    }
}

/// Whole numbers, or strings that parse as one.
#[derive(Debug, Clone, Copy, Default)]
pub struct Integer;

impl Rule for Integer {
    fn name(&self) -> &str {
        "integer"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match value {
            Some(Value::Number(n)) => n.is_i64() || n.is_u64(),
            Some(Value::String(s)) => s.trim().parse::<i64>().is_ok(),
            _ => false,
        };
        (!ok).then(|| "The :attribute field must be an integer.".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct StringType;

impl Rule for StringType {
    fn name(&self) -> &str {
        "string"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        (!matches!(value, Some(Value::String(_))))
            .then(|| "The :attribute field must be a string.".to_string())
    }
}

/// `true`, `false`, `0`, `1`, `"0"` or `"1"`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Boolean;

impl Rule for Boolean {
    fn name(&self) -> &str {
        "boolean"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match value {
            Some(Value::Bool(_)) => true,
            Some(Value::Number(n)) => matches!(n.as_i64(), Some(0 | 1)),
            Some(Value::String(s)) => matches!(s.as_str(), "0" | "1"),
            _ => false,
        };
        (!ok).then(|| "The :attribute field must be true or false.".to_string())
    }
}

pub(crate) fn numeric(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Numeric))
}

pub(crate) fn integer(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Integer))
}

pub(crate) fn string(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(StringType))
}

pub(crate) fn boolean(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Boolean))
}
