//! Size rules: `min`, `max` and `between`.
//!
//! What "size" means depends on the value, see [`size_of`]. The default
//! message follows the measured kind so a short password reads
//! "at least 6 characters" while a small number reads "at least 6".

use crate::core::{size_of, Record, Rule, SizeKind};
use crate::parser::SpecError;
use crate::registry::RuleArgs;
use serde_json::Value;
use std::sync::Arc;

#[derive(Debug, Clone)]
pub struct Min {
    limit: f64,
    raw: String,
    numeric: bool,
}

impl Min {
    pub fn new(limit: f64, numeric: bool) -> Self {
        Self {
            limit,
            raw: limit.to_string(),
            numeric,
        }
    }
}

impl Rule for Min {
    fn name(&self) -> &str {
        "min"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let measured = value.and_then(|v| size_of(v, self.numeric));
        match measured {
            Some((size, _)) if size >= self.limit => None,
            Some((_, kind)) => Some(min_message(kind).to_string()),
            None => Some(min_message(SizeKind::String).to_string()),
        }
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":min", self.raw.clone())]
    }
}

#[derive(Debug, Clone)]
pub struct Max {
    limit: f64,
    raw: String,
    numeric: bool,
}

impl Max {
    pub fn new(limit: f64, numeric: bool) -> Self {
        Self {
            limit,
            raw: limit.to_string(),
            numeric,
        }
    }
}

impl Rule for Max {
    fn name(&self) -> &str {
        "max"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let measured = value.and_then(|v| size_of(v, self.numeric));
        match measured {
            Some((size, _)) if size <= self.limit => None,
            Some((_, kind)) => Some(max_message(kind).to_string()),
            None => Some(max_message(SizeKind::String).to_string()),
        }
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":max", self.raw.clone())]
    }
}

/// Inclusive on both ends.
#[derive(Debug, Clone)]
pub struct Between {
    min: Min,
    max: Max,
}

impl Between {
    pub fn new(min: f64, max: f64, numeric: bool) -> Self {
        Self {
            min: Min::new(min, numeric),
            max: Max::new(max, numeric),
        }
    }
}

impl Rule for Between {
    fn name(&self) -> &str {
        "between"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let measured = value.and_then(|v| size_of(v, self.min.numeric));
        match measured {
            Some((size, _)) if size >= self.min.limit && size <= self.max.limit => None,
            Some((_, kind)) => Some(between_message(kind).to_string()),
            None => Some(between_message(SizeKind::String).to_string()),
        }
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":min", self.min.raw.clone()), (":max", self.max.raw.clone())]
    }
}

fn min_message(kind: SizeKind) -> &'static str {
    match kind {
        SizeKind::Numeric => "The :attribute field must be at least :min.",
        SizeKind::String => "The :attribute field must be at least :min characters.",
        SizeKind::Array => "The :attribute field must have at least :min items.",
    }
}

fn max_message(kind: SizeKind) -> &'static str {
    match kind {
        SizeKind::Numeric => "The :attribute field must not be greater than :max.",
        SizeKind::String => "The :attribute field must not be greater than :max characters.",
        SizeKind::Array => "The :attribute field must not have more than :max items.",
    }
}

fn between_message(kind: SizeKind) -> &'static str {
    match kind {
        SizeKind::Numeric => "The :attribute field must be between :min and :max.",
        SizeKind::String => "The :attribute field must be between :min and :max characters.",
        SizeKind::Array => "The :attribute field must have between :min and :max items.",
    }
}

pub(crate) fn min(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    let limit = args.number(0)?;
    Ok(Arc::new(Min {
        limit,
        raw: args.params[0].clone(),
        numeric: args.numeric,
    }))
}

pub(crate) fn max(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    let limit = args.number(0)?;
    Ok(Arc::new(Max {
        limit,
        raw: args.params[0].clone(),
        numeric: args.numeric,
    }))
}

pub(crate) fn between(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(2)?;
    let (low, high) = (args.number(0)?, args.number(1)?);
    if low > high {
        return Err(args.invalid(format!("lower bound {low} exceeds upper bound {high}")));
    }
    Ok(Arc::new(Between {
        min: Min {
            limit: low,
            raw: args.params[0].clone(),
            numeric: args.numeric,
        },
        max: Max {
            limit: high,
            raw: args.params[1].clone(),
            numeric: args.numeric,
        },
    }))
}
