//! Format rules: email, pattern, character classes, UUIDs and dates.

use crate::core::{Record, Rule};
use crate::parser::SpecError;
use crate::registry::RuleArgs;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use regex::Regex;
use serde_json::Value;
use std::sync::{Arc, LazyLock};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

#[derive(Debug, Clone, Copy, Default)]
pub struct Email;

impl Rule for Email {
    fn name(&self) -> &str {
        "email"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = value
            .and_then(Value::as_str)
            .is_some_and(|s| EMAIL_REGEX.is_match(s));
        (!ok).then(|| "The :attribute field must be a valid email address.".to_string())
    }
}

/// Matches a regular expression.
///
/// Accepts either a bare pattern or a slash-delimited one with trailing
/// flags (`/^[a-z]+$/i`), the form rule strings usually carry.
#[derive(Debug, Clone)]
pub struct Pattern {
    regex: Regex,
}

impl Pattern {
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&translate_delimited(source))?,
        })
    }
}

impl Rule for Pattern {
    fn name(&self) -> &str {
        "regex"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match value {
            Some(Value::String(s)) => self.regex.is_match(s),
            Some(Value::Number(n)) => self.regex.is_match(&n.to_string()),
            _ => false,
        };
        (!ok).then(|| "The :attribute field format is invalid.".to_string())
    }
}

fn translate_delimited(source: &str) -> String {
    let Some(body) = source.strip_prefix('/') else {
        return source.to_string();
    };
    let Some(end) = body.rfind('/') else {
        return source.to_string();
    };

    let (pattern, flags) = (&body[..end], &body[end + 1..]);
    let inline: String = flags.chars().filter(|c| matches!(c, 'i' | 'm' | 's' | 'x')).collect();
    if inline.is_empty() {
        pattern.to_string()
    } else {
        format!("(?{inline}){pattern}")
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Alpha;

impl Rule for Alpha {
    fn name(&self) -> &str {
        "alpha"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = value
            .and_then(Value::as_str)
            .is_some_and(|s| !s.is_empty() && s.chars().all(char::is_alphabetic));
        (!ok).then(|| "The :attribute field must only contain letters.".to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AlphaNum;

impl Rule for AlphaNum {
    fn name(&self) -> &str {
        "alpha_num"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = match value {
            Some(Value::String(s)) => !s.is_empty() && s.chars().all(char::is_alphanumeric),
            Some(Value::Number(n)) => n.is_u64(),
            _ => false,
        };
        (!ok).then(|| "The :attribute field must only contain letters and numbers.".to_string())
    }
}

/// Hyphenated UUIDs of any version.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidFormat;

impl Rule for UuidFormat {
    fn name(&self) -> &str {
        "uuid"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = value
            .and_then(Value::as_str)
            .is_some_and(|s| s.len() == 36 && uuid::Uuid::try_parse(s).is_ok());
        (!ok).then(|| "The :attribute field must be a valid UUID.".to_string())
    }
}

/// RFC 3339 timestamps, `YYYY-MM-DD HH:MM:SS` or plain `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Date;

impl Rule for Date {
    fn name(&self) -> &str {
        "date"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = value.and_then(Value::as_str).is_some_and(|s| {
            DateTime::parse_from_rfc3339(s).is_ok()
                || NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S").is_ok()
                || NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").is_ok()
                || NaiveDate::parse_from_str(s, "%Y-%m-%d").is_ok()
        });
        (!ok).then(|| "The :attribute field must be a valid date.".to_string())
    }
}

/// Parses with a chrono `strftime` format as a datetime, date or time.
#[derive(Debug, Clone)]
pub struct DateFormat {
    format: String,
}

impl DateFormat {
    pub fn new(format: impl Into<String>) -> Self {
        Self {
            format: format.into(),
        }
    }
}

impl Rule for DateFormat {
    fn name(&self) -> &str {
        "date_format"
    }

    fn evaluate(&self, _attribute: &str, value: Option<&Value>, _record: &Record) -> Option<String> {
        let ok = value.and_then(Value::as_str).is_some_and(|s| {
            NaiveDateTime::parse_from_str(s, &self.format).is_ok()
                || NaiveDate::parse_from_str(s, &self.format).is_ok()
                || NaiveTime::parse_from_str(s, &self.format).is_ok()
        });
        (!ok).then(|| "The :attribute field must match the format :format.".to_string())
    }

    fn placeholders(&self) -> Vec<(&'static str, String)> {
        vec![(":format", self.format.clone())]
    }
}

pub(crate) fn email(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Email))
}

pub(crate) fn regex(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    let pattern = Pattern::new(&args.params[0]).map_err(|e| args.invalid(e.to_string()))?;
    Ok(Arc::new(pattern))
}

pub(crate) fn alpha(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Alpha))
}

pub(crate) fn alpha_num(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(AlphaNum))
}

pub(crate) fn uuid(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(UuidFormat))
}

pub(crate) fn date(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(0)?;
    Ok(Arc::new(Date))
}

pub(crate) fn date_format(args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
    args.expect_params(1)?;
    Ok(Arc::new(DateFormat::new(args.params[0].clone())))
}
