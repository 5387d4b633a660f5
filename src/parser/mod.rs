//! Rule specifications and their parser.
//!
//! A specification declares, per field, an ordered list of rules in one of
//! two forms:
//!
//! - compact: `"required|email|max:100"`
//! - list: `["required", "min:6", Uppercase]`, where items are single rule
//!   tokens or rule objects
//!
//! Each token is `name` or `name:param,param`. Parameters of `regex` and
//! `date_format` are taken verbatim. Parameters cannot contain the `|`
//! delimiter in compact form; use list form for those.
//!
//! Parsing resolves every name through a [`RuleRegistry`] once, producing
//! a [`RuleSet`] that evaluation uses without any further lookups.
//!
//! # Example
//!
//! ```rust
//! use vetting::parser::RuleSpec;
//! use vetting::registry::RuleRegistry;
//!
//! let spec = RuleSpec::new()
//!     .field("username", "required|email|max:100")
//!     .field("password", ["required", "min:6", "max:20"]);
//!
//! let rules = spec.compile(&RuleRegistry::new()).unwrap();
//! assert_eq!(rules.field("username").unwrap().rule_names(), vec!["required", "email", "max"]);
//! ```

pub mod compiled;
pub mod error;

pub use compiled::{FieldPlan, RuleSet};
pub use error::SpecError;

use crate::core::Rule;
use crate::registry::{RuleArgs, RuleRegistry};
use crate::rules::{NUMERIC_RULES, VERBATIM_PARAMETER_RULES};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fmt;
use std::sync::Arc;

/// One item of a rule list: a rule token or a rule object.
#[derive(Clone)]
pub enum RuleToken {
    Named(String),
    Object(Arc<dyn Rule>),
}

impl RuleToken {
    fn name(&self) -> &str {
        match self {
            Self::Named(token) => token.split(':').next().unwrap_or_default().trim(),
            Self::Object(rule) => rule.name(),
        }
    }
}

impl fmt::Debug for RuleToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(token) => f.debug_tuple("Named").field(token).finish(),
            Self::Object(rule) => f.debug_tuple("Object").field(&rule.name()).finish(),
        }
    }
}

impl From<&str> for RuleToken {
    fn from(token: &str) -> Self {
        Self::Named(token.to_string())
    }
}

impl From<String> for RuleToken {
    fn from(token: String) -> Self {
        Self::Named(token)
    }
}

impl From<Arc<dyn Rule>> for RuleToken {
    fn from(rule: Arc<dyn Rule>) -> Self {
        Self::Object(rule)
    }
}

impl<R: Rule + 'static> From<R> for RuleToken {
    fn from(rule: R) -> Self {
        Self::Object(Arc::new(rule))
    }
}

/// The declared rules of one field, before parsing.
#[derive(Debug, Clone)]
pub enum FieldRules {
    Compact(String),
    List(Vec<RuleToken>),
}

impl From<&str> for FieldRules {
    fn from(spec: &str) -> Self {
        Self::Compact(spec.to_string())
    }
}

impl From<String> for FieldRules {
    fn from(spec: String) -> Self {
        Self::Compact(spec)
    }
}

impl From<Vec<RuleToken>> for FieldRules {
    fn from(tokens: Vec<RuleToken>) -> Self {
        Self::List(tokens)
    }
}

impl<T: Into<RuleToken>, const N: usize> From<[T; N]> for FieldRules {
    fn from(tokens: [T; N]) -> Self {
        Self::List(tokens.into_iter().map(Into::into).collect())
    }
}

/// A parsed `name:params` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedToken {
    pub name: String,
    pub params: Vec<String>,
}

/// Field name to declared rules, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct RuleSpec {
    fields: IndexMap<String, FieldRules>,
}

impl RuleSpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare rules for a field. Redeclaring a field replaces its rules
    /// but keeps its original position.
    pub fn field(mut self, name: impl Into<String>, rules: impl Into<FieldRules>) -> Self {
        self.fields.insert(name.into(), rules.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Load a specification from a JSON object whose values are compact
    /// strings or arrays of tokens.
    ///
    /// ```rust
    /// use vetting::parser::RuleSpec;
    ///
    /// let spec = RuleSpec::from_json(r#"{"username": "required|email", "password": ["required", "min:6"]}"#).unwrap();
    /// assert_eq!(spec.len(), 2);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawRules {
            Compact(String),
            List(Vec<String>),
        }

        let raw: IndexMap<String, RawRules> = serde_json::from_str(json)?;
        let fields = raw
            .into_iter()
            .map(|(field, rules)| {
                let rules = match rules {
                    RawRules::Compact(spec) => FieldRules::Compact(spec),
                    RawRules::List(tokens) => {
                        FieldRules::List(tokens.into_iter().map(RuleToken::Named).collect())
                    }
                };
                (field, rules)
            })
            .collect();
        Ok(Self { fields })
    }

    /// Parse every field and resolve every rule against `registry`.
    pub fn compile(&self, registry: &RuleRegistry) -> Result<RuleSet, SpecError> {
        let mut compiled = RuleSet::default();
        for (field, rules) in &self.fields {
            if field.trim().is_empty() {
                return Err(SpecError::MalformedRule {
                    field: field.clone(),
                    token: String::new(),
                    reason: "field name is empty".to_string(),
                });
            }
            let plan = compile_field(field, rules, registry)?;
            compiled.fields.insert(field.clone(), plan);
        }
        Ok(compiled)
    }
}

/// Split a compact specification into parsed tokens.
///
/// A blank specification declares the field with no rules.
pub fn parse_compact(field: &str, spec: &str) -> Result<Vec<ParsedToken>, SpecError> {
    if spec.trim().is_empty() {
        return Ok(Vec::new());
    }
    spec.split('|').map(|token| parse_token(field, token)).collect()
}

/// Parse a single `name` or `name:params` token.
pub fn parse_token(field: &str, token: &str) -> Result<ParsedToken, SpecError> {
    let malformed = |reason: &str| SpecError::MalformedRule {
        field: field.to_string(),
        token: token.to_string(),
        reason: reason.to_string(),
    };

    let (name, raw_params) = match token.split_once(':') {
        Some((name, params)) => (name.trim(), Some(params)),
        None => (token.trim(), None),
    };

    if name.is_empty() {
        return Err(malformed("rule name is empty"));
    }
    if name.contains('|') {
        return Err(malformed("a list item holds exactly one rule"));
    }

    let params = match raw_params {
        None | Some("") => Vec::new(),
        Some(raw) if VERBATIM_PARAMETER_RULES.contains(&name) => vec![raw.to_string()],
        Some(raw) => raw.split(',').map(str::to_string).collect(),
    };

    Ok(ParsedToken {
        name: name.to_string(),
        params,
    })
}

enum Step {
    Parsed(ParsedToken),
    Object(Arc<dyn Rule>),
}

fn compile_field(
    field: &str,
    rules: &FieldRules,
    registry: &RuleRegistry,
) -> Result<FieldPlan, SpecError> {
    let (steps, numeric) = match rules {
        FieldRules::Compact(spec) => {
            let parsed = parse_compact(field, spec)?;
            let numeric = parsed
                .iter()
                .any(|token| NUMERIC_RULES.contains(&token.name.as_str()));
            (parsed.into_iter().map(Step::Parsed).collect::<Vec<_>>(), numeric)
        }
        FieldRules::List(tokens) => {
            let numeric = tokens
                .iter()
                .map(RuleToken::name)
                .any(|name| NUMERIC_RULES.contains(&name));
            let steps = tokens
                .iter()
                .map(|token| match token {
                    RuleToken::Named(raw) => parse_token(field, raw).map(Step::Parsed),
                    RuleToken::Object(rule) => Ok(Step::Object(Arc::clone(rule))),
                })
                .collect::<Result<Vec<_>, _>>()?;
            (steps, numeric)
        }
    };

    let mut plan = FieldPlan::default();
    for step in steps {
        match step {
            Step::Object(rule) => plan.rules.push(rule),
            Step::Parsed(token) => match token.name.as_str() {
                "bail" => plan.bail = true,
                "nullable" => plan.nullable = true,
                "sometimes" => plan.sometimes = true,
                name => {
                    let args = RuleArgs {
                        field,
                        name,
                        params: &token.params,
                        numeric,
                    };
                    plan.rules.push(registry.resolve(&args)?);
                }
            },
        }
    }
    Ok(plan)
}
