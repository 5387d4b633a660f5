//! A record bound to its rules, queried like a form validator.

use super::error::ValidationFailed;
use super::outcome::ValidationOutcome;
use super::validator::Validator;
use crate::core::Record;
use crate::messages::{MessageBag, Messages};
use crate::parser::RuleSet;
use std::sync::Arc;

/// An unevaluated validation of one record.
///
/// Every query re-runs the rules and hooks from scratch; nothing is cached
/// between calls.
///
/// # Example
///
/// ```rust
/// use vetting::{record, RuleSpec, Validator};
/// use vetting::messages::Messages;
/// use serde_json::json;
///
/// let validator = Validator::new();
/// let spec = RuleSpec::new()
///     .field("username", "required|email|max:100")
///     .field("password", ["required", "min:6", "max:20"]);
///
/// let mut evaluation = validator
///     .make(
///         record(json!({ "username": "haris@gmail.com", "password": "haris@gmail.com" })),
///         &spec,
///         Messages::new(),
///     )
///     .unwrap();
/// assert!(evaluation.passes());
///
/// evaluation.after(|data, errors| {
///     if data.get("username") == data.get("password") {
///         errors.add("password", "Password must differ from username.");
///     }
/// });
/// assert!(evaluation.fails());
/// ```
pub struct Evaluation<'v> {
    validator: &'v Validator,
    record: Record,
    rules: RuleSet,
    messages: Messages,
}

impl<'v> Evaluation<'v> {
    pub(crate) fn new(
        validator: &'v Validator,
        record: Record,
        rules: RuleSet,
        messages: Messages,
    ) -> Self {
        Self {
            validator,
            record,
            rules,
            messages,
        }
    }

    /// Register a post-validation hook.
    pub fn after<F>(&mut self, hook: F) -> &mut Self
    where
        F: Fn(&Record, &mut MessageBag) + Send + Sync + 'static,
    {
        self.rules.push_hook(Arc::new(hook));
        self
    }

    pub fn evaluate(&self) -> ValidationOutcome {
        self.validator
            .evaluate(&self.record, &self.rules, &self.messages)
    }

    pub fn passes(&self) -> bool {
        self.evaluate().passes()
    }

    pub fn fails(&self) -> bool {
        !self.passes()
    }

    pub fn errors(&self) -> MessageBag {
        match self.evaluate() {
            ValidationOutcome::Valid(_) => MessageBag::new(),
            ValidationOutcome::Invalid(errors) => errors,
        }
    }

    /// The throwing access mode.
    pub fn validated(&self) -> Result<Record, ValidationFailed> {
        self.evaluate().into_result()
    }

    /// The full input record, including undeclared fields.
    pub fn data(&self) -> &Record {
        &self.record
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }
}
