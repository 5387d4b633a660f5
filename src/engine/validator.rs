//! The validation engine.

use super::evaluation::Evaluation;
use super::outcome::ValidationOutcome;
use crate::builder::ValidatorBuilder;
use crate::core::{is_validatable, Record, Rule};
use crate::messages::{MessageBag, MessageResolver, Messages};
use crate::parser::{FieldPlan, RuleSet, RuleSpec, SpecError};
use crate::registry::RuleRegistry;
use serde_json::Value;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// One failed rule invocation.
#[derive(Debug, Clone, PartialEq)]
struct Violation {
    field: String,
    message: String,
}

type Check = Validation<(), NonEmptyVec<Violation>>;

/// A configured validation context.
///
/// Owns the rule registry and validator-wide messages. Once built it is
/// immutable, so one validator can serve any number of concurrent
/// evaluations.
///
/// # Example
///
/// ```rust
/// use vetting::{record, RuleSpec, Validator};
/// use vetting::messages::Messages;
/// use serde_json::json;
///
/// let validator = Validator::new();
/// let rules = validator
///     .compile(&RuleSpec::new().field("username", "required").field("password", "required"))
///     .unwrap();
///
/// let outcome = validator.evaluate(
///     &record(json!({ "username": "", "password": "" })),
///     &rules,
///     &Messages::new(),
/// );
///
/// assert!(outcome.fails());
/// assert_eq!(outcome.errors().get("username"), ["The username field is required."]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    registry: RuleRegistry,
    messages: Messages,
}

impl Validator {
    /// A validator with the built-in rules and no overrides.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> ValidatorBuilder {
        ValidatorBuilder::new()
    }

    pub(crate) fn from_parts(registry: RuleRegistry, messages: Messages) -> Self {
        Self { registry, messages }
    }

    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validator-wide messages and display names.
    pub fn messages(&self) -> &Messages {
        &self.messages
    }

    /// Parse a specification and resolve its rules against this validator.
    pub fn compile(&self, spec: &RuleSpec) -> Result<RuleSet, SpecError> {
        spec.compile(&self.registry)
    }

    /// Compile `spec` and bind it to a record for repeated querying.
    pub fn make(
        &self,
        record: Record,
        spec: &RuleSpec,
        messages: impl Into<Messages>,
    ) -> Result<Evaluation<'_>, SpecError> {
        let rules = self.compile(spec)?;
        Ok(Evaluation::new(self, record, rules, messages.into()))
    }

    /// Run every rule of `rules` against `record`, then every hook.
    ///
    /// Fields are evaluated in declaration order and each field's rules in
    /// their declared order, so the failure set preserves both orders.
    pub fn evaluate(&self, record: &Record, rules: &RuleSet, messages: &Messages) -> ValidationOutcome {
        let resolver = MessageResolver::new(messages, &self.messages);
        tracing::debug!(
            fields = rules.len(),
            hooks = rules.hook_count(),
            "evaluating record"
        );

        let checks: Vec<Check> = rules
            .fields()
            .flat_map(|(field, plan)| evaluate_field(field, plan, record, &resolver))
            .collect();

        let mut errors = MessageBag::new();
        if let Validation::Failure(violations) = Validation::all_vec(checks) {
            for violation in violations.iter() {
                errors.add(violation.field.clone(), violation.message.clone());
            }
        }

        for hook in &rules.hooks {
            hook(record, &mut errors);
        }

        if errors.is_empty() {
            tracing::debug!("validation passed");
            ValidationOutcome::Valid(validated_subset(record, rules))
        } else {
            tracing::debug!(
                failed_fields = errors.keys().count(),
                messages = errors.len(),
                "validation failed"
            );
            ValidationOutcome::Invalid(errors)
        }
    }
}

fn evaluate_field(
    field: &str,
    plan: &FieldPlan,
    record: &Record,
    resolver: &MessageResolver<'_>,
) -> Vec<Check> {
    let value = record.get(field);
    let mut checks = Vec::new();

    if plan.is_sometimes() && value.is_none() {
        return checks;
    }

    for rule in plan.rules() {
        if !should_run(rule.as_ref(), plan, value) {
            continue;
        }

        let check = match rule.evaluate(field, value, record) {
            None => Validation::success(()),
            Some(default) => {
                tracing::trace!(field, rule = rule.name(), "rule failed");
                let message = resolver.render(field, rule.name(), &default, &rule.placeholders());
                Validation::fail(Violation {
                    field: field.to_string(),
                    message,
                })
            }
        };

        let failed = check.is_failure();
        checks.push(check);
        if failed && (plan.is_bail() || rule.short_circuits()) {
            break;
        }
    }

    checks
}

/// Implicit rules always run. Others need a present, non-blank value, and
/// skip `null` on nullable fields.
fn should_run(rule: &dyn Rule, plan: &FieldPlan, value: Option<&Value>) -> bool {
    if rule.is_implicit() {
        return true;
    }
    if !is_validatable(value) {
        return false;
    }
    !(plan.is_nullable() && matches!(value, Some(Value::Null)))
}

fn validated_subset(record: &Record, rules: &RuleSet) -> Record {
    rules
        .fields()
        .filter_map(|(field, _)| {
            record
                .get(field)
                .map(|value| (field.to_string(), value.clone()))
        })
        .collect()
}
