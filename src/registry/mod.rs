//! Rule registry: maps rule names to the factories that build them.
//!
//! A registry is owned by a [`Validator`](crate::engine::Validator) rather
//! than living in process-wide state. It is populated while the validator
//! is being built and is read-only afterwards, so a built validator can be
//! shared between threads without locking.
//!
//! # Example
//!
//! ```rust
//! use vetting::registry::{RegistryError, RuleRegistry};
//! use vetting::rules::Required;
//!
//! let mut registry = RuleRegistry::new();
//! assert!(registry.contains("required"));
//!
//! let result = registry.register_rule("required", Required);
//! assert!(matches!(result, Err(RegistryError::DuplicateRule { .. })));
//! ```

pub mod error;

pub use error::RegistryError;

use crate::core::Rule;
use crate::parser::SpecError;
use crate::rules::builtin_factories;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// Names that modify how a field is evaluated instead of naming a rule.
pub const MODIFIERS: &[&str] = &["bail", "nullable", "sometimes"];

/// Builds a concrete rule from its parsed parameters.
pub type RuleFactory =
    Arc<dyn Fn(&RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> + Send + Sync>;

/// Wrap a factory function or closure.
pub fn factory<F>(f: F) -> RuleFactory
where
    F: Fn(&RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Everything a factory sees when building one rule invocation.
#[derive(Debug, Clone, Copy)]
pub struct RuleArgs<'a> {
    /// Field the rule is declared on
    pub field: &'a str,
    /// Rule name as written in the specification
    pub name: &'a str,
    /// Parameters in declaration order
    pub params: &'a [String],
    /// Whether the field also declares a numeric rule
    pub numeric: bool,
}

impl RuleArgs<'_> {
    /// Fail unless exactly `count` parameters were given.
    pub fn expect_params(&self, count: usize) -> Result<(), SpecError> {
        if self.params.len() == count {
            Ok(())
        } else {
            Err(self.invalid(format!(
                "expected {count} parameter(s), got {}",
                self.params.len()
            )))
        }
    }

    /// Fail unless at least `count` parameters were given.
    pub fn expect_at_least(&self, count: usize) -> Result<(), SpecError> {
        if self.params.len() >= count {
            Ok(())
        } else {
            Err(self.invalid(format!(
                "expected at least {count} parameter(s), got {}",
                self.params.len()
            )))
        }
    }

    /// Parse parameter `index` as a number.
    pub fn number(&self, index: usize) -> Result<f64, SpecError> {
        let raw = self
            .params
            .get(index)
            .ok_or_else(|| self.invalid(format!("missing parameter {}", index + 1)))?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| self.invalid(format!("'{raw}' is not a number")))
    }

    /// An `InvalidParameter` error for this invocation.
    pub fn invalid(&self, reason: impl Into<String>) -> SpecError {
        SpecError::InvalidParameter {
            field: self.field.to_string(),
            rule: self.name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Name to factory mapping, seeded with the built-in catalogue.
#[derive(Clone)]
pub struct RuleRegistry {
    factories: HashMap<String, RuleFactory>,
    allow_overwrite: bool,
}

impl RuleRegistry {
    /// A registry containing every built-in rule.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for (name, factory) in builtin_factories() {
            registry.factories.insert(name.to_string(), factory);
        }
        registry
    }

    /// A registry with no rules at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
            allow_overwrite: false,
        }
    }

    /// Permit later registrations to replace existing rules.
    pub fn allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = allow;
        self
    }

    /// Register a parameterised rule under `name`.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        factory: RuleFactory,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        validate_name(&name)?;

        if self.factories.contains_key(&name) {
            if !self.allow_overwrite {
                return Err(RegistryError::DuplicateRule { name });
            }
            tracing::warn!(rule = %name, "overwriting registered validation rule");
        } else {
            tracing::debug!(rule = %name, "registered validation rule");
        }

        self.factories.insert(name, factory);
        Ok(())
    }

    /// Register a rule object that takes no parameters.
    ///
    /// The same instance is shared by every field that names it.
    pub fn register_rule<R>(&mut self, name: impl Into<String>, rule: R) -> Result<(), RegistryError>
    where
        R: Rule + 'static,
    {
        let rule: Arc<dyn Rule> = Arc::new(rule);
        self.register(
            name,
            factory(move |args| {
                args.expect_params(0)?;
                Ok(Arc::clone(&rule))
            }),
        )
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Build the rule named by `args`.
    pub fn resolve(&self, args: &RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> {
        let factory = self
            .factories
            .get(args.name)
            .ok_or_else(|| SpecError::UnknownRule {
                field: args.field.to_string(),
                rule: args.name.to_string(),
            })?;
        factory(args)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("rules", &self.names())
            .field("allow_overwrite", &self.allow_overwrite)
            .finish()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if MODIFIERS.contains(&name) {
        return Err(RegistryError::ReservedName {
            name: name.to_string(),
        });
    }

    let reason = if name.is_empty() {
        Some("name is empty")
    } else if name.contains(['|', ':', ',']) {
        Some("name contains a delimiter character")
    } else if name.chars().any(char::is_whitespace) {
        Some("name contains whitespace")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(RegistryError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;
    use crate::rules::Required;
    use serde_json::Value;

    struct AlwaysFails;

    impl Rule for AlwaysFails {
        fn name(&self) -> &str {
            "always_fails"
        }

        fn evaluate(&self, _attribute: &str, _value: Option<&Value>, _record: &Record) -> Option<String> {
            Some("The :attribute always fails.".to_string())
        }
    }

    fn args<'a>(name: &'a str, params: &'a [String]) -> RuleArgs<'a> {
        RuleArgs {
            field: "field",
            name,
            params,
            numeric: false,
        }
    }

    #[test]
    fn new_registry_contains_builtins() {
        let registry = RuleRegistry::new();
        for name in ["required", "email", "min", "max"] {
            assert!(registry.contains(name), "{name} missing");
        }
        assert!(RuleRegistry::empty().names().is_empty());
    }

    #[test]
    fn duplicate_registration_fails_by_default() {
        let mut registry = RuleRegistry::new();
        let result = registry.register_rule("email", AlwaysFails);
        assert_eq!(
            result,
            Err(RegistryError::DuplicateRule {
                name: "email".to_string()
            })
        );
    }

    #[test]
    fn overwrite_replaces_existing_rule() {
        let mut registry = RuleRegistry::new().allow_overwrite(true);
        registry.register_rule("email", AlwaysFails).unwrap();

        let rule = registry.resolve(&args("email", &[])).unwrap();
        assert_eq!(rule.name(), "always_fails");
    }

    #[test]
    fn modifiers_cannot_be_registered() {
        let mut registry = RuleRegistry::empty();
        assert!(matches!(
            registry.register_rule("bail", Required),
            Err(RegistryError::ReservedName { .. })
        ));
    }

    #[test]
    fn names_with_delimiters_are_rejected() {
        let mut registry = RuleRegistry::empty();
        for name in ["", "a|b", "a:b", "a,b", "a b"] {
            assert!(
                matches!(
                    registry.register_rule(name, Required),
                    Err(RegistryError::InvalidName { .. })
                ),
                "{name:?} accepted"
            );
        }
    }

    #[test]
    fn resolving_unknown_rule_fails() {
        let registry = RuleRegistry::new();
        let result = registry.resolve(&args("uppercase", &[]));
        assert!(matches!(result, Err(SpecError::UnknownRule { .. })));
    }

    #[test]
    fn parameterless_objects_reject_parameters() {
        let mut registry = RuleRegistry::empty();
        registry.register_rule("always_fails", AlwaysFails).unwrap();

        let params = vec!["1".to_string()];
        let result = registry.resolve(&args("always_fails", &params));
        assert!(matches!(result, Err(SpecError::InvalidParameter { .. })));
    }

    #[test]
    fn number_reports_bad_parameters() {
        let params = vec!["six".to_string()];
        let err = args("min", &params).number(0).unwrap_err();
        assert!(err.to_string().contains("'six' is not a number"));
    }

    #[test]
    fn number_rejects_non_finite_values() {
        for raw in ["NaN", "inf", "-infinity"] {
            let params = vec![raw.to_string()];
            let err = args("min", &params).number(0).unwrap_err();
            assert!(matches!(err, SpecError::InvalidParameter { .. }), "{raw} accepted");
        }
    }

    #[test]
    fn size_rules_with_non_finite_bounds_fail_to_compile() {
        let registry = RuleRegistry::new();
        for token in ["min:NaN", "between:NaN,5"] {
            let spec = crate::parser::RuleSpec::new().field("pw", token);
            assert!(matches!(
                spec.compile(&registry),
                Err(SpecError::InvalidParameter { .. })
            ));
        }
    }
}
