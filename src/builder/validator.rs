//! Builder for constructing validators.

use super::config::ValidatorConfig;
use crate::core::Rule;
use crate::engine::Validator;
use crate::messages::Messages;
use crate::parser::SpecError;
use crate::registry::{factory, RegistryError, RuleArgs, RuleFactory, RuleRegistry};
use std::sync::Arc;

/// Builder for configuring a validator with a fluent API.
///
/// Registrations are applied in order when [`build`](Self::build) runs, so
/// `allow_overwrite` may be set anywhere in the chain.
pub struct ValidatorBuilder {
    allow_overwrite: bool,
    registrations: Vec<(String, RuleFactory)>,
    messages: Messages,
}

impl ValidatorBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            allow_overwrite: false,
            registrations: Vec::new(),
            messages: Messages::new(),
        }
    }

    /// Apply a configuration.
    ///
    /// Its messages and display names replace earlier `message` and
    /// `attribute` calls for the same keys only. `allow_overwrite` changes
    /// only when the configuration sets it.
    pub fn config(mut self, config: ValidatorConfig) -> Self {
        if let Some(allow) = config.allow_overwrite {
            self.allow_overwrite = allow;
        }
        self.messages.custom.extend(config.messages);
        self.messages.attributes.extend(config.attributes);
        self
    }

    /// Allow registrations to replace built-in or earlier rules.
    pub fn allow_overwrite(mut self, allow: bool) -> Self {
        self.allow_overwrite = allow;
        self
    }

    /// Register a parameterless rule object under `name`.
    pub fn rule<R>(self, name: impl Into<String>, rule: R) -> Self
    where
        R: Rule + 'static,
    {
        let rule: Arc<dyn Rule> = Arc::new(rule);
        self.factory(name, move |args| {
            args.expect_params(0)?;
            Ok(Arc::clone(&rule))
        })
    }

    /// Register a parameterised rule built from its parameters.
    pub fn factory<F>(mut self, name: impl Into<String>, build: F) -> Self
    where
        F: Fn(&RuleArgs<'_>) -> Result<Arc<dyn Rule>, SpecError> + Send + Sync + 'static,
    {
        self.registrations.push((name.into(), factory(build)));
        self
    }

    /// Set a validator-wide message template.
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.messages = self.messages.message(key, template);
        self
    }

    /// Set a validator-wide display name.
    pub fn attribute(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.messages = self.messages.attribute(field, name);
        self
    }

    /// Build the validator.
    /// Returns an error if any registration is rejected.
    pub fn build(self) -> Result<Validator, RegistryError> {
        let mut registry = RuleRegistry::new().allow_overwrite(self.allow_overwrite);

        for (name, build) in self.registrations {
            registry.register(name, build)?;
        }

        Ok(Validator::from_parts(registry, self.messages))
    }
}

impl Default for ValidatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
