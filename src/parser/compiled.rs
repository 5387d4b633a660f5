//! Resolved rule sets, ready to evaluate.

use crate::core::{Record, Rule};
use crate::engine::AfterHook;
use crate::messages::MessageBag;
use indexmap::IndexMap;
use std::fmt;
use std::sync::Arc;

/// The resolved rules of a single field, in declaration order.
#[derive(Clone, Default)]
pub struct FieldPlan {
    pub(crate) rules: Vec<Arc<dyn Rule>>,
    pub(crate) bail: bool,
    pub(crate) nullable: bool,
    pub(crate) sometimes: bool,
}

impl FieldPlan {
    pub fn rules(&self) -> &[Arc<dyn Rule>] {
        &self.rules
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Stop at the first failure.
    pub fn is_bail(&self) -> bool {
        self.bail
    }

    /// A `null` value skips non-implicit rules.
    pub fn is_nullable(&self) -> bool {
        self.nullable
    }

    /// An absent key skips the field entirely.
    pub fn is_sometimes(&self) -> bool {
        self.sometimes
    }
}

impl fmt::Debug for FieldPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldPlan")
            .field("rules", &self.rule_names())
            .field("bail", &self.bail)
            .field("nullable", &self.nullable)
            .field("sometimes", &self.sometimes)
            .finish()
    }
}

/// A compiled rule specification plus its post-validation hooks.
///
/// Rule names have already been resolved, so evaluating a rule set never
/// consults the registry. Cloning is cheap: rules and hooks are shared.
#[derive(Clone, Default)]
pub struct RuleSet {
    pub(crate) fields: IndexMap<String, FieldPlan>,
    pub(crate) hooks: Vec<AfterHook>,
}

impl RuleSet {
    /// Add a hook that runs after every field has been evaluated.
    ///
    /// Hooks see the full record and may append to the failure set. They
    /// run in registration order on the evaluating thread.
    pub fn after<F>(mut self, hook: F) -> Self
    where
        F: Fn(&Record, &mut MessageBag) + Send + Sync + 'static,
    {
        self.hooks.push(Arc::new(hook));
        self
    }

    pub(crate) fn push_hook(&mut self, hook: AfterHook) {
        self.hooks.push(hook);
    }

    /// Declared fields in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldPlan)> {
        self.fields.iter().map(|(name, plan)| (name.as_str(), plan))
    }

    pub fn field(&self, name: &str) -> Option<&FieldPlan> {
        self.fields.get(name)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn hook_count(&self) -> usize {
        self.hooks.len()
    }
}

impl fmt::Debug for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleSet")
            .field("fields", &self.fields)
            .field("hooks", &self.hooks.len())
            .finish()
    }
}
