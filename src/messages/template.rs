//! Message overrides, display names and placeholder substitution.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Caller-supplied message templates and attribute display names.
///
/// Template keys are either a rule name (`"min"`) or a field-qualified rule
/// name (`"password.min"`). The qualified key wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Messages {
    #[serde(default)]
    pub custom: IndexMap<String, String>,
    #[serde(default)]
    pub attributes: IndexMap<String, String>,
}

impl Messages {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the template for a rule or `field.rule` pair.
    pub fn message(mut self, key: impl Into<String>, template: impl Into<String>) -> Self {
        self.custom.insert(key.into(), template.into());
        self
    }

    /// Display a field under another name in `:attribute`.
    pub fn attribute(mut self, field: impl Into<String>, name: impl Into<String>) -> Self {
        self.attributes.insert(field.into(), name.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.custom.is_empty() && self.attributes.is_empty()
    }

    /// The override for `rule` on `field`, if any.
    pub fn lookup(&self, field: &str, rule: &str) -> Option<&str> {
        self.custom
            .get(&format!("{field}.{rule}"))
            .or_else(|| self.custom.get(rule))
            .map(String::as_str)
    }

    pub fn display_name(&self, field: &str) -> Option<&str> {
        self.attributes.get(field).map(String::as_str)
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for Messages
where
    K: Into<String>,
    V: Into<String>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        Self {
            custom: pairs
                .into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
            attributes: IndexMap::new(),
        }
    }
}

/// Layers inline messages over validator-wide ones.
#[derive(Debug, Clone, Copy)]
pub struct MessageResolver<'a> {
    inline: &'a Messages,
    configured: &'a Messages,
}

impl<'a> MessageResolver<'a> {
    pub fn new(inline: &'a Messages, configured: &'a Messages) -> Self {
        Self { inline, configured }
    }

    /// Pick the template for a failed rule.
    pub fn template<'t>(&self, field: &str, rule: &str, default: &'t str) -> &'t str
    where
        'a: 't,
    {
        self.inline
            .lookup(field, rule)
            .or_else(|| self.configured.lookup(field, rule))
            .unwrap_or(default)
    }

    /// The name `:attribute` expands to for a field.
    pub fn attribute<'f>(&self, field: &'f str) -> &'f str
    where
        'a: 'f,
    {
        self.inline
            .display_name(field)
            .or_else(|| self.configured.display_name(field))
            .unwrap_or(field)
    }

    /// Resolve and render a failure message.
    pub fn render(
        &self,
        field: &str,
        rule: &str,
        default: &str,
        placeholders: &[(&'static str, String)],
    ) -> String {
        let template = self.template(field, rule, default);
        substitute(template, self.attribute(field), placeholders)
    }
}

/// Replace `:attribute` (and its `:Attribute`/`:ATTRIBUTE` variants) and
/// every rule placeholder in `template`.
///
/// Longer placeholders are replaced first so `:attribute` is never
/// clobbered by a shorter key that prefixes it.
///
/// ```rust
/// use vetting::messages::substitute;
///
/// let message = substitute(":Attribute must be at least :min characters.", "password", &[(":min", "6".to_string())]);
/// assert_eq!(message, "Password must be at least 6 characters.");
/// ```
pub fn substitute(template: &str, attribute: &str, placeholders: &[(&'static str, String)]) -> String {
    let mut pairs: Vec<(&str, String)> = vec![
        (":attribute", attribute.to_string()),
        (":Attribute", capitalize(attribute)),
        (":ATTRIBUTE", attribute.to_uppercase()),
    ];
    pairs.extend(placeholders.iter().map(|(key, value)| (*key, value.clone())));
    pairs.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

    // Single pass: substituted values are never scanned again.
    let mut message = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find(':') {
        message.push_str(&rest[..start]);
        rest = &rest[start..];
        match pairs.iter().find(|(key, _)| rest.starts_with(key)) {
            Some((key, value)) => {
                message.push_str(value);
                rest = &rest[key.len()..];
            }
            None => {
                message.push(':');
                rest = &rest[1..];
            }
        }
    }
    message.push_str(rest);
    message
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
