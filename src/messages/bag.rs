//! The failure set: field to ordered messages.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Output formats for [`MessageBag::render`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFormat {
    /// Compact JSON object of arrays
    Json,
    /// Indented JSON object of arrays
    PrettyJson,
    /// One `field: message` line per message
    Plain,
}

/// Messages keyed by field.
///
/// Fields keep the order in which they first received a message, and each
/// field keeps its messages in the order they were added. A field with no
/// messages is never present.
///
/// # Example
///
/// ```rust
/// use vetting::messages::MessageBag;
///
/// let mut bag = MessageBag::new();
/// bag.add("username", "The username field is required.");
/// bag.add("password", "The password field is required.");
///
/// assert_eq!(bag.keys().collect::<Vec<_>>(), vec!["username", "password"]);
/// assert_eq!(bag.first("password"), Some("The password field is required."));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageBag {
    messages: IndexMap<String, Vec<String>>,
}

impl MessageBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.messages
            .entry(field.into())
            .or_default()
            .push(message.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Total number of messages across all fields.
    pub fn len(&self) -> usize {
        self.messages.values().map(Vec::len).sum()
    }

    pub fn has(&self, field: &str) -> bool {
        self.messages.contains_key(field)
    }

    pub fn first(&self, field: &str) -> Option<&str> {
        self.messages
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Messages for a field; empty when the field has none.
    pub fn get(&self, field: &str) -> &[String] {
        self.messages.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.messages.keys().map(String::as_str)
    }

    /// Every message, field by field.
    pub fn all(&self) -> Vec<&str> {
        self.messages
            .values()
            .flatten()
            .map(String::as_str)
            .collect()
    }

    /// Append every message of `other`, preserving both orders.
    pub fn merge(&mut self, other: &MessageBag) -> &mut Self {
        for (field, messages) in &other.messages {
            for message in messages {
                self.add(field.clone(), message.clone());
            }
        }
        self
    }

    pub fn to_ordered_mapping(&self) -> &IndexMap<String, Vec<String>> {
        &self.messages
    }

    pub fn into_ordered_mapping(self) -> IndexMap<String, Vec<String>> {
        self.messages
    }

    pub fn render(&self, format: MessageFormat) -> Result<String, serde_json::Error> {
        match format {
            MessageFormat::Json => serde_json::to_string(self),
            MessageFormat::PrettyJson => serde_json::to_string_pretty(self),
            MessageFormat::Plain => Ok(self
                .messages
                .iter()
                .flat_map(|(field, messages)| {
                    messages.iter().map(move |message| format!("{field}: {message}"))
                })
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }

    /// Shorthand for `render(MessageFormat::PrettyJson)`.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        self.render(MessageFormat::PrettyJson)
    }
}
