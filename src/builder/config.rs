//! Serializable validator configuration.

use crate::messages::Messages;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Validator-wide settings, usually loaded once at startup.
///
/// # Example
///
/// ```rust
/// use vetting::builder::ValidatorConfig;
///
/// let config = ValidatorConfig::from_json(r#"{
///     "allow_overwrite": true,
///     "messages": { "required": ":attribute harus diisi" },
///     "attributes": { "username": "nama pengguna" }
/// }"#).unwrap();
///
/// assert_eq!(config.allow_overwrite, Some(true));
/// assert_eq!(config.messages["required"], ":attribute harus diisi");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidatorConfig {
    /// Let registrations replace existing rules; unset leaves the builder's choice
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_overwrite: Option<bool>,

    /// Message templates keyed by `rule` or `field.rule`
    pub messages: IndexMap<String, String>,

    /// Display names keyed by field
    pub attributes: IndexMap<String, String>,
}

impl ValidatorConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// The message layer this configuration describes.
    pub fn messages(&self) -> Messages {
        Messages {
            custom: self.messages.clone(),
            attributes: self.attributes.clone(),
        }
    }
}
