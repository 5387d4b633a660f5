//! Registry error types.

use thiserror::Error;

/// Errors that can occur when registering rules.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistryError {
    /// A rule with this name exists and overwriting is not allowed
    #[error("Rule '{name}' is already registered. Enable allow_overwrite to replace it")]
    DuplicateRule { name: String },

    /// The name is a field modifier (`bail`, `nullable`, `sometimes`)
    #[error("Rule name '{name}' is reserved for a field modifier")]
    ReservedName { name: String },

    /// Rule names must be non-empty and free of delimiter characters
    #[error("Rule name '{name}' is not valid: {reason}")]
    InvalidName { name: String, reason: String },
}
