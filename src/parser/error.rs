//! Rule specification errors.

use thiserror::Error;

/// Errors that can occur while parsing and resolving a rule specification.
///
/// All of these are configuration mistakes: they surface before any record
/// is evaluated and are never produced by evaluation itself.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpecError {
    /// No rule with this name is registered
    #[error("Unknown rule '{rule}' on field '{field}'")]
    UnknownRule { field: String, rule: String },

    /// A rule token could not be parsed
    #[error("Malformed rule '{token}' on field '{field}': {reason}")]
    MalformedRule {
        field: String,
        token: String,
        reason: String,
    },

    /// A known rule was given parameters it cannot use
    #[error("Invalid parameters for rule '{rule}' on field '{field}': {reason}")]
    InvalidParameter {
        field: String,
        rule: String,
        reason: String,
    },
}
