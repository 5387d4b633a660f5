//! The result of one evaluation.

use super::error::ValidationFailed;
use crate::core::Record;
use crate::messages::MessageBag;
use std::sync::LazyLock;
use stillwater::validation::Validation;

static NO_ERRORS: LazyLock<MessageBag> = LazyLock::new(MessageBag::new);

/// Either the validated subset of the record or the failure set. Never both.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationOutcome {
    /// Declared fields that were present, in declaration order
    Valid(Record),
    /// Non-empty failure set
    Invalid(MessageBag),
}

impl ValidationOutcome {
    pub fn passes(&self) -> bool {
        matches!(self, Self::Valid(_))
    }

    pub fn fails(&self) -> bool {
        !self.passes()
    }

    /// The failure set; empty for a valid outcome.
    pub fn errors(&self) -> &MessageBag {
        match self {
            Self::Valid(_) => &NO_ERRORS,
            Self::Invalid(errors) => errors,
        }
    }

    pub fn validated(&self) -> Option<&Record> {
        match self {
            Self::Valid(data) => Some(data),
            Self::Invalid(_) => None,
        }
    }

    /// The throwing access mode: validated data, or the failure set as an error.
    pub fn into_result(self) -> Result<Record, ValidationFailed> {
        match self {
            Self::Valid(data) => Ok(data),
            Self::Invalid(errors) => Err(ValidationFailed::new(errors)),
        }
    }

    /// View the outcome as a Stillwater `Validation`.
    pub fn into_validation(self) -> Validation<Record, MessageBag> {
        match self {
            Self::Valid(data) => Validation::Success(data),
            Self::Invalid(errors) => Validation::Failure(errors),
        }
    }
}

impl From<ValidationOutcome> for Result<Record, ValidationFailed> {
    fn from(outcome: ValidationOutcome) -> Self {
        outcome.into_result()
    }
}
