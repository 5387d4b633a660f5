//! The error raised by the throwing access mode.

use crate::messages::MessageBag;
use thiserror::Error;

/// A record failed validation.
///
/// This is an expected business outcome, not a fault. It carries the full
/// failure set so callers can report every message without re-evaluating.
#[derive(Debug, Clone, Error, PartialEq)]
#[error("{}", summary(.errors))]
pub struct ValidationFailed {
    pub errors: MessageBag,
}

impl ValidationFailed {
    pub fn new(errors: MessageBag) -> Self {
        Self { errors }
    }

    pub fn errors(&self) -> &MessageBag {
        &self.errors
    }

    pub fn into_errors(self) -> MessageBag {
        self.errors
    }
}

fn summary(errors: &MessageBag) -> String {
    let all = errors.all();
    match all.split_first() {
        None => "The given data was invalid.".to_string(),
        Some((first, [])) => first.to_string(),
        Some((first, rest)) => {
            let noun = if rest.len() == 1 { "error" } else { "errors" };
            format!("{first} (and {} more {noun})", rest.len())
        }
    }
}
