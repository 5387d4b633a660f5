//! Validation engine and its two access modes.
//!
//! Internally every rule invocation yields a Stillwater `Validation`, and
//! all of them are combined with `Validation::all_vec` so that no failure
//! is dropped. The combined failures become the [`MessageBag`], hooks get
//! a chance to append to it, and the result is a [`ValidationOutcome`].
//!
//! Callers either inspect the outcome (`passes`, `fails`, `errors`) or ask
//! for the validated data and receive [`ValidationFailed`] on failure.

pub mod error;
pub mod evaluation;
pub mod outcome;
pub mod validator;

pub use error::ValidationFailed;
pub use evaluation::Evaluation;
pub use outcome::ValidationOutcome;
pub use validator::Validator;

use crate::core::Record;
use crate::messages::MessageBag;
use std::sync::Arc;

/// Post-validation hook: sees the record, may append failures.
pub type AfterHook = Arc<dyn Fn(&Record, &mut MessageBag) + Send + Sync>;
