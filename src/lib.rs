//! Vetting: rule-based validation of keyed records
//!
//! Vetting checks a record (a JSON object) against per-field rule lists and
//! reports every failure as a human-readable message, grouped by field.
//! Evaluation is pure: rules never mutate the record, and the same record
//! and rules always produce the same failure set.
//!
//! # Core Concepts
//!
//! - **Rule**: A named check implementing the `Rule` trait
//! - **Registry**: The name-to-rule mapping a validator owns
//! - **Spec**: Per-field rule lists, compact (`"required|min:6"`) or listed
//! - **Outcome**: Either the validated data or a `MessageBag` of failures
//!
//! # Example
//!
//! ```rust
//! use vetting::{record, RuleSpec, Validator};
//! use vetting::messages::Messages;
//! use serde_json::json;
//!
//! let validator = Validator::new();
//! let spec = RuleSpec::new()
//!     .field("username", "required|email|max:100")
//!     .field("password", "required|min:6|max:20");
//!
//! let evaluation = validator
//!     .make(
//!         record(json!({ "username": "haris", "password": "asd" })),
//!         &spec,
//!         Messages::new(),
//!     )
//!     .unwrap();
//!
//! let errors = evaluation.errors();
//! assert_eq!(errors.first("username"), Some("The username field must be a valid email address."));
//! assert_eq!(errors.first("password"), Some("The password field must be at least 6 characters."));
//!
//! let failure = evaluation.validated().unwrap_err();
//! assert_eq!(failure.to_string(), "The username field must be a valid email address. (and 1 more error)");
//! ```

pub mod builder;
pub mod core;
pub mod engine;
pub mod messages;
pub mod parser;
pub mod registry;
pub mod rules;

// Re-export commonly used types
pub use builder::{ValidatorBuilder, ValidatorConfig};
pub use core::{record, Record, Rule};
pub use engine::{Evaluation, ValidationFailed, ValidationOutcome, Validator};
pub use messages::{MessageBag, Messages};
pub use parser::{RuleSet, RuleSpec, SpecError};
pub use registry::{RegistryError, RuleRegistry};
