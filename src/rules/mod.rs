//! Built-in rule catalogue.
//!
//! Each built-in is a plain struct implementing [`Rule`](crate::core::Rule)
//! plus a factory that builds it from parsed parameters. The registry
//! seeds itself from [`builtin_factories`], so built-ins go through the
//! same resolution path as anything a caller registers.
//!
//! # Example
//!
//! ```rust
//! use vetting::core::{Record, Rule};
//! use vetting::rules::{Max, Required};
//! use serde_json::json;
//!
//! let data = Record::new();
//! assert!(Required.evaluate("username", Some(&json!("")), &data).is_some());
//! assert!(Max::new(100.0, false).evaluate("username", Some(&json!("haris")), &data).is_none());
//! ```

pub mod comparison;
pub mod format;
pub mod presence;
pub mod size;
pub mod types;

pub use comparison::{Confirmed, Different, In, Same};
pub use format::{Alpha, AlphaNum, Date, DateFormat, Email, Pattern, UuidFormat};
pub use presence::{Accepted, Required, RequiredWith};
pub use size::{Between, Max, Min};
pub use types::{Boolean, Integer, Numeric, StringType};

use crate::registry::{factory, RuleFactory};

/// Rule names whose presence makes size rules on the same field measure
/// numeric strings by value.
pub const NUMERIC_RULES: &[&str] = &["numeric", "integer"];

/// Rule names whose single parameter is taken verbatim instead of being
/// split on commas.
pub const VERBATIM_PARAMETER_RULES: &[&str] = &["regex", "date_format"];

/// Every built-in rule name paired with its factory.
pub fn builtin_factories() -> Vec<(&'static str, RuleFactory)> {
    vec![
        ("required", factory(presence::required)),
        ("required_with", factory(presence::required_with)),
        ("accepted", factory(presence::accepted)),
        ("email", factory(format::email)),
        ("regex", factory(format::regex)),
        ("alpha", factory(format::alpha)),
        ("alpha_num", factory(format::alpha_num)),
        ("uuid", factory(format::uuid)),
        ("date", factory(format::date)),
        ("date_format", factory(format::date_format)),
        ("min", factory(size::min)),
        ("max", factory(size::max)),
        ("between", factory(size::between)),
        ("numeric", factory(types::numeric)),
        ("integer", factory(types::integer)),
        ("string", factory(types::string)),
        ("boolean", factory(types::boolean)),
        ("in", factory(comparison::in_list)),
        ("not_in", factory(comparison::not_in_list)),
        ("confirmed", factory(comparison::confirmed)),
        ("same", factory(comparison::same)),
        ("different", factory(comparison::different)),
    ]
}
