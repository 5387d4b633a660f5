//! Builder API for ergonomic validator construction.
//!
//! This module provides a fluent builder, a serializable configuration and
//! the `rules!` macro for writing rule specifications with little ceremony.

pub mod config;
pub mod macros;
pub mod validator;

pub use config::ValidatorConfig;
pub use validator::ValidatorBuilder;
