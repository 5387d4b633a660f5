//! Core validation types.
//!
//! This module contains the pure building blocks every other layer uses:
//! - The `Rule` trait shared by built-in and custom checks
//! - The `Record` input type and value inspections (emptiness, size)
//!
//! Nothing in this module performs I/O or holds state.

mod rule;
mod value;

pub use rule::Rule;
pub use value::{is_empty_value, is_validatable, record, scalar_string, size_of, Record, SizeKind};
