//! Failure messages.
//!
//! [`MessageBag`] is the failure set an evaluation produces. [`Messages`]
//! carries caller overrides, and [`MessageResolver`] decides which
//! template a failed rule renders with:
//!
//! 1. inline `field.rule`
//! 2. inline `rule`
//! 3. configured `field.rule`
//! 4. configured `rule`
//! 5. the rule's built-in default

pub mod bag;
pub mod template;

pub use bag::{MessageBag, MessageFormat};
pub use template::{substitute, MessageResolver, Messages};
