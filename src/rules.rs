#![forbid(unsafe_code)]

//! Rule definitions, message rendering, and the rule registry

mod registry;
mod rule;

pub use registry::RuleRegistry;
pub use rule::{DEFAULT_CATEGORY, Message, Rule};
