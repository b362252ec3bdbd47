#![forbid(unsafe_code)]

//! Configuration loading for publish-gate

mod gate_toml;

pub use gate_toml::{Config, RuleEntry};
