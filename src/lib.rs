#![forbid(unsafe_code)]

//! publish-gate: publish-time sibling limit enforcement for content trees
//!
//! publish-gate is a policy engine that a content-management host consults
//! before a node transitions to "published". It counts the node's already
//! published siblings (or descendants) under the same parent, compares the
//! count against configured limits, and tells the host whether to block the
//! publish, allow it, or allow it with a warning.
//!
//! The engine performs no I/O and knows nothing about the host's content
//! store: all tree access goes through the [`engine::ContentQuery`] trait,
//! which the host implements against its real node model.

pub mod config;
pub mod engine;
pub mod error;
pub mod rules;
pub mod types;

// Re-export error types for convenient access
pub use error::{ConfigError, GateError, RuleError};

// Re-export the main engine surface for convenient access
pub use config::Config;
pub use engine::{ContentQuery, Decision, PublishGate};
pub use rules::{Message, Rule, RuleRegistry};
pub use types::{DocTypeMatch, RuleOrigin, Scope};
