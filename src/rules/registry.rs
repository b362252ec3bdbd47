#![forbid(unsafe_code)]

//! Ordered, append-only rule registry
//!
//! Evaluation is first-match-wins, so registration order is significant:
//! the registry is a vector iterated front to back, never a map. Rules are
//! appended once during startup (from configuration, then programmatically)
//! and the registry is read-only while the engine evaluates.

use crate::rules::Rule;

/// The ordered rule list held by the engine
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: Vec<Rule>,
}

impl RuleRegistry {
    /// Creates a new empty RuleRegistry
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule
    ///
    /// Rules are never removed or reordered; a rule registered earlier
    /// always takes precedence over a later one that matches the same node.
    pub fn register(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    /// Iterates rules in registration order
    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }

    /// Number of registered rules
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// True if no rules are registered
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl FromIterator<Rule> for RuleRegistry {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}
