#![forbid(unsafe_code)]

//! The outcome of evaluating one node against the rule set

use crate::rules::Rule;
use serde::Serialize;

/// The result of matching one node against one rule
///
/// A Decision is produced fresh per evaluation and consumed immediately by
/// the host; it is never stored or reused across nodes. The host contract:
///
/// - `limit_reached()` → cancel the publish and surface
///   [`Rule::blocked_message`].
/// - otherwise, if `rule().show_warnings()` → let the publish proceed and
///   surface [`Rule::warning_message`]`(matched_count())` as an advisory.
/// - otherwise → let the publish proceed silently.
#[derive(Debug, Clone, Serialize)]
pub struct Decision {
    matched_count: usize,
    rule: Rule,
}

impl Decision {
    pub(crate) fn new(matched_count: usize, rule: Rule) -> Self {
        Decision {
            matched_count,
            rule,
        }
    }

    /// The sibling/descendant count observed at evaluation time
    pub fn matched_count(&self) -> usize {
        self.matched_count
    }

    /// The rule that produced this decision
    pub fn rule(&self) -> &Rule {
        &self.rule
    }

    /// True when the observed count has reached the rule's limit
    pub fn limit_reached(&self) -> bool {
        self.matched_count as i64 >= self.rule.max_nodes()
    }
}
