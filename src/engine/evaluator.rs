#![forbid(unsafe_code)]

//! The publish gate: rule matching and counting
//!
//! This is the decision core. Given a node about to publish, the gate runs
//! the precedence chain: fast exits for root and already-published nodes,
//! then the per-node override attribute on the parent, then the static rule
//! list in registration order, returning the first Decision produced.

use crate::config::Config;
use crate::engine::{ContentQuery, Decision};
use crate::rules::{Rule, RuleRegistry};
use crate::types::Scope;
use tracing::debug;

/// The policy engine evaluated once per node per publish attempt
///
/// Construct one instance at process start — from configuration via
/// [`PublishGate::from_config`] or empty via [`PublishGate::new`] — and hand
/// it to whatever dispatch mechanism the host uses for publish events. The
/// rule set is append-only during setup and read-only during evaluation, so
/// a long-lived shared instance needs no locking.
///
/// Evaluation is synchronous and side-effect-free beyond reading the node
/// graph through [`ContentQuery`]. Nodes published together in a batch are
/// evaluated independently; each sees live counts taken before the other
/// nodes in the batch complete.
#[derive(Debug, Clone, Default)]
pub struct PublishGate {
    rules: RuleRegistry,
    property_alias: Option<String>,
    warn_on_property_limit: bool,
}

impl PublishGate {
    /// Creates a gate with no rules and no override attribute
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a gate from loaded configuration
    ///
    /// Rules are registered in document order, which fixes their precedence.
    pub fn from_config(config: Config) -> Self {
        let mut gate = PublishGate {
            rules: RuleRegistry::new(),
            property_alias: config.property_alias,
            warn_on_property_limit: config.warn_on_property_limit,
        };
        for entry in config.rules {
            gate.register_rule(entry.into_rule());
        }
        gate
    }

    /// Appends a rule after the configured ones
    pub fn register_rule(&mut self, rule: Rule) {
        self.rules.register(rule);
    }

    /// The registered static rules, in precedence order
    pub fn rules(&self) -> &RuleRegistry {
        &self.rules
    }

    /// Evaluates a node that is about to publish
    ///
    /// Returns None when no rule applies: the node is top-level, the node is
    /// already published (a republish, not a first publish), or nothing
    /// matches. Otherwise returns the Decision from the highest-precedence
    /// matching rule; the host inspects [`Decision::limit_reached`] and the
    /// rule's warning flag to act on it.
    ///
    /// Precedence: a positive override attribute on the parent replaces the
    /// entire static rule list for this node; otherwise the first matching
    /// static rule wins and later matches are never consulted.
    pub fn evaluate<Q: ContentQuery>(&self, query: &Q, node: &Q::Node) -> Option<Decision> {
        let parent = query.parent(node)?;

        // The gate fires on the publish transition only, not on saves of
        // already-published nodes.
        if query.is_published(node) {
            return None;
        }

        if let Some(rule) = self.property_rule(query, &parent) {
            let decision = self.check_rule(&rule, query, node, &parent);
            if let Some(decision) = &decision {
                debug!(
                    max_nodes = decision.rule().max_nodes(),
                    matched_count = decision.matched_count(),
                    "override attribute rule fired"
                );
            }
            return decision;
        }

        for rule in self.rules.iter() {
            if let Some(decision) = self.check_rule(rule, query, node, &parent) {
                debug!(
                    parent_type = rule.parent_type().as_str(),
                    child_type = rule.child_type().as_str(),
                    matched_count = decision.matched_count(),
                    "static rule fired"
                );
                return Some(decision);
            }
        }

        None
    }

    /// Synthesizes the override rule from the parent's attribute, if any
    ///
    /// Any failure reading the attribute, and any value `<= 0`, means "no
    /// override present" and the static rules apply instead.
    fn property_rule<Q: ContentQuery>(&self, query: &Q, parent: &Q::Node) -> Option<Rule> {
        let alias = self.property_alias.as_deref()?;
        let limit = query.numeric_attribute(parent, alias)?;
        if limit <= 0 {
            return None;
        }
        Some(Rule::from_node_property(
            query.type_alias(parent),
            limit,
            self.warn_on_property_limit,
        ))
    }

    /// Matches one rule against the node and computes the count
    ///
    /// Returns None for inert rules (`max_nodes <= 0`) and type mismatches.
    /// Once both type matchers hold, a Decision is always returned whether
    /// or not the limit is reached.
    fn check_rule<Q: ContentQuery>(
        &self,
        rule: &Rule,
        query: &Q,
        node: &Q::Node,
        parent: &Q::Node,
    ) -> Option<Decision> {
        if rule.max_nodes() <= 0 {
            return None;
        }

        if !rule.parent_type().matches(&query.type_alias(parent))
            || !rule.child_type().matches(&query.type_alias(node))
        {
            return None;
        }

        let count = match rule.scope() {
            Scope::DirectChildren => query.count_published_children(parent, rule.child_type()),
            Scope::Descendants => query.count_published_descendants(parent, rule.child_type()),
        };

        Some(Decision::new(count, rule.clone()))
    }
}
