#![forbid(unsafe_code)]

//! The Rule record and its message rendering
//!
//! A Rule describes one constraint: at most `max_nodes` published nodes of
//! `child_type` may exist under a parent of `parent_type`. Rules are
//! immutable after construction and freely cloneable; the engine hands a
//! clone of the fired rule back to the host inside every Decision so the
//! host can render the block or warning text.

use crate::types::{DocTypeMatch, RuleOrigin, Scope};
use serde::Serialize;

/// Default category for generated and custom messages without one of their own
pub const DEFAULT_CATEGORY: &str = "Publish";

/// A user-facing message: an event category plus the text to display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub category: String,
    pub text: String,
}

/// One publish-limit constraint
///
/// Construct with [`Rule::new`] and the `with_*` setters:
///
/// ```
/// use publish_gate::{DocTypeMatch, Rule, Scope};
///
/// let rule = Rule::new(
///     DocTypeMatch::Alias("page".into()),
///     DocTypeMatch::Alias("article".into()),
///     3,
/// )
/// .with_scope(Scope::DirectChildren)
/// .with_warnings(true);
///
/// assert_eq!(rule.max_nodes(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    parent_type: DocTypeMatch,
    child_type: DocTypeMatch,
    max_nodes: i64,
    scope: Scope,
    show_warnings: bool,
    origin: RuleOrigin,
    custom_block_message: Option<String>,
    custom_block_category: Option<String>,
    custom_warning_message: Option<String>,
    custom_warning_category: Option<String>,
}

impl Rule {
    /// Creates a static rule with the given type matchers and limit
    ///
    /// A rule with `max_nodes <= 0` is valid but inert: it never matches
    /// during evaluation. Optional behavior is added via the `with_*`
    /// setters; defaults are direct-children scope, no warnings, and
    /// generated messages.
    pub fn new(parent_type: DocTypeMatch, child_type: DocTypeMatch, max_nodes: i64) -> Self {
        Rule {
            parent_type,
            child_type,
            max_nodes,
            scope: Scope::default(),
            show_warnings: false,
            origin: RuleOrigin::Static,
            custom_block_message: None,
            custom_block_category: None,
            custom_warning_message: None,
            custom_warning_category: None,
        }
    }

    /// Creates the rule synthesized from a parent node's override attribute
    ///
    /// Counts every published node under the parent regardless of type, so
    /// the child matcher is the wildcard and the scope is the full subtree.
    pub(crate) fn from_node_property(
        parent_alias: impl Into<String>,
        max_nodes: i64,
        show_warnings: bool,
    ) -> Self {
        Rule {
            parent_type: DocTypeMatch::Alias(parent_alias.into()),
            child_type: DocTypeMatch::Any,
            max_nodes,
            scope: Scope::Descendants,
            show_warnings,
            origin: RuleOrigin::NodeProperty,
            custom_block_message: None,
            custom_block_category: None,
            custom_warning_message: None,
            custom_warning_category: None,
        }
    }

    /// Sets which part of the tree this rule counts
    pub fn with_scope(mut self, scope: Scope) -> Self {
        self.scope = scope;
        self
    }

    /// Enables or disables the near-limit warning for this rule
    pub fn with_warnings(mut self, show_warnings: bool) -> Self {
        self.show_warnings = show_warnings;
        self
    }

    /// Replaces the generated block text; empty means "use generated text"
    pub fn with_block_message(mut self, text: impl Into<String>) -> Self {
        self.custom_block_message = non_empty(text.into());
        self
    }

    /// Replaces the default category on the block message
    pub fn with_block_category(mut self, category: impl Into<String>) -> Self {
        self.custom_block_category = non_empty(category.into());
        self
    }

    /// Replaces the generated warning text; empty means "use generated text"
    pub fn with_warning_message(mut self, text: impl Into<String>) -> Self {
        self.custom_warning_message = non_empty(text.into());
        self
    }

    /// Replaces the default category on the warning message
    pub fn with_warning_category(mut self, category: impl Into<String>) -> Self {
        self.custom_warning_category = non_empty(category.into());
        self
    }

    /// The parent-side type matcher
    pub fn parent_type(&self) -> &DocTypeMatch {
        &self.parent_type
    }

    /// The child-side type matcher
    pub fn child_type(&self) -> &DocTypeMatch {
        &self.child_type
    }

    /// The maximum allowed count; `<= 0` makes the rule inert
    pub fn max_nodes(&self) -> i64 {
        self.max_nodes
    }

    /// Which part of the tree this rule counts
    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Whether a near-limit warning should be surfaced when this rule matches
    pub fn show_warnings(&self) -> bool {
        self.show_warnings
    }

    /// Where this rule came from
    pub fn origin(&self) -> RuleOrigin {
        self.origin
    }

    /// Renders the message shown when the limit has been reached
    ///
    /// A custom block message wins verbatim over generated text. Generated
    /// text names the child and parent types, falling back to "of any type"
    /// and "any node" for wildcards; property-derived rules get a generic
    /// "this node" wording with no type names.
    pub fn blocked_message(&self) -> Message {
        let category = self
            .custom_block_category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        if let Some(text) = &self.custom_block_message {
            return Message {
                category,
                text: text.clone(),
            };
        }

        let text = match self.origin {
            RuleOrigin::NodeProperty => format!(
                "This node cannot have more than {} published nodes under it.",
                self.max_nodes
            ),
            RuleOrigin::Static => format!(
                "You cannot publish more than {} nodes {} under {}.",
                self.max_nodes,
                child_phrase(&self.child_type),
                parent_phrase(&self.parent_type)
            ),
        };

        Message { category, text }
    }

    /// Renders the advisory shown when the limit is close but not reached
    ///
    /// `current_count` is the number of published nodes before this publish;
    /// the text reports `current_count + 1` out of `max_nodes`, the position
    /// the node being published will occupy.
    pub fn warning_message(&self, current_count: usize) -> Message {
        let category = self
            .custom_warning_category
            .clone()
            .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());

        if let Some(text) = &self.custom_warning_message {
            return Message {
                category,
                text: text.clone(),
            };
        }

        let position = current_count as i64 + 1;
        let text = match self.origin {
            RuleOrigin::NodeProperty => format!(
                "This will be node {} of {} allowed under this node.",
                position, self.max_nodes
            ),
            RuleOrigin::Static => format!(
                "This will be node {} of {} allowed nodes {} under {}.",
                position,
                self.max_nodes,
                child_phrase(&self.child_type),
                parent_phrase(&self.parent_type)
            ),
        };

        Message { category, text }
    }
}

fn child_phrase(child_type: &DocTypeMatch) -> String {
    match child_type {
        DocTypeMatch::Any => "of any type".to_string(),
        DocTypeMatch::Alias(alias) => format!("of type \"{}\"", alias),
    }
}

fn parent_phrase(parent_type: &DocTypeMatch) -> String {
    match parent_type {
        DocTypeMatch::Any => "any node".to_string(),
        DocTypeMatch::Alias(alias) => format!("a \"{}\" node", alias),
    }
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}
