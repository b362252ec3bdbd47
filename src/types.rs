#![forbid(unsafe_code)]

//! Core domain types for publish-gate
//!
//! This module defines the fundamental types used throughout the crate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document-type match expression for one side of a rule
///
/// The wildcard is a named case rather than a bare `"*"` string so that a
/// typo in configuration cannot silently become a non-matching alias. The
/// alias form is guaranteed non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum DocTypeMatch {
    /// Matches any document-type alias (the `"*"` sentinel in configuration)
    Any,
    /// Matches exactly one document-type alias
    Alias(String),
}

/// The sentinel string that deserializes to [`DocTypeMatch::Any`]
pub const WILDCARD: &str = "*";

impl DocTypeMatch {
    /// Creates a new DocTypeMatch, validating the input
    ///
    /// Returns None if the input is empty. `"*"` becomes [`DocTypeMatch::Any`];
    /// anything else becomes an exact alias match.
    pub fn new(alias: impl Into<String>) -> Option<Self> {
        let alias = alias.into();
        if alias.is_empty() {
            return None;
        }
        if alias == WILDCARD {
            return Some(DocTypeMatch::Any);
        }
        Some(DocTypeMatch::Alias(alias))
    }

    /// Returns true if this expression matches the given document-type alias
    pub fn matches(&self, alias: &str) -> bool {
        match self {
            DocTypeMatch::Any => true,
            DocTypeMatch::Alias(own) => own == alias,
        }
    }

    /// Returns true for the wildcard case
    pub fn is_any(&self) -> bool {
        matches!(self, DocTypeMatch::Any)
    }

    /// Returns the string form: the alias, or `"*"` for the wildcard
    pub fn as_str(&self) -> &str {
        match self {
            DocTypeMatch::Any => WILDCARD,
            DocTypeMatch::Alias(alias) => alias,
        }
    }
}

impl fmt::Display for DocTypeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<String> for DocTypeMatch {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        DocTypeMatch::new(value).ok_or_else(|| "Document type alias must not be empty".to_string())
    }
}

impl From<DocTypeMatch> for String {
    fn from(doc_type: DocTypeMatch) -> Self {
        doc_type.as_str().to_string()
    }
}

/// Which part of the tree a rule counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Scope {
    /// Count only the parent's direct children
    #[default]
    #[serde(rename = "direct")]
    DirectChildren,
    /// Count the full subtree under the parent
    #[serde(rename = "descendants")]
    Descendants,
}

/// Where a rule came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleOrigin {
    /// Declared in configuration or registered programmatically
    Static,
    /// Synthesized at evaluation time from an override attribute on the parent
    NodeProperty,
}
