#![forbid(unsafe_code)]

//! Host-capability contract for content-tree access
//!
//! The engine never touches the host's node model directly. Everything it
//! needs — parent lookup, published state, type aliases, sibling counts,
//! and the override attribute — comes through this trait, which the host
//! implements against its real content store.

use crate::types::DocTypeMatch;

/// Tree-access capabilities the engine requires from its host
///
/// Counting methods only consider *published* nodes; drafts never count
/// toward a limit. Implementations are queried live on every evaluation:
/// when several siblings are published in one batch, each node sees counts
/// from before the others in the batch completed. That ordering sensitivity
/// is part of the contract.
pub trait ContentQuery {
    /// Opaque node handle owned by the host
    type Node;

    /// Returns the node's parent, or None for a top-level node
    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// Returns true if the node is already in the published state
    fn is_published(&self, node: &Self::Node) -> bool;

    /// Returns the node's document-type alias
    fn type_alias(&self, node: &Self::Node) -> String;

    /// Counts the parent's published direct children matching the filter
    fn count_published_children(&self, parent: &Self::Node, filter: &DocTypeMatch) -> usize;

    /// Counts published nodes matching the filter anywhere under the parent
    fn count_published_descendants(&self, parent: &Self::Node, filter: &DocTypeMatch) -> usize;

    /// Reads a numeric attribute from the node
    ///
    /// Every failure mode — attribute absent, null, non-numeric, unparsable —
    /// must collapse to None. The engine treats None as "no override
    /// present" and never distinguishes why the read produced nothing.
    fn numeric_attribute(&self, node: &Self::Node, attribute: &str) -> Option<i64>;
}
