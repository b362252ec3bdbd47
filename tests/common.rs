//! Test utilities for publish-gate integration tests

use publish_gate::{ContentQuery, DocTypeMatch};
use std::collections::HashMap;

/// Result type alias for tests
#[allow(dead_code)]
pub type TestResult<T = ()> = Result<T, Box<dyn std::error::Error>>;

/// Extract Ok value or panic with context
#[macro_export]
macro_rules! assert_ok {
    ($expr:expr) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("assertion failed: expected Ok, got Err({:?})", e),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Ok(v) => v,
            Err(e) => panic!("{}: {:?}", $msg, e),
        }
    };
}

/// Extract Some value or panic with context
#[macro_export]
macro_rules! assert_some {
    ($expr:expr) => {
        match $expr {
            Some(v) => v,
            None => panic!("assertion failed: expected Some, got None"),
        }
    };
    ($expr:expr, $msg:literal) => {
        match $expr {
            Some(v) => v,
            None => panic!("{}: got None", $msg),
        }
    };
}

#[derive(Debug)]
struct MemoryNode {
    parent: Option<String>,
    alias: String,
    published: bool,
    attributes: HashMap<String, i64>,
}

/// In-memory content tree implementing ContentQuery, keyed by node name
///
/// Build with the fluent helpers:
///
/// ```ignore
/// let mut tree = MemoryTree::new();
/// tree.root("home", "page");
/// tree.published_child("home", "news-1", "article");
/// tree.draft_child("home", "news-2", "article");
/// ```
#[derive(Debug, Default)]
pub struct MemoryTree {
    nodes: HashMap<String, MemoryNode>,
}

#[allow(dead_code)]
impl MemoryTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, name: &str, alias: &str) {
        self.insert(name, None, alias, true);
    }

    pub fn published_child(&mut self, parent: &str, name: &str, alias: &str) {
        self.insert(name, Some(parent), alias, true);
    }

    pub fn draft_child(&mut self, parent: &str, name: &str, alias: &str) {
        self.insert(name, Some(parent), alias, false);
    }

    pub fn set_attribute(&mut self, name: &str, attribute: &str, value: i64) {
        self.nodes
            .get_mut(name)
            .expect("node must exist before setting an attribute")
            .attributes
            .insert(attribute.to_string(), value);
    }

    fn insert(&mut self, name: &str, parent: Option<&str>, alias: &str, published: bool) {
        self.nodes.insert(
            name.to_string(),
            MemoryNode {
                parent: parent.map(str::to_string),
                alias: alias.to_string(),
                published,
                attributes: HashMap::new(),
            },
        );
    }

    fn is_under(&self, name: &str, ancestor: &str) -> bool {
        let mut current = self.nodes[name].parent.as_deref();
        while let Some(parent) = current {
            if parent == ancestor {
                return true;
            }
            current = self.nodes[parent].parent.as_deref();
        }
        false
    }
}

impl ContentQuery for MemoryTree {
    type Node = String;

    fn parent(&self, node: &String) -> Option<String> {
        self.nodes[node].parent.clone()
    }

    fn is_published(&self, node: &String) -> bool {
        self.nodes[node].published
    }

    fn type_alias(&self, node: &String) -> String {
        self.nodes[node].alias.clone()
    }

    fn count_published_children(&self, parent: &String, filter: &DocTypeMatch) -> usize {
        self.nodes
            .values()
            .filter(|n| {
                n.parent.as_deref() == Some(parent.as_str())
                    && n.published
                    && filter.matches(&n.alias)
            })
            .count()
    }

    fn count_published_descendants(&self, parent: &String, filter: &DocTypeMatch) -> usize {
        self.nodes
            .iter()
            .filter(|(name, n)| {
                self.is_under(name, parent) && n.published && filter.matches(&n.alias)
            })
            .count()
    }

    fn numeric_attribute(&self, node: &String, attribute: &str) -> Option<i64> {
        self.nodes[node].attributes.get(attribute).copied()
    }
}
