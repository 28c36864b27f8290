//! Core content entity: a labeled node in a roadmap tree.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single labeled point in a content tree.
///
/// Nodes own their children exclusively; the tree is finite and acyclic by
/// construction. `children` keeps presentation order. Some leaf-like nodes
/// carry an illustrative `code` snippet; `name` is the only field present
/// on every node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Node {
    /// Text label, non-empty on every valid node
    pub name: String,
    /// Ordered child nodes, empty for leaves
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
    /// Illustrative snippet associated with the node
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl Node {
    /// Creates a leaf node with the given label.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            code: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Height of the subtree rooted here; a leaf has depth 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .map(Node::depth)
            .max()
            .unwrap_or(0)
    }

    /// Total number of nodes in this subtree, including the node itself.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Node::node_count).sum::<usize>()
    }

    /// Collects the labels of all leaf nodes, in presentation order.
    pub fn leaf_nodes(&self) -> Vec<&str> {
        if self.children.is_empty() {
            vec![self.name.as_str()]
        } else {
            let mut leaves = Vec::new();
            for child in &self.children {
                leaves.extend(child.leaf_nodes());
            }
            leaves
        }
    }
}
