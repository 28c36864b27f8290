//! Terminal tree rendering via termtree.

use termtree::Tree;

use crate::node::Node;

/// Conversion of a node hierarchy into a printable tree.
pub trait ToTreeString {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTreeString for Node {
    fn to_tree_string(&self) -> Tree<String> {
        // Recursively construct the children
        let leaves: Vec<_> = self.children.iter().map(|c| c.to_tree_string()).collect();

        Tree::new(self.name.clone()).with_leaves(leaves)
    }
}
