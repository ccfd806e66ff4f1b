//! Human-readable renderings of a (sub)tree.

use std::fmt::Display;

use itertools::Itertools;

use crate::arena::{Forest, NodeId, TreeNode};
use crate::error::TreeResult;

impl<T: Display> Forest<T> {
    /// Deterministic bracket form of the subtree at `id`: the payload's
    /// display form followed by `[` + space-separated child renders +
    /// `]`, omitted entirely for leaves. A debugging/testing convenience,
    /// not a parseable format.
    pub fn render(&self, id: NodeId) -> TreeResult<String> {
        let node = self.node(id)?;
        Ok(self.render_node(node))
    }

    fn render_node(&self, node: &TreeNode<T>) -> String {
        if node.is_leaf() {
            return node.data().to_string();
        }
        let children = node
            .children()
            .iter()
            .filter_map(|&child| self.get_node(child))
            .map(|child| self.render_node(child))
            .join(" ");
        format!("{}[{}]", node.data(), children)
    }

    /// Box-drawing terminal rendering of the subtree at `id`.
    pub fn to_tree_string(&self, id: NodeId) -> TreeResult<termtree::Tree<String>> {
        let node = self.node(id)?;
        let mut tree = termtree::Tree::new(node.data().to_string());

        fn build_tree<T: Display>(
            forest: &Forest<T>,
            node: &TreeNode<T>,
            parent_tree: &mut termtree::Tree<String>,
        ) {
            for &child_id in node.children() {
                if let Some(child) = forest.get_node(child_id) {
                    let mut child_tree = termtree::Tree::new(child.data().to_string());
                    build_tree(forest, child, &mut child_tree);
                    parent_tree.push(child_tree);
                }
            }
        }

        build_tree(self, node, &mut tree);
        Ok(tree)
    }
}
