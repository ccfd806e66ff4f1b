//! Aggregate queries over a subtree or a whole tree.

use crate::arena::{Forest, NodeId};
use crate::error::TreeResult;

/// Selects what an aggregate query ranges over: the subtree rooted at
/// the given node, or the whole tree the node belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Subtree,
    Tree,
}

impl<T> Forest<T> {
    fn scope_root(&self, from: NodeId, scope: Scope) -> TreeResult<NodeId> {
        match scope {
            Scope::Subtree => {
                self.node(from)?;
                Ok(from)
            }
            Scope::Tree => self.root_of(from),
        }
    }

    /// Number of nodes in the selected (sub)tree.
    pub fn size(&self, from: NodeId, scope: Scope) -> TreeResult<usize> {
        let root = self.scope_root(from, scope)?;
        Ok(self.iter_subtree(root).count())
    }

    /// Number of nodes at the absolute `level` (tree root = 0) within
    /// the selected (sub)tree.
    pub fn width(&self, from: NodeId, level: usize, scope: Scope) -> TreeResult<usize> {
        let root = self.scope_root(from, scope)?;
        let mut width = 0;
        for (id, _) in self.iter_subtree(root) {
            if self.level(id)? == level {
                width += 1;
            }
        }
        Ok(width)
    }

    /// Number of leaf nodes in the selected (sub)tree.
    pub fn breadth(&self, from: NodeId, scope: Scope) -> TreeResult<usize> {
        let root = self.scope_root(from, scope)?;
        Ok(self
            .iter_subtree(root)
            .filter(|(_, node)| node.is_leaf())
            .count())
    }

    /// Maximum degree over all nodes of the selected (sub)tree.
    pub fn max_degree(&self, from: NodeId, scope: Scope) -> TreeResult<usize> {
        let root = self.scope_root(from, scope)?;
        Ok(self
            .iter_subtree(root)
            .map(|(_, node)| node.degree())
            .max()
            .unwrap_or(0))
    }

    /// Height, in edges, of the selected (sub)tree.
    pub fn tree_height(&self, from: NodeId, scope: Scope) -> TreeResult<usize> {
        let root = self.scope_root(from, scope)?;
        self.height(root)
    }

    /// Leaf ids of the selected (sub)tree, in traversal order.
    pub fn leaves(&self, from: NodeId, scope: Scope) -> TreeResult<Vec<NodeId>> {
        let root = self.scope_root(from, scope)?;
        Ok(self
            .iter_subtree(root)
            .filter(|(_, node)| node.is_leaf())
            .map(|(id, _)| id)
            .collect())
    }

    /// For each leaf of the selected (sub)tree, the node path from the
    /// selected root down to that leaf.
    pub fn leaf_paths(&self, from: NodeId, scope: Scope) -> TreeResult<Vec<Vec<NodeId>>> {
        let root = self.scope_root(from, scope)?;
        let mut paths = Vec::new();
        for leaf in self.leaves(root, Scope::Subtree)? {
            let mut path = vec![leaf];
            let mut current = leaf;
            while current != root {
                current = self.parent(current)?;
                path.push(current);
            }
            path.reverse();
            paths.push(path);
        }
        Ok(paths)
    }
}
