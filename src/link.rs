//! Structural mutation: linking subtrees into a child sequence and
//! removing or replacing children.
//!
//! Every fallible operation here is all-or-nothing: validation runs to
//! completion before the first write, and a failed call leaves every
//! tree untouched.

use std::collections::HashSet;

use tracing::instrument;

use crate::arena::{Forest, NodeId, Position};
use crate::error::{TreeError, TreeResult};

impl<T> Forest<T> {
    /// Links `nodes` as direct children of `parent`, spliced in just
    /// before the child currently at `position` (clamped). The relative
    /// order of `nodes` and of the existing children is preserved.
    ///
    /// Each incoming node must be the root of its own tree, and neither
    /// the incoming subtrees among themselves nor the target tree may
    /// share a single node with them; otherwise the call fails with
    /// [`TreeError::DuplicateNodeFound`] and nothing is mutated. This is
    /// what rejects cycle attempts (linking an ancestor under its own
    /// descendant) and aliasing (linking a node that is already linked
    /// elsewhere).
    #[instrument(level = "debug", skip(self))]
    pub fn link(&mut self, parent: NodeId, position: Position, nodes: &[NodeId]) -> TreeResult<()> {
        self.node(parent)?;

        // Validation must complete before any write happens.
        let mut incoming = HashSet::new();
        for &node in nodes {
            if self.node(node)?.parent.is_some() {
                return Err(TreeError::DuplicateNodeFound(node));
            }
            for (id, _) in self.iter_subtree(node) {
                if !incoming.insert(id) {
                    return Err(TreeError::DuplicateNodeFound(id));
                }
            }
        }

        let root = self.root_of(parent)?;
        for (id, _) in self.iter_subtree(root) {
            if incoming.contains(&id) {
                return Err(TreeError::DuplicateNodeFound(id));
            }
        }

        for &node in nodes {
            self.node_mut(node)?.parent = Some(parent);
        }
        let target = self.node_mut(parent)?;
        let at = position.resolve(target.children.len());
        target.children.splice(at..at, nodes.iter().copied());
        Ok(())
    }

    /// Detaches and returns the child of `parent` at `index`. The child
    /// becomes the root of its own tree.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_child_at(&mut self, parent: NodeId, index: usize) -> TreeResult<NodeId> {
        if index >= self.node(parent)?.children.len() {
            return Err(TreeError::NodeNotFound(parent));
        }
        let child = self.node_mut(parent)?.children.remove(index);
        self.node_mut(child)?.parent = None;
        Ok(child)
    }

    /// Detaches every direct child of `parent` in one step, returning
    /// them in their original order, each now a root.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_all_children(&mut self, parent: NodeId) -> TreeResult<Vec<NodeId>> {
        let children = std::mem::take(&mut self.node_mut(parent)?.children);
        for &child in &children {
            self.node_mut(child)?.parent = None;
        }
        Ok(children)
    }

    /// Removes `id` from its tree. `id` and its subtree stay valid as a
    /// standalone tree. Roots cannot be removed.
    #[instrument(level = "debug", skip(self))]
    pub fn remove(&mut self, id: NodeId) -> TreeResult<()> {
        let parent = self
            .node(id)?
            .parent
            .ok_or(TreeError::CannotRemoveRootNode(id))?;
        let index = self.child_index(parent, id)?;
        self.remove_child_at(parent, index)?;
        Ok(())
    }

    /// Removes `target` from the (sub)tree rooted at `root`. Fails with
    /// [`TreeError::NodeNotFound`] when `target` is not reachable from
    /// `root`, and with [`TreeError::CannotRemoveRootNode`] when
    /// `target == root`.
    #[instrument(level = "debug", skip(self))]
    pub fn remove_from(&mut self, root: NodeId, target: NodeId) -> TreeResult<()> {
        if target == root {
            return Err(TreeError::CannotRemoveRootNode(target));
        }
        self.node(root)?;
        if !self.iter_subtree(root).any(|(id, _)| id == target) {
            return Err(TreeError::NodeNotFound(target));
        }
        self.remove(target)
    }

    /// Replaces the child of `parent` at `index` with `nodes`, returning
    /// the removed child. When the link step is rejected, the removed
    /// child is restored at its original position and the error
    /// propagates, so the call is atomic.
    #[instrument(level = "debug", skip(self))]
    pub fn replace_child_at(
        &mut self,
        parent: NodeId,
        index: usize,
        nodes: &[NodeId],
    ) -> TreeResult<NodeId> {
        let removed = self.remove_child_at(parent, index)?;
        match self.link(parent, Position::At(index), nodes) {
            Ok(()) => Ok(removed),
            Err(err) => {
                // put the removed child back; a rejected link must leave
                // the tree as it was
                self.node_mut(removed)?.parent = Some(parent);
                self.node_mut(parent)?.children.insert(index, removed);
                Err(err)
            }
        }
    }

    /// Replaces `id` in its tree by `nodes`. Roots cannot be replaced.
    #[instrument(level = "debug", skip(self))]
    pub fn replace(&mut self, id: NodeId, nodes: &[NodeId]) -> TreeResult<()> {
        let parent = self
            .node(id)?
            .parent
            .ok_or(TreeError::CannotReplaceRootNode(id))?;
        let index = self.child_index(parent, id)?;
        self.replace_child_at(parent, index, nodes)?;
        Ok(())
    }
}
