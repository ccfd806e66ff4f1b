//! Arena storage for ordered trees.
//!
//! All nodes live in one [`generational_arena::Arena`]; parent and child
//! links are arena indices. Multiple disjoint trees coexist in the same
//! arena, so a "tree" is simply the set of nodes reachable from a root
//! node and detached subtrees remain valid trees in place.

use generational_arena::{Arena, Index};
use tracing::instrument;

use crate::error::{TreeError, TreeResult};

/// Identity of a node within a [`Forest`].
///
/// Generational indices make stale handles detectable: after a node is
/// freed via [`Forest::discard`], its id no longer resolves and
/// operations on it fail with [`TreeError::NodeNotFound`].
pub type NodeId = Index;

/// Insertion position within a node's child sequence.
///
/// `At(i)` inserts immediately before the child currently at `i` and is
/// clamped to the child count, so any position at or beyond the end
/// appends. `Start` and `End` are first-class spellings of the two
/// extremes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Insert before the first child.
    Start,
    /// Append after the last child.
    End,
    /// Insert before the child at this index (clamped to the end).
    At(usize),
}

impl Position {
    /// Resolves to a concrete index into a child sequence of length `len`.
    pub(crate) fn resolve(self, len: usize) -> usize {
        match self {
            Position::Start => 0,
            Position::End => len,
            Position::At(i) => i.min(len),
        }
    }
}

impl From<usize> for Position {
    fn from(i: usize) -> Self {
        Position::At(i)
    }
}

/// A single tree node: one payload, an optional parent back-reference,
/// and an ordered sequence of owned children.
#[derive(Debug, Clone)]
pub struct TreeNode<T> {
    pub(crate) data: T,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

impl<T> TreeNode<T> {
    /// The stored payload.
    pub fn data(&self) -> &T {
        &self.data
    }

    /// The parent id, `None` for roots.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The ordered child ids.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Number of direct children.
    pub fn degree(&self) -> usize {
        self.children.len()
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Arena-backed storage for any number of disjoint ordered trees.
///
/// Nodes are created standalone as roots of singleton trees and are woven
/// into larger trees with [`Forest::link`]. All operations are keyed by
/// [`NodeId`]; operations that must resolve a node fail with
/// [`TreeError::NodeNotFound`] when handed a stale or foreign id.
#[derive(Debug)]
pub struct Forest<T> {
    arena: Arena<TreeNode<T>>,
}

impl<T> Default for Forest<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Forest<T> {
    pub fn new() -> Self {
        Self {
            arena: Arena::new(),
        }
    }

    pub fn with_capacity(n: usize) -> Self {
        Self {
            arena: Arena::with_capacity(n),
        }
    }

    /// Number of live nodes across all trees.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Whether `id` still resolves to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.arena.contains(id)
    }

    /// Creates a standalone node holding `data`: the root of a new
    /// singleton tree.
    #[instrument(level = "trace", skip(self, data))]
    pub fn new_node(&mut self, data: T) -> NodeId {
        self.arena.insert(TreeNode {
            data,
            parent: None,
            children: Vec::new(),
        })
    }

    pub fn get_node(&self, id: NodeId) -> Option<&TreeNode<T>> {
        self.arena.get(id)
    }

    pub fn get_node_mut(&mut self, id: NodeId) -> Option<&mut TreeNode<T>> {
        self.arena.get_mut(id)
    }

    pub(crate) fn node(&self, id: NodeId) -> TreeResult<&TreeNode<T>> {
        self.arena.get(id).ok_or(TreeError::NodeNotFound(id))
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> TreeResult<&mut TreeNode<T>> {
        self.arena.get_mut(id).ok_or(TreeError::NodeNotFound(id))
    }

    /// The payload of `id`.
    pub fn data(&self, id: NodeId) -> TreeResult<&T> {
        Ok(&self.node(id)?.data)
    }

    /// Mutable access to the payload of `id`.
    pub fn data_mut(&mut self, id: NodeId) -> TreeResult<&mut T> {
        Ok(&mut self.node_mut(id)?.data)
    }

    /// Replaces the payload of `id`, returning the previous value.
    pub fn set_data(&mut self, id: NodeId, data: T) -> TreeResult<T> {
        Ok(std::mem::replace(&mut self.node_mut(id)?.data, data))
    }

    /// The parent of `id`. Fails with [`TreeError::ParentMissing`] when
    /// `id` is a root.
    pub fn parent(&self, id: NodeId) -> TreeResult<NodeId> {
        self.node(id)?.parent.ok_or(TreeError::ParentMissing(id))
    }

    /// The ordered direct children of `id`; empty for leaves.
    pub fn children(&self, id: NodeId) -> TreeResult<&[NodeId]> {
        Ok(self.node(id)?.children())
    }

    /// The child of `id` at `index`.
    pub fn child_at(&self, id: NodeId, index: usize) -> TreeResult<NodeId> {
        self.node(id)?
            .children
            .get(index)
            .copied()
            .ok_or(TreeError::NodeNotFound(id))
    }

    /// Number of direct children of `id`.
    pub fn degree(&self, id: NodeId) -> TreeResult<usize> {
        Ok(self.node(id)?.degree())
    }

    /// Whether `id` is an external (leaf) node.
    pub fn is_leaf(&self, id: NodeId) -> TreeResult<bool> {
        Ok(self.node(id)?.is_leaf())
    }

    /// Number of edges from `id` up to its root; 0 for roots.
    pub fn level(&self, id: NodeId) -> TreeResult<usize> {
        let mut level = 0;
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            level += 1;
            current = self.node(parent)?;
        }
        Ok(level)
    }

    /// The ancestors of `id`: immediate parent first, root last. Empty
    /// for roots.
    pub fn ancestors(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut ancestors = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            ancestors.push(parent);
            current = self.node(parent)?;
        }
        Ok(ancestors)
    }

    /// The root of the tree `id` belongs to; `id` itself when parentless.
    pub fn root_of(&self, id: NodeId) -> TreeResult<NodeId> {
        let mut root = id;
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            root = parent;
            current = self.node(parent)?;
        }
        Ok(root)
    }

    /// The position of `target` in the child sequence of `id`.
    pub fn child_index(&self, id: NodeId, target: NodeId) -> TreeResult<usize> {
        self.node(id)?
            .children
            .iter()
            .position(|&child| child == target)
            .ok_or(TreeError::NodeNotFound(target))
    }

    /// The position of `id` in its parent's child sequence. Fails with
    /// [`TreeError::ParentMissing`] when `id` is a root.
    pub fn index_in_parent(&self, id: NodeId) -> TreeResult<usize> {
        let parent = self.parent(id)?;
        self.child_index(parent, id)
    }

    /// The longest downward path, in edges, from `id` to a leaf of its
    /// subtree; 0 for leaves.
    #[instrument(level = "debug", skip(self))]
    pub fn height(&self, id: NodeId) -> TreeResult<usize> {
        self.node(id)?;
        Ok(self.height_below(id))
    }

    fn height_below(&self, id: NodeId) -> usize {
        self.get_node(id)
            .map(|node| {
                node.children
                    .iter()
                    .map(|&child| 1 + self.height_below(child))
                    .max()
                    .unwrap_or(0)
            })
            .unwrap_or(0)
    }

    /// Frees `id` and its whole subtree, detaching it from its parent
    /// first when linked. Returns the number of nodes freed. Freed ids no
    /// longer resolve. This is the only destructive operation in the
    /// crate.
    #[instrument(level = "debug", skip(self))]
    pub fn discard(&mut self, id: NodeId) -> TreeResult<usize> {
        if let Some(parent) = self.node(id)?.parent {
            let index = self.child_index(parent, id)?;
            self.node_mut(parent)?.children.remove(index);
        }

        let doomed: Vec<NodeId> = self.iter_subtree(id).map(|(idx, _)| idx).collect();
        for idx in &doomed {
            self.arena.remove(*idx);
        }
        Ok(doomed.len())
    }
}
