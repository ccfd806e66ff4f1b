//! Path and distance queries through the lowest common ancestor.

use crate::arena::{Forest, NodeId};
use crate::error::{TreeError, TreeResult};

impl<T> Forest<T> {
    /// The chain from the root of `id`'s tree down to `id`, inclusive.
    fn root_chain(&self, id: NodeId) -> TreeResult<Vec<NodeId>> {
        let mut chain = vec![id];
        chain.extend(self.ancestors(id)?);
        chain.reverse();
        Ok(chain)
    }

    /// The lowest common ancestor of `a` and `b`: the deepest node that
    /// is an ancestor of (or equal to) both. Fails with
    /// [`TreeError::NodesNotInSameTree`] when their roots differ.
    pub fn lca(&self, a: NodeId, b: NodeId) -> TreeResult<NodeId> {
        let down_a = self.root_chain(a)?;
        let down_b = self.root_chain(b)?;
        let common = Self::common_prefix(&down_a, &down_b);
        if common == 0 {
            return Err(TreeError::NodesNotInSameTree(a, b));
        }
        Ok(down_a[common - 1])
    }

    /// The unique simple path from `a` to `b` through their lowest
    /// common ancestor, inclusive of both endpoints. `path(n, n)` is
    /// `[n]`. Fails with [`TreeError::NodesNotInSameTree`] when the two
    /// nodes live in different trees.
    pub fn path(&self, a: NodeId, b: NodeId) -> TreeResult<Vec<NodeId>> {
        let down_a = self.root_chain(a)?;
        let down_b = self.root_chain(b)?;
        let common = Self::common_prefix(&down_a, &down_b);
        if common == 0 {
            return Err(TreeError::NodesNotInSameTree(a, b));
        }

        // a up to (excluding) the LCA, the LCA, then down to b
        let mut path: Vec<NodeId> = down_a[common..].iter().rev().copied().collect();
        path.push(down_a[common - 1]);
        path.extend_from_slice(&down_b[common..]);
        Ok(path)
    }

    /// Number of edges between `a` and `b`; 0 for `a == b`. Propagates
    /// [`TreeError::NodesNotInSameTree`] instead of returning a numeric
    /// sentinel.
    pub fn distance(&self, a: NodeId, b: NodeId) -> TreeResult<usize> {
        Ok(self.path(a, b)?.len() - 1)
    }

    fn common_prefix(down_a: &[NodeId], down_b: &[NodeId]) -> usize {
        down_a
            .iter()
            .zip(down_b)
            .take_while(|(x, y)| x == y)
            .count()
    }
}
