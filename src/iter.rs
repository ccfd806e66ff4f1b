//! Depth-first traversal over subtrees.

use crate::arena::{Forest, NodeId, TreeNode};

impl<T> Forest<T> {
    /// Pre-order depth-first traversal of the subtree rooted at `from`:
    /// the node itself, then each child subtree in child order. Yields
    /// nothing when `from` does not resolve.
    pub fn iter_subtree(&self, from: NodeId) -> SubtreeIter<'_, T> {
        SubtreeIter::new(self, from)
    }

    /// Post-order variant: all descendants of each child before the node
    /// itself. Used for bottom-up passes.
    pub fn iter_postorder(&self, from: NodeId) -> PostOrderIter<'_, T> {
        PostOrderIter::new(self, from)
    }
}

pub struct SubtreeIter<'a, T> {
    forest: &'a Forest<T>,
    stack: Vec<NodeId>,
}

impl<'a, T> SubtreeIter<'a, T> {
    fn new(forest: &'a Forest<T>, from: NodeId) -> Self {
        let mut stack = Vec::new();
        if forest.contains(from) {
            stack.push(from);
        }
        Self { forest, stack }
    }
}

impl<'a, T> Iterator for SubtreeIter<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.stack.pop()?;
        let node = self.forest.get_node(current)?;
        // Push children in reverse order for left-to-right traversal
        for &child in node.children().iter().rev() {
            self.stack.push(child);
        }
        Some((current, node))
    }
}

pub struct PostOrderIter<'a, T> {
    forest: &'a Forest<T>,
    stack: Vec<(NodeId, bool)>,
}

impl<'a, T> PostOrderIter<'a, T> {
    fn new(forest: &'a Forest<T>, from: NodeId) -> Self {
        let mut stack = Vec::new();
        if forest.contains(from) {
            stack.push((from, false));
        }
        Self { forest, stack }
    }
}

impl<'a, T> Iterator for PostOrderIter<'a, T> {
    type Item = (NodeId, &'a TreeNode<T>);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some((current, visited)) = self.stack.pop() {
            let node = self.forest.get_node(current)?;
            if visited {
                return Some((current, node));
            }
            self.stack.push((current, true));
            for &child in node.children().iter().rev() {
                self.stack.push((child, false));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::arena::{Forest, NodeId, Position};
    use crate::error::TreeResult;

    fn setup_forest() -> TreeResult<(Forest<&'static str>, NodeId)> {
        let mut forest = Forest::new();
        let root = forest.new_node("root");
        let a = forest.new_node("a");
        let b = forest.new_node("b");
        let c = forest.new_node("c");
        forest.link(root, Position::End, &[a, b, c])?;

        let a1 = forest.new_node("a1");
        let a2 = forest.new_node("a2");
        forest.link(a, Position::End, &[a1, a2])?;

        let b1 = forest.new_node("b1");
        forest.link(b, Position::End, &[b1])?;

        Ok((forest, root))
    }

    #[test]
    fn test_preorder_visits_node_before_children() -> TreeResult<()> {
        let (forest, root) = setup_forest()?;
        let visited: Vec<_> = forest
            .iter_subtree(root)
            .map(|(_, node)| *node.data())
            .collect();

        assert_eq!(visited, vec!["root", "a", "a1", "a2", "b", "b1", "c"]);
        Ok(())
    }

    #[test]
    fn test_postorder_visits_children_first() -> TreeResult<()> {
        let (forest, root) = setup_forest()?;
        let visited: Vec<_> = forest
            .iter_postorder(root)
            .map(|(_, node)| *node.data())
            .collect();

        assert_eq!(visited, vec!["a1", "a2", "a", "b1", "b", "c", "root"]);
        Ok(())
    }

    #[test]
    fn test_iteration_starts_at_any_node() -> TreeResult<()> {
        let (forest, root) = setup_forest()?;
        let a = forest.child_at(root, 0)?;
        let visited: Vec<_> = forest
            .iter_subtree(a)
            .map(|(_, node)| *node.data())
            .collect();

        assert_eq!(visited, vec!["a", "a1", "a2"]);
        Ok(())
    }

    #[test]
    fn test_stale_id_yields_nothing() -> TreeResult<()> {
        let (mut forest, root) = setup_forest()?;
        let c = forest.child_at(root, 2)?;
        forest.discard(c)?;

        assert_eq!(forest.iter_subtree(c).count(), 0);
        Ok(())
    }
}
