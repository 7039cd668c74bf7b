//! Built decision trees.

use std::fmt;

use crate::{Node, NodeKind, Status};

/// A fully built tree, rooted at a [`Root`](crate::Root) node.
pub struct DecisionTree<C> {
    root: Node<C>,
}

impl<C> DecisionTree<C> {
    /// Wraps a root node.
    ///
    /// Returns the node back if it is not a `Root`.
    pub fn new(root: Node<C>) -> Result<Self, Node<C>> {
        if root.kind() != NodeKind::Root {
            return Err(root);
        }
        Ok(Self { root })
    }

    /// The tree's declared name.
    pub fn name(&self) -> &str {
        self.root.name()
    }

    pub fn root(&self) -> &Node<C> {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Node<C> {
        &mut self.root
    }

    /// Top-level children, driven by the [`Processor`](crate::Processor) as an
    /// implicit sequence.
    pub fn children(&self) -> &[Node<C>] {
        self.root.children()
    }

    /// Ticks the root node itself, which forwards to its first child.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        self.root.tick(ctx)
    }

    /// Resets every node in the tree.
    pub fn reset(&mut self) {
        self.root.reset();
    }

    pub fn find(&self, name: &str) -> Option<&Node<C>> {
        self.root.find(name)
    }

    /// Number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Always `false`: a tree contains at least its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_root(self) -> Node<C> {
        self.root
    }
}

impl<C> fmt::Debug for DecisionTree<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("DecisionTree").field(&self.root).finish()
    }
}
