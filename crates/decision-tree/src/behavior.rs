//! Core behavior trait.
//!
//! This module defines the [`Behavior`] trait, the variant-specific half of
//! every tree node. The shared half (name, weight, diagnostics) lives in
//! [`Node`](crate::Node), which owns a boxed behavior. The trait is generic
//! over a context type `C` so leaves can read and update agent state.

use crate::{Node, NodeKind, Status};

/// Variant-specific logic of a decision tree node.
///
/// Implementors keep only the state they need to resume across ticks (a
/// cursor for [`Sequence`](crate::Sequence), a pending child for
/// [`Selector`](crate::Selector)) and own their children directly.
pub trait Behavior<C>: Send + Sync {
    /// Performs exactly one tick of work for this node.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Mutable reference to the agent context handed to leaves.
    ///
    /// # Returns
    ///
    /// - `Status::Success` if the node succeeded
    /// - `Status::Running` if the node needs another tick
    /// - `Status::Failure` if the node failed
    fn tick(&mut self, ctx: &mut C) -> Status;

    /// Clears this node's own resumption state.
    ///
    /// Children are reset by [`Node::reset`] before this is called.
    fn reset(&mut self) {}

    /// The variant this behavior implements.
    fn kind(&self) -> NodeKind;

    /// Children in evaluation order.
    fn children(&self) -> &[Node<C>] {
        &[]
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut []
    }

    /// Appends a child to the right of the existing ones.
    ///
    /// Returns the child back if this variant cannot own it.
    fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        Err(child)
    }

    /// Index of the next child a resumable node will evaluate.
    fn cursor(&self) -> usize {
        0
    }

    /// Index of the child a selector committed to, if any.
    fn pending(&self) -> Option<usize> {
        None
    }
}
