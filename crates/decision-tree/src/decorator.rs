//! Decorator nodes.
//!
//! Decorators wrap a single child and modify its result. This module provides
//! [`Inverter`] (NOT logic).

use crate::{Behavior, Node, NodeKind, Status};

/// Inverts the result of its child.
///
/// # Semantics
///
/// - If the child returns `Success`, the inverter returns `Failure`
/// - If the child returns `Failure`, the inverter returns `Success`
/// - If the child returns `Running`, the inverter returns `Running`
/// - Without a child, the inverter returns `Failure`
pub struct Inverter<C> {
    child: Option<Node<C>>,
}

impl<C> Inverter<C> {
    /// Creates a new inverter that wraps the given child.
    pub fn new(child: Node<C>) -> Self {
        Self { child: Some(child) }
    }

    /// Creates an inverter whose child is appended later.
    pub fn empty() -> Self {
        Self { child: None }
    }
}

impl<C> Behavior<C> for Inverter<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.child.as_mut() {
            Some(child) => child.tick(ctx).invert(),
            None => Status::Failure,
        }
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Inverter
    }

    fn children(&self) -> &[Node<C>] {
        self.child.as_slice()
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        self.child.as_mut_slice()
    }

    fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        if self.child.is_some() {
            return Err(child);
        }
        self.child = Some(child);
        Ok(())
    }
}
