//! Leaf nodes bound to provider methods.

use std::sync::Arc;

use crate::{Behavior, NodeKind, Status};

/// A condition or action supplied by a [`BehaviorProvider`](crate::BehaviorProvider).
///
/// The function is shared: every leaf bound to the same method name holds a
/// handle to the same closure.
pub type LeafFn<C> = Arc<dyn Fn(&mut C) -> Status + Send + Sync>;

/// Invokes its bound function and returns the result verbatim.
pub struct Leaf<C> {
    method: LeafFn<C>,
}

impl<C> Leaf<C> {
    pub fn new(method: LeafFn<C>) -> Self {
        Self { method }
    }

    pub fn from_fn<F>(method: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self::new(Arc::new(method))
    }
}

impl<C> Behavior<C> for Leaf<C> {
    #[inline]
    fn tick(&mut self, ctx: &mut C) -> Status {
        (self.method)(ctx)
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Leaf
    }
}
