//! Composite nodes.
//!
//! Composite nodes control the execution flow of multiple children. This
//! module provides [`Sequence`] (resumable AND), [`Fallback`] (OR) and the
//! structural [`Root`].

use crate::{Behavior, Node, NodeKind, Status};

/// Top of a tree.
///
/// The [`Processor`](crate::Processor) drives a root's children itself, as an
/// implicit sequence. Ticking a root directly only forwards to its first child.
pub struct Root<C> {
    children: Vec<Node<C>>,
}

impl<C> Root<C> {
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Root<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        match self.children.first_mut() {
            Some(child) => child.tick(ctx),
            None => Status::Failure,
        }
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Root
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }

    fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        self.children.push(child);
        Ok(())
    }
}

/// Executes children in order, resuming across ticks.
///
/// # Semantics
///
/// A `Sequence` evaluates its children from left to right, starting at its
/// cursor:
/// - If a child returns `Success`, the cursor **advances** and the next child
///   is evaluated in the same tick
/// - If a child returns `Running` or `Failure`, the sequence returns it
///   **without advancing**
/// - Once the cursor passes the last child, the sequence returns `Success`
///
/// Children that already succeeded are never evaluated again until the
/// sequence is reset.
pub struct Sequence<C> {
    children: Vec<Node<C>>,
    cursor: usize,
}

impl<C> Sequence<C> {
    /// Creates a new sequence with the given children.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self {
            children,
            cursor: 0,
        }
    }
}

impl<C> Behavior<C> for Sequence<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        while let Some(child) = self.children.get_mut(self.cursor) {
            match child.tick(ctx) {
                Status::Success => self.cursor += 1,
                other => return other, // Resume here next tick
            }
        }
        Status::Success
    }

    fn reset(&mut self) {
        self.cursor = 0;
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Sequence
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }

    fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        self.children.push(child);
        Ok(())
    }

    fn cursor(&self) -> usize {
        self.cursor
    }
}

/// Evaluates every child each tick until one succeeds.
///
/// # Semantics
///
/// - If a child returns `Success`, the fallback **stops immediately** and
///   returns `Success`
/// - If every child returns `Failure`, the fallback returns `Failure`
/// - Otherwise (at least one `Running`), the fallback returns `Running`
///
/// Unlike [`Sequence`], a fallback keeps no progress of its own: every tick
/// starts again from the first child.
pub struct Fallback<C> {
    children: Vec<Node<C>>,
}

impl<C> Fallback<C> {
    /// Creates a new fallback with the given children.
    pub fn new(children: Vec<Node<C>>) -> Self {
        Self { children }
    }
}

impl<C> Behavior<C> for Fallback<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let mut failed = 0;
        for child in &mut self.children {
            match child.tick(ctx) {
                Status::Success => return Status::Success, // Short-circuit
                Status::Failure => failed += 1,
                Status::Running => {}
            }
        }

        if failed == self.children.len() {
            Status::Failure
        } else {
            Status::Running
        }
    }

    fn kind(&self) -> NodeKind {
        NodeKind::Fallback
    }

    fn children(&self) -> &[Node<C>] {
        &self.children
    }

    fn children_mut(&mut self) -> &mut [Node<C>] {
        &mut self.children
    }

    fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        self.children.push(child);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Per-leaf call counters plus scripted outcomes.
    struct TestContext {
        calls: Vec<u32>,
    }

    impl TestContext {
        fn new(leaves: usize) -> Self {
            Self {
                calls: vec![0; leaves],
            }
        }
    }

    fn scripted(index: usize, script: &'static [Status]) -> Node<TestContext> {
        Node::leaf(format!("leaf{index}"), move |ctx: &mut TestContext| {
            let call = ctx.calls[index] as usize;
            ctx.calls[index] += 1;
            script[call.min(script.len() - 1)]
        })
    }

    fn always(index: usize, status: Status) -> Node<TestContext> {
        Node::leaf(format!("leaf{index}"), move |ctx: &mut TestContext| {
            ctx.calls[index] += 1;
            status
        })
    }

    #[test]
    fn sequence_resumes_at_running_child() {
        let mut seq = Node::sequence(
            "seq",
            vec![
                always(0, Status::Success),
                always(1, Status::Success),
                scripted(2, &[Status::Running, Status::Running, Status::Success]),
            ],
        );
        let mut ctx = TestContext::new(3);

        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 2);
        assert_eq!(seq.tick(&mut ctx), Status::Running);
        assert_eq!(seq.cursor(), 2);
        assert_eq!(seq.tick(&mut ctx), Status::Success);

        // Already-succeeded children ran exactly once.
        assert_eq!(ctx.calls, vec![1, 1, 3]);
    }

    #[test]
    fn sequence_fails_on_first_failure() {
        let mut seq = Node::sequence(
            "seq",
            vec![
                always(0, Status::Success),
                always(1, Status::Failure),
                always(2, Status::Success), // Should not execute
            ],
        );
        let mut ctx = TestContext::new(3);

        assert_eq!(seq.tick(&mut ctx), Status::Failure);
        assert_eq!(ctx.calls, vec![1, 1, 0]);
        assert_eq!(seq.cursor(), 1);
    }

    #[test]
    fn sequence_reset_rewinds_cursor() {
        let mut seq = Node::sequence(
            "seq",
            vec![always(0, Status::Success), always(1, Status::Running)],
        );
        let mut ctx = TestContext::new(2);

        seq.tick(&mut ctx);
        assert_eq!(seq.cursor(), 1);

        seq.reset();
        assert_eq!(seq.cursor(), 0);
        seq.tick(&mut ctx);
        assert_eq!(ctx.calls, vec![2, 2]);
    }

    #[test]
    fn empty_sequence_succeeds() {
        let mut seq: Node<TestContext> = Node::sequence("seq", Vec::new());
        assert_eq!(seq.tick(&mut TestContext::new(0)), Status::Success);
    }

    #[test]
    fn fallback_running_when_nothing_succeeds() {
        let mut or = Node::fallback(
            "or",
            vec![
                always(0, Status::Failure),
                always(1, Status::Running),
                always(2, Status::Failure),
            ],
        );
        let mut ctx = TestContext::new(3);

        assert_eq!(or.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.calls, vec![1, 1, 1]);
    }

    #[test]
    fn fallback_succeeds_on_first_success() {
        let mut or = Node::fallback(
            "or",
            vec![
                always(0, Status::Failure),
                always(1, Status::Success),
                always(2, Status::Failure), // Should not execute
            ],
        );
        let mut ctx = TestContext::new(3);

        assert_eq!(or.tick(&mut ctx), Status::Success);
        assert_eq!(ctx.calls, vec![1, 1, 0]);
    }

    #[test]
    fn fallback_fails_when_all_fail() {
        let mut or = Node::fallback(
            "or",
            vec![
                always(0, Status::Failure),
                always(1, Status::Failure),
                always(2, Status::Failure),
            ],
        );
        let mut ctx = TestContext::new(3);

        assert_eq!(or.tick(&mut ctx), Status::Failure);
    }

    #[test]
    fn fallback_reevaluates_every_child_each_tick() {
        let mut or = Node::fallback(
            "or",
            vec![always(0, Status::Failure), always(1, Status::Running)],
        );
        let mut ctx = TestContext::new(2);

        or.tick(&mut ctx);
        or.tick(&mut ctx);
        assert_eq!(ctx.calls, vec![2, 2]);
    }

    #[test]
    fn root_forwards_to_first_child() {
        let mut root = Node::root(
            "root",
            vec![always(0, Status::Running), always(1, Status::Success)],
        );
        let mut ctx = TestContext::new(2);

        assert_eq!(root.tick(&mut ctx), Status::Running);
        assert_eq!(ctx.calls, vec![1, 0]);

        let mut empty: Node<TestContext> = Node::root("empty", Vec::new());
        assert_eq!(empty.tick(&mut ctx), Status::Failure);
    }
}
