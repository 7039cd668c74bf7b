//! Probabilistic selectors.
//!
//! A [`Selector`] commits to one randomly drawn child per run and keeps
//! ticking that child until it succeeds. The two variants differ only in how
//! the children's weights are normalized before the draw.

use rand::rngs::SmallRng;

use crate::weighted::{self, WeightedElement};
use crate::{Behavior, Node, NodeKind, Status};

/// How a selector normalizes its children's weights before drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Normalization {
    /// Squeeze declared weights toward a total of 1, keeping their order.
    Squeeze,
    /// Ignore declared weights; every child gets `1 / count`.
    Even,
}

impl Normalization {
    pub fn apply<T>(self, list: &mut [WeightedElement<T>]) {
        match self {
            Normalization::Squeeze => weighted::squeeze_weights(list),
            Normalization::Even => weighted::even_out(list),
        }
    }
}

/// Picks exactly one child per run.
///
/// # Semantics
///
/// - With no pending child, the children's weights are normalized (and
///   written back to the children) and one child is drawn
/// - The pending child is ticked and its status returned
/// - Only `Success` clears the pending child; after `Running` or `Failure`
///   the same child is ticked again next time
/// - Without children, the selector returns `Failure`
pub struct Selector<C> {
    normalization: Normalization,
    children: Vec<Node<C>>,
    pending: Option<usize>,
    rng: SmallRng,
}

impl<C> Selector<C> {
    pub fn new(normalization: Normalization, children: Vec<Node<C>>, rng: SmallRng) -> Self {
        Self {
            normalization,
            children,
            pending: None,
            rng,
        }
    }

    /// Selector using [`Normalization::Squeeze`].
    pub fn weighted(children: Vec<Node<C>>, rng: SmallRng) -> Self {
        Self::new(Normalization::Squeeze, children, rng)
    }

    /// Selector using [`Normalization::Even`].
    pub fn random(children: Vec<Node<C>>, rng: SmallRng) -> Self {
        Self::new(Normalization::Even, children, rng)
    }

    pub fn normalization(&self) -> Normalization {
        self.normalization
    }

    fn draw(&mut self) -> Option<usize> {
        let mut list: Vec<WeightedElement<usize>> = self
            .children
            .iter()
            .enumerate()
            .map(|(index, child)| WeightedElement::new(index, child.weight()))
            .collect();

        self.normalization.apply(&mut list);
        for entry in &list {
            self.children[entry.element].set_weight(entry.weight);
        }

        weighted::pick(&mut self.rng, &list).copied()
    }
}

impl<C> Behavior<C> for Selector<C> {
    fn tick(&mut self, ctx: &mut C) -> Status {
        let index = match self.pending {
            Some(index) => index,
            None => match self.draw() {
                Some(index) => {
                    self.pending = Some(index);
                    index
                }
                None => return Status::Failure,
            },
        };

        let status = self.children[index].tick(ctx);
        if status.is_success() {
            self.pending = None;
        }
        status
    }

    fn reset(&mut self) {
        self.pending = None;
    }

    fn kind(&self) -> NodeKind {
        match self.normalization {
            Normalization::Squeeze => NodeKind::WeightedSelector,
            Normalization::Even => NodeKind::RandomSelector,
        }
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

    fn pending(&self) -> Option<usize> {
        self.pending
    }
}
