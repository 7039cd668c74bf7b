//! Tree nodes.
//!
//! A [`Node`] pairs the data every node carries (name, selection weight)
//! with a boxed [`Behavior`] implementing the variant logic. Nodes own their
//! children exclusively, so a tree is always a strict hierarchy.

use std::fmt;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use strum::EnumString;

use crate::weighted::clamp_weight;
use crate::{Behavior, Fallback, Inverter, Leaf, Root, Selector, Sequence, Status};

/// Node variants, parsed from document tags.
///
/// Several tags map to the same variant; the aliases only document intent
/// in the tree description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
pub enum NodeKind {
    Root,
    #[strum(
        serialize = "If",
        serialize = "WeightedIf",
        serialize = "And",
        serialize = "Sequence",
        serialize = "WeightedSequence"
    )]
    Sequence,
    #[strum(serialize = "Or")]
    Fallback,
    #[strum(serialize = "Not")]
    Inverter,
    #[strum(serialize = "Condition", serialize = "Action", serialize = "WeightedAction")]
    Leaf,
    #[strum(serialize = "Selector", serialize = "WeightedSelector")]
    WeightedSelector,
    #[strum(serialize = "RandomSelector", serialize = "WeightedRandomSelector")]
    RandomSelector,
}

impl NodeKind {
    /// Returns `true` for the two probabilistic selector variants.
    pub fn is_selector(self) -> bool {
        matches!(self, NodeKind::WeightedSelector | NodeKind::RandomSelector)
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NodeKind::Root => "Root",
            NodeKind::Sequence => "Sequence",
            NodeKind::Fallback => "Fallback",
            NodeKind::Inverter => "Inverter",
            NodeKind::Leaf => "Leaf",
            NodeKind::WeightedSelector => "WeightedSelector",
            NodeKind::RandomSelector => "RandomSelector",
        };
        write!(f, "{}", label)
    }
}

/// A single node of a decision tree.
pub struct Node<C> {
    name: String,
    weight: f32,
    behavior: Box<dyn Behavior<C>>,
}

impl<C> Node<C> {
    /// Creates a node with weight 1 around the given behavior.
    pub fn new<B>(name: impl Into<String>, behavior: B) -> Self
    where
        B: Behavior<C> + 'static,
    {
        Self {
            name: name.into(),
            weight: 1.0,
            behavior: Box::new(behavior),
        }
    }

    /// Sets the weight, clamped to `[0, 1]`.
    pub fn with_weight(mut self, weight: f32) -> Self {
        self.set_weight(weight);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Selection weight in `[0, 1]`, only meaningful under a selector.
    pub fn weight(&self) -> f32 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f32) {
        self.weight = clamp_weight(weight);
    }

    pub fn kind(&self) -> NodeKind {
        self.behavior.kind()
    }

    pub fn children(&self) -> &[Node<C>] {
        self.behavior.children()
    }

    pub fn children_mut(&mut self) -> &mut [Node<C>] {
        self.behavior.children_mut()
    }

    /// Appends a child to the right of the existing ones.
    ///
    /// Only used while building. Returns the child back if this variant
    /// cannot own it (leaves, or an inverter that already has its child).
    pub fn append_child(&mut self, child: Node<C>) -> Result<(), Node<C>> {
        self.behavior.append_child(child)
    }

    /// Resume position of a sequence (always 0 for other variants).
    pub fn cursor(&self) -> usize {
        self.behavior.cursor()
    }

    /// Child index a selector is committed to.
    pub fn pending(&self) -> Option<usize> {
        self.behavior.pending()
    }

    /// Evaluates this node for one tick.
    pub fn tick(&mut self, ctx: &mut C) -> Status {
        let status = self.behavior.tick(ctx);
        tracing::trace!(
            "Processing {:?} ({}): {}",
            self.name,
            self.behavior.kind(),
            status
        );
        status
    }

    /// Resets every child (depth-first), then this node's own state.
    pub fn reset(&mut self) {
        for child in self.behavior.children_mut() {
            child.reset();
        }
        self.behavior.reset();
    }

    /// Depth-first search for the first node with the given name.
    pub fn find(&self, name: &str) -> Option<&Node<C>> {
        if self.name == name {
            return Some(self);
        }
        self.children().iter().find_map(|child| child.find(name))
    }

    /// Number of nodes in this subtree, including this one.
    pub fn len(&self) -> usize {
        1 + self.children().iter().map(Node::len).sum::<usize>()
    }

    /// Always `false`: a subtree contains at least its own root.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Shorthand constructors for building trees in code.
impl<C: 'static> Node<C> {
    pub fn root(name: impl Into<String>, children: Vec<Node<C>>) -> Self {
        Self::new(name, Root::new(children))
    }

    pub fn sequence(name: impl Into<String>, children: Vec<Node<C>>) -> Self {
        Self::new(name, Sequence::new(children))
    }

    pub fn fallback(name: impl Into<String>, children: Vec<Node<C>>) -> Self {
        Self::new(name, Fallback::new(children))
    }

    pub fn inverter(name: impl Into<String>, child: Node<C>) -> Self {
        Self::new(name, Inverter::new(child))
    }

    pub fn leaf<F>(name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        Self::new(name, Leaf::from_fn(method))
    }

    /// Selector that squeezes declared weights toward a total of 1.
    pub fn weighted_selector(name: impl Into<String>, seed: u64, children: Vec<Node<C>>) -> Self {
        Self::new(
            name,
            Selector::weighted(children, SmallRng::seed_from_u64(seed)),
        )
    }

    /// Selector that ignores declared weights and picks uniformly.
    pub fn random_selector(name: impl Into<String>, seed: u64, children: Vec<Node<C>>) -> Self {
        Self::new(name, Selector::random(children, SmallRng::seed_from_u64(seed)))
    }
}

impl<C> fmt::Debug for Node<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .field("weight", &self.weight)
            .field("children", &self.children())
            .finish()
    }
}
