//! Builds decision trees from tree descriptions.
//!
//! The [`TreeBuilder`] walks an [`Element`] document depth-first, creates the
//! node variant matching each tag, binds leaves to functions from a
//! [`BehaviorProvider`], and appends every child to its parent once the
//! child's own subtree is complete.
//!
//! # Example
//!
//! ```rust,ignore
//! let document = Element::new("Root").attr("name", "guard").child(
//!     Element::new("Sequence")
//!         .child(Element::new("Condition").attr("method", "enemy_visible"))
//!         .child(Element::new("Action").attr("method", "attack")),
//! );
//! let tree = TreeBuilder::new().build(&document, &provider)?;
//! ```

use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::error::{BuildError, Result};
use crate::{
    BehaviorProvider, DecisionTree, Element, Fallback, Inverter, Leaf, LeafFn, Node, NodeKind,
    Root, Selector, Sequence,
};

const ROOT_TAG: &str = "Root";
const NAME_ATTR: &str = "name";
const METHOD_ATTR: &str = "method";
const WEIGHT_ATTR: &str = "weight";

/// What to do with an element whose tag matches no node variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnknownTagPolicy {
    /// Fail the build with [`BuildError::UnknownTag`].
    #[default]
    Reject,
    /// Drop the element and its whole subtree, logging a warning.
    Skip,
}

/// Tree construction options.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BuildOptions {
    /// Seed for every selector's random source. `None` draws from OS entropy.
    pub seed: Option<u64>,
    pub unknown_tags: UnknownTagPolicy,
}

impl BuildOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes selector draws reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_unknown_tags(mut self, policy: UnknownTagPolicy) -> Self {
        self.unknown_tags = policy;
        self
    }
}

/// Turns tree descriptions into [`DecisionTree`]s.
///
/// Each selector receives its own random source, derived from the builder's
/// seeded source, so two builders with the same seed produce trees that make
/// the same draws.
#[derive(Debug)]
pub struct TreeBuilder {
    options: BuildOptions,
    rng: SmallRng,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_options(BuildOptions::default())
    }

    pub fn with_options(options: BuildOptions) -> Self {
        let rng = match options.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };
        Self { options, rng }
    }

    pub fn options(&self) -> &BuildOptions {
        &self.options
    }

    /// Builds a tree from a document whose top element is `<Root>`.
    ///
    /// # Errors
    ///
    /// Fails on the first element that cannot be turned into a node: an
    /// unknown tag (under [`UnknownTagPolicy::Reject`]), a leaf without a
    /// `method` or with a method the provider does not know, a non-numeric
    /// `weight`, or a child its parent cannot own.
    pub fn build<C, P>(&mut self, document: &Element, provider: &P) -> Result<DecisionTree<C>>
    where
        C: 'static,
        P: BehaviorProvider<C> + ?Sized,
    {
        if document.tag != ROOT_TAG {
            return Err(BuildError::MissingRoot {
                found: document.tag.clone(),
            });
        }

        let root = self.append_tree_node(document, provider, ROOT_TAG)?;
        let tree = DecisionTree::new(root).map_err(|node| BuildError::MissingRoot {
            found: node.kind().to_string(),
        })?;

        tracing::debug!(
            "Built decision tree {:?} ({} nodes)",
            tree.name(),
            tree.len()
        );
        Ok(tree)
    }

    /// Creates the node for `element`, then builds and appends its children.
    fn append_tree_node<C, P>(
        &mut self,
        element: &Element,
        provider: &P,
        path: &str,
    ) -> Result<Node<C>>
    where
        C: 'static,
        P: BehaviorProvider<C> + ?Sized,
    {
        let kind = element
            .tag
            .parse::<NodeKind>()
            .map_err(|_| BuildError::UnknownTag {
                tag: element.tag.clone(),
                path: path.to_owned(),
            })?;
        let mut node = self.create_node(kind, element, provider, path)?;

        for (index, child) in element.children.iter().enumerate() {
            let child_path = format!("{}/{}[{}]", path, child.tag, index);

            if self.options.unknown_tags == UnknownTagPolicy::Skip
                && child.tag.parse::<NodeKind>().is_err()
            {
                tracing::warn!(
                    "Skipping unrecognized element <{}> at {} and its subtree",
                    child.tag,
                    child_path
                );
                continue;
            }

            let child_node = self.append_tree_node(child, provider, &child_path)?;
            node.append_child(child_node)
                .map_err(|_| BuildError::ChildRejected {
                    parent: element.tag.clone(),
                    tag: child.tag.clone(),
                    path: child_path,
                })?;
        }

        Ok(node)
    }

    fn create_node<C, P>(
        &mut self,
        kind: NodeKind,
        element: &Element,
        provider: &P,
        path: &str,
    ) -> Result<Node<C>>
    where
        C: 'static,
        P: BehaviorProvider<C> + ?Sized,
    {
        let name = element.str_attr(NAME_ATTR).unwrap_or(&element.tag).to_owned();
        let weight = read_weight(element, path)?;

        let node = match kind {
            NodeKind::Root => Node::new(name, Root::new(Vec::new())),
            NodeKind::Sequence => Node::new(name, Sequence::new(Vec::new())),
            NodeKind::Fallback => Node::new(name, Fallback::new(Vec::new())),
            NodeKind::Inverter => Node::new(name, Inverter::empty()),
            NodeKind::Leaf => {
                let method = resolve_method(element, provider, path)?;
                Node::new(name, Leaf::new(method))
            }
            NodeKind::WeightedSelector => {
                Node::new(name, Selector::weighted(Vec::new(), self.selector_rng()))
            }
            NodeKind::RandomSelector => {
                Node::new(name, Selector::random(Vec::new(), self.selector_rng()))
            }
        };

        Ok(node.with_weight(weight))
    }

    fn selector_rng(&mut self) -> SmallRng {
        SmallRng::seed_from_u64(self.rng.next_u64())
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a tree with default [`BuildOptions`].
pub fn create_tree<C, P>(document: &Element, provider: &P) -> Result<DecisionTree<C>>
where
    C: 'static,
    P: BehaviorProvider<C> + ?Sized,
{
    TreeBuilder::new().build(document, provider)
}

fn read_weight(element: &Element, path: &str) -> Result<f32> {
    let Some(value) = element.get(WEIGHT_ATTR) else {
        return Ok(1.0);
    };

    value
        .as_number()
        .map(|weight| weight as f32)
        .ok_or_else(|| BuildError::InvalidWeight {
            value: value.to_string(),
            tag: element.tag.clone(),
            path: path.to_owned(),
        })
}

fn resolve_method<C, P>(element: &Element, provider: &P, path: &str) -> Result<LeafFn<C>>
where
    P: BehaviorProvider<C> + ?Sized,
{
    let method = element
        .str_attr(METHOD_ATTR)
        .ok_or_else(|| BuildError::MissingMethod {
            tag: element.tag.clone(),
            path: path.to_owned(),
        })?;

    provider
        .resolve(method)
        .ok_or_else(|| BuildError::UnknownMethod {
            method: method.to_owned(),
            tag: element.tag.clone(),
            path: path.to_owned(),
        })
}
