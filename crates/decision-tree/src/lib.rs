//! Tick-driven decision tree engine for game agents.
//!
//! Trees are described declaratively as nested tagged elements, built once
//! against a provider of named conditions and actions, and then evaluated
//! incrementally: one tick per game frame, resuming where they left off, until
//! they report a verdict.
//!
//! - **Running state**: Actions may span several ticks
//! - **Resumable nodes**: Sequences and selectors keep their place across ticks
//! - **Probabilistic selection**: Selectors commit to one weighted child per run
//! - **Seedable**: Every random draw derives from an optional seed
//!
//! # Architecture
//!
//! - [`Node`]: Name, weight and a boxed [`Behavior`]
//! - [`Status`]: Success, Running or Failure
//! - Composite nodes: [`Root`], [`Sequence`], [`Fallback`]
//! - Decorator nodes: [`Inverter`]
//! - Leaf nodes: [`Leaf`], bound through a [`BehaviorProvider`]
//! - Selector nodes: [`Selector`] with [`Normalization::Squeeze`] or [`Normalization::Even`]
//! - [`TreeBuilder`]: [`Element`] document → [`DecisionTree`]
//! - [`Processor`]: Drives a tree forever, one tick at a time

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod decorator;
pub mod document;
pub mod error;
pub mod leaf;
pub mod node;
pub mod processor;
pub mod provider;
pub mod selector;
pub mod status;
pub mod tree;
pub mod weighted;

#[cfg(feature = "loaders")]
pub mod loaders;

// Re-export core types for ergonomic API
pub use behavior::Behavior;
pub use builder::{BuildOptions, TreeBuilder, UnknownTagPolicy, create_tree};
pub use composite::{Fallback, Root, Sequence};
pub use decorator::Inverter;
pub use document::{AttrValue, Element};
pub use error::BuildError;
pub use leaf::{Leaf, LeafFn};
pub use node::{Node, NodeKind};
pub use processor::{Processor, start_processing};
pub use provider::{BehaviorProvider, BehaviorRegistry};
pub use selector::{Normalization, Selector};
pub use status::Status;
pub use tree::DecisionTree;
pub use weighted::WeightedElement;

#[cfg(feature = "loaders")]
pub use loaders::{DocumentLoader, LoadResult, load_tree};
