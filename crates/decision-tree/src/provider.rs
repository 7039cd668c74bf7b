//! Behavior providers.
//!
//! Leaves in a tree description name the condition or action they run with a
//! `method` attribute. A [`BehaviorProvider`] resolves those names to
//! functions while the tree is built.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::{LeafFn, Status};

/// Resolves leaf method names to functions.
pub trait BehaviorProvider<C> {
    /// Returns the function registered under `method`, if any.
    fn resolve(&self, method: &str) -> Option<LeafFn<C>>;
}

/// Name-to-function lookup table.
///
/// # Example
///
/// ```rust,ignore
/// let provider = BehaviorRegistry::new()
///     .with("enemy_visible", |npc: &mut Npc| npc.sees_enemy().into())
///     .with("attack", |npc: &mut Npc| npc.attack());
/// ```
pub struct BehaviorRegistry<C> {
    methods: HashMap<String, LeafFn<C>>,
}

impl<C> BehaviorRegistry<C> {
    pub fn new() -> Self {
        Self {
            methods: HashMap::new(),
        }
    }

    /// Registers a method, replacing any previous one with the same name.
    pub fn register<F>(&mut self, name: impl Into<String>, method: F) -> &mut Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        self.methods.insert(name.into(), Arc::new(method));
        self
    }

    /// Builder-style variant of [`register`](Self::register).
    pub fn with<F>(mut self, name: impl Into<String>, method: F) -> Self
    where
        F: Fn(&mut C) -> Status + Send + Sync + 'static,
    {
        self.register(name, method);
        self
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    /// Returns an iterator over all registered method names.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.methods.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }
}

impl<C> Default for BehaviorRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> BehaviorProvider<C> for BehaviorRegistry<C> {
    fn resolve(&self, method: &str) -> Option<LeafFn<C>> {
        self.methods.get(method).cloned()
    }
}

impl<C> fmt::Debug for BehaviorRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("BehaviorRegistry")
            .field("methods", &names)
            .finish()
    }
}
