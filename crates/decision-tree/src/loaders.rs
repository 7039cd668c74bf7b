//! Loaders for tree descriptions stored as RON.
//!
//! A document is a nested [`Element`]:
//!
//! ```ron
//! (
//!     tag: "Root",
//!     attributes: { "name": "guard" },
//!     children: [
//!         (tag: "Sequence", children: [
//!             (tag: "Condition", attributes: { "method": "enemy_visible" }),
//!             (tag: "Action", attributes: { "method": "attack", "weight": 0.5 }),
//!         ]),
//!     ],
//! )
//! ```

use std::path::Path;

use crate::{BehaviorProvider, BuildOptions, DecisionTree, Element, TreeBuilder};

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Loader for tree descriptions.
pub struct DocumentLoader;

impl DocumentLoader {
    /// Parse a document from RON text.
    pub fn parse(source: &str) -> LoadResult<Element> {
        ron::from_str(source).map_err(|e| anyhow::anyhow!("Failed to parse tree RON: {}", e))
    }

    /// Load a document from a RON file.
    pub fn load(path: &Path) -> LoadResult<Element> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))?;
        Self::parse(&content)
    }
}

/// Load a document from a RON file and build it into a tree.
pub fn load_tree<C, P>(
    path: &Path,
    provider: &P,
    options: BuildOptions,
) -> LoadResult<DecisionTree<C>>
where
    C: 'static,
    P: BehaviorProvider<C> + ?Sized,
{
    let document = DocumentLoader::load(path)?;
    let tree = TreeBuilder::with_options(options)
        .build(&document, provider)
        .map_err(|e| anyhow::anyhow!("Failed to build tree from {}: {}", path.display(), e))?;
    Ok(tree)
}
