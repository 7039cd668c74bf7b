//! Errors raised while building a tree.
//!
//! Every variant carries the offending element's document path, e.g.
//! `Root/Sequence[0]/Condition[1]`, so mismatches between a description and
//! its behavior provider can be located directly.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BuildError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum BuildError {
    #[error("tree description must start with a <Root> element, found <{found}>")]
    MissingRoot { found: String },

    #[error("unrecognized element <{tag}> at {path}")]
    UnknownTag { tag: String, path: String },

    #[error("<{tag}> at {path} has no `method` attribute")]
    MissingMethod { tag: String, path: String },

    #[error("method `{method}` used by <{tag}> at {path} is not provided by the behavior provider")]
    UnknownMethod {
        method: String,
        tag: String,
        path: String,
    },

    #[error("weight `{value}` of <{tag}> at {path} is not a number")]
    InvalidWeight {
        value: String,
        tag: String,
        path: String,
    },

    #[error("<{parent}> cannot own another child, rejected <{tag}> at {path}")]
    ChildRejected {
        parent: String,
        tag: String,
        path: String,
    },
}
