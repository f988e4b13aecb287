//! Twig - print a directory as an indented tree

pub mod error;
pub mod logging;
pub mod output;
pub mod summary;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, StreamingFormatter, TreeFormatter, TreeStyle};
pub use summary::{RunSummary, WalkReport};
pub use tree::{
    DirSource, Entry, EntryLister, OsDirSource, StreamingOutput, StreamingWalker,
    TraversalState, TreeBuilder, TreeNode, WalkerConfig, resolve_root,
};
