//! Directory tree walking logic
//!
//! This module provides the traversal half of rendering:
//!
//! - `EntryLister`: lists one directory through a `DirSource`, filtered and sorted
//! - `StreamingWalker`: walks depth-first and streams every entry to a `StreamingOutput`
//! - `TreeBuilder`: a `StreamingOutput` that keeps the walked tree as `TreeNode`s

mod builder;
mod config;
mod filter;
mod lister;
mod node;
mod source;
mod state;
mod streaming;
mod utils;

// Re-export public types
pub use builder::TreeBuilder;
pub use config::WalkerConfig;
pub use filter::{HIDDEN_MARKER, NameFilter};
pub use lister::{Entry, EntryLister, compare_entries, sort_entries};
pub use node::TreeNode;
pub use source::{DirSource, EntryKind, OsDirSource, RawEntry};
pub use state::TraversalState;
pub use streaming::{StreamingOutput, StreamingWalker};
pub use utils::resolve_root;
