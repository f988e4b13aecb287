//! Configuration types for tree walkers

/// Configuration for tree walking behavior.
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// List entries whose name starts with the hidden marker
    pub show_hidden: bool,
    /// Descend at most this many levels; root's children are level 1
    pub max_depth: Option<usize>,
    pub dirs_only: bool,
    /// Descend into symbolic links that point at directories
    pub follow_links: bool,
    pub ignore_patterns: Vec<String>,
}

impl WalkerConfig {
    /// Check if children of a directory listed at `depth` should be visited.
    ///
    /// `depth` is the traversal depth of the directory entry itself, so the
    /// root's children sit at depth 0 and level 1.
    pub fn should_descend(&self, depth: usize) -> bool {
        self.max_depth.is_none_or(|max| depth + 1 < max)
    }
}
