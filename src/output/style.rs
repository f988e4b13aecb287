//! Connector and indent glyphs

use crate::tree::TraversalState;

/// The glyph set used to draw a tree.
///
/// All four strings must have the same display width so that children line
/// up under their parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TreeStyle {
    /// Connector for an entry with later siblings
    pub branch: &'static str,
    /// Connector for the last entry of a directory
    pub last_branch: &'static str,
    /// Indent segment under an ancestor with later siblings
    pub vertical: &'static str,
    /// Indent segment under an ancestor that was last
    pub blank: &'static str,
}

impl TreeStyle {
    pub const UNICODE: TreeStyle = TreeStyle {
        branch: "├── ",
        last_branch: "└── ",
        vertical: "│   ",
        blank: "    ",
    };

    pub const ASCII: TreeStyle = TreeStyle {
        branch: "|-- ",
        last_branch: "`-- ",
        vertical: "|   ",
        blank: "    ",
    };

    pub fn connector(&self, is_last: bool) -> &'static str {
        if is_last {
            self.last_branch
        } else {
            self.branch
        }
    }

    /// Indent segment contributed by one ancestor level.
    pub fn segment(&self, ancestor_is_last: bool) -> &'static str {
        if ancestor_is_last {
            self.blank
        } else {
            self.vertical
        }
    }

    /// Indent prefix for an entry: one segment per ancestor, root-nearest
    /// first, and nothing else.
    pub fn indent(&self, state: &TraversalState) -> String {
        state
            .ancestors()
            .iter()
            .map(|&is_last| self.segment(is_last))
            .collect()
    }
}

impl Default for TreeStyle {
    fn default() -> Self {
        Self::UNICODE
    }
}
