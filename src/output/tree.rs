//! Tree formatter for buffered output
//!
//! This module provides `TreeFormatter` which formats a complete `TreeNode`
//! tree structure into a string.

use crate::tree::{TraversalState, TreeNode};

use super::style::TreeStyle;

/// Formatter for an already-built tree. Produces the same text as the
/// streaming formatter does without colour.
#[derive(Debug, Clone, Default)]
pub struct TreeFormatter {
    style: TreeStyle,
}

impl TreeFormatter {
    pub fn new(style: TreeStyle) -> Self {
        Self { style }
    }

    pub fn format(&self, node: &TreeNode) -> String {
        let mut output = String::new();
        output.push_str(node.name());
        output.push('\n');
        self.format_children(node.children(), &TraversalState::root(), &mut output);
        output.push_str(&format!("\n{}\n", node.summary()));
        output
    }

    fn format_children(&self, children: &[TreeNode], state: &TraversalState, output: &mut String) {
        let total = children.len();
        for (i, child) in children.iter().enumerate() {
            let is_last = i + 1 == total;
            output.push_str(&self.style.indent(state));
            output.push_str(self.style.connector(is_last));
            output.push_str(child.name());
            output.push('\n');

            if child.is_dir() {
                self.format_children(child.children(), &state.child(is_last), output);
            }
        }
    }
}
