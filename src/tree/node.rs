//! In-memory tree structure

use std::path::{Path, PathBuf};

use crate::summary::RunSummary;

/// One entry of a built tree. Directory children are in render order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
    },
    Dir {
        name: String,
        path: PathBuf,
        children: Vec<TreeNode>,
    },
}

impl TreeNode {
    pub fn name(&self) -> &str {
        match self {
            TreeNode::File { name, .. } => name,
            TreeNode::Dir { name, .. } => name,
        }
    }

    pub fn path(&self) -> &Path {
        match self {
            TreeNode::File { path, .. } => path,
            TreeNode::Dir { path, .. } => path,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    /// Children in render order; always empty for files.
    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::File { .. } => &[],
            TreeNode::Dir { children, .. } => children,
        }
    }

    /// Count every descendant of this node, excluding the node itself.
    pub fn summary(&self) -> RunSummary {
        let mut summary = RunSummary::new();
        self.count_into(&mut summary);
        summary
    }

    fn count_into(&self, summary: &mut RunSummary) {
        for child in self.children() {
            if child.is_dir() {
                summary.record_directory();
                child.count_into(summary);
            } else {
                summary.record_file();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(name: &str) -> TreeNode {
        TreeNode::File {
            name: name.to_string(),
            path: PathBuf::from(name),
        }
    }

    fn dir(name: &str, children: Vec<TreeNode>) -> TreeNode {
        TreeNode::Dir {
            name: name.to_string(),
            path: PathBuf::from(name),
            children,
        }
    }

    #[test]
    fn test_accessors() {
        let node = dir("src", vec![file("main.rs")]);
        assert_eq!(node.name(), "src");
        assert_eq!(node.path(), Path::new("src"));
        assert!(node.is_dir());
        assert_eq!(node.children().len(), 1);
        assert!(file("a").children().is_empty());
    }

    #[test]
    fn test_summary_counts_nested_entries() {
        let tree = dir(
            "root",
            vec![
                file("a.txt"),
                dir("alpha", vec![file("x.txt"), dir("empty", vec![])]),
                dir("zeta", vec![]),
            ],
        );

        let summary = tree.summary();
        assert_eq!(summary.directories, 3);
        assert_eq!(summary.files, 2);
    }
}
