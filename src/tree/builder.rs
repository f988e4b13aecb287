//! TreeBuilder - assembles streamed traversal events into a `TreeNode`

use std::io;
use std::path::{Path, PathBuf};

use crate::error::TreeError;
use crate::summary::RunSummary;

use super::lister::Entry;
use super::node::TreeNode;
use super::state::TraversalState;
use super::streaming::StreamingOutput;

/// A directory whose children are still arriving.
#[derive(Debug)]
struct OpenDir {
    name: String,
    path: PathBuf,
    children: Vec<TreeNode>,
}

impl OpenDir {
    fn new(name: String, path: PathBuf) -> Self {
        Self {
            name,
            path,
            children: Vec::new(),
        }
    }

    fn into_node(self) -> TreeNode {
        TreeNode::Dir {
            name: self.name,
            path: self.path,
            children: self.children,
        }
    }
}

/// `StreamingOutput` that builds the walked tree in memory.
///
/// Events arrive in pre-order, so the chain of open directories always
/// matches the ancestor chain of the next entry. Reported errors are kept
/// as messages.
#[derive(Debug, Default)]
pub struct TreeBuilder {
    open: Vec<OpenDir>,
    root: Option<TreeNode>,
    errors: Vec<String>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The tree of the last completed walk.
    pub fn into_tree(self) -> Option<TreeNode> {
        self.root
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Close open directories until `len` remain, attaching each closed
    /// directory to its parent.
    fn close_to(&mut self, len: usize) {
        while self.open.len() > len {
            let Some(dir) = self.open.pop() else { break };
            let node = dir.into_node();
            match self.open.last_mut() {
                Some(parent) => parent.children.push(node),
                None => self.root = Some(node),
            }
        }
    }
}

impl StreamingOutput for TreeBuilder {
    fn output_root(&mut self, root: &Path) -> io::Result<()> {
        self.open.clear();
        self.root = None;
        self.open
            .push(OpenDir::new(root.display().to_string(), root.to_path_buf()));
        Ok(())
    }

    fn output_entry(
        &mut self,
        entry: &Entry,
        _is_last: bool,
        state: &TraversalState,
    ) -> io::Result<()> {
        // The parent of an entry at depth d is the (d + 1)th open directory
        self.close_to(state.depth() + 1);
        if self.open.is_empty() {
            return Ok(());
        }

        if entry.is_dir {
            self.open
                .push(OpenDir::new(entry.name.clone(), entry.path.clone()));
        } else if let Some(parent) = self.open.last_mut() {
            parent.children.push(TreeNode::File {
                name: entry.name.clone(),
                path: entry.path.clone(),
            });
        }
        Ok(())
    }

    fn report_error(&mut self, error: &TreeError) -> io::Result<()> {
        self.errors.push(error.to_string());
        Ok(())
    }

    fn finish(&mut self, _summary: &RunSummary) -> io::Result<()> {
        self.close_to(0);
        Ok(())
    }
}
