//! JSON serialization types for tree output

use std::path::PathBuf;

use serde::Serialize;

/// TreeNode for JSON output - builds the pruned tree in memory.
/// Console output streams through `StreamingWalker` instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum TreeNode {
    File {
        name: String,
        path: PathBuf,
        lines: usize,
    },
    Dir {
        name: String,
        path: PathBuf,
        lines: usize,
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

    pub fn lines(&self) -> usize {
        match self {
            TreeNode::File { lines, .. } | TreeNode::Dir { lines, .. } => *lines,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, TreeNode::Dir { .. })
    }

    pub fn children(&self) -> &[TreeNode] {
        match self {
            TreeNode::Dir { children, .. } => children,
            TreeNode::File { .. } => &[],
        }
    }
}
