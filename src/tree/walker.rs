//! TreeWalker - builds the full pruned tree in memory for JSON output

use std::path::Path;

use crate::collect::EntryFilter;
use crate::file_utils::{DirSource, display_basename};
use crate::index::FileIndex;

use super::json_types::TreeNode;
use super::utils::visible_children;

/// Tree walker that builds the full tree in memory.
/// Required for JSON output serialization.
/// For console output, use StreamingWalker instead.
pub struct TreeWalker<'a, S: DirSource + ?Sized> {
    source: &'a S,
    index: &'a FileIndex,
    filter: &'a EntryFilter,
}

impl<'a, S: DirSource + ?Sized> TreeWalker<'a, S> {
    pub fn new(source: &'a S, index: &'a FileIndex, filter: &'a EntryFilter) -> Self {
        Self {
            source,
            index,
            filter,
        }
    }

    /// Build the tree rooted at `root`, or `None` when nothing under it counts.
    pub fn walk(&self, root: &Path) -> Option<TreeNode> {
        let lines = self.index.subtotal(root);
        if lines == 0 {
            return None;
        }
        Some(self.walk_dir(root, display_basename(root), lines))
    }

    fn walk_dir(&self, path: &Path, name: String, lines: usize) -> TreeNode {
        let children = visible_children(self.source, self.index, self.filter, path)
            .unwrap_or_default()
            .into_iter()
            .map(|child| {
                if child.is_dir {
                    self.walk_dir(&child.path, child.name, child.lines)
                } else {
                    TreeNode::File {
                        name: child.name,
                        path: child.path,
                        lines: child.lines,
                    }
                }
            })
            .collect();

        TreeNode::Dir {
            name,
            path: path.to_path_buf(),
            lines,
            children,
        }
    }
}
