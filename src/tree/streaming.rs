//! StreamingWalker - renders the tree without building it in memory

use std::io;
use std::path::Path;

use crate::collect::EntryFilter;
use crate::file_utils::{DirSource, display_basename};
use crate::index::FileIndex;

use super::utils::visible_children;

/// Callback for streaming output - receives node information for display.
pub trait StreamingOutput {
    /// Called once before the first node with the number of indexed files.
    fn begin(&mut self, total_files: usize) -> io::Result<()>;

    fn output_node(
        &mut self,
        name: &str,
        lines: usize,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()>;

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()>;
}

/// Continuation prefix for the children of a node.
pub fn continuation_prefix(prefix: &str, is_last: bool) -> String {
    if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    }
}

/// Streaming tree walker that outputs directly without building tree in memory.
/// Uses O(depth) memory for the tree structure.
pub struct StreamingWalker<'a, S: DirSource + ?Sized> {
    source: &'a S,
    index: &'a FileIndex,
    filter: &'a EntryFilter,
}

impl<'a, S: DirSource + ?Sized> StreamingWalker<'a, S> {
    pub fn new(source: &'a S, index: &'a FileIndex, filter: &'a EntryFilter) -> Self {
        Self {
            source,
            index,
            filter,
        }
    }

    /// Walk and stream output - returns (dir_count, file_count) rendered,
    /// the root included in the directory count.
    pub fn walk_streaming<O: StreamingOutput>(
        &self,
        root: &Path,
        output: &mut O,
    ) -> io::Result<(usize, usize)> {
        output.begin(self.index.len())?;

        let mut counts = (0, 0);
        let name = display_basename(root);
        self.render_dir(root, &name, "", true, true, output, &mut counts)?;

        output.finish(counts.0, counts.1)?;
        Ok(counts)
    }

    /// A directory that can no longer be listed still prints its own line
    /// (its subtotal comes from the index) but renders no children.
    #[allow(clippy::too_many_arguments)]
    fn render_dir<O: StreamingOutput>(
        &self,
        dir: &Path,
        name: &str,
        prefix: &str,
        is_last: bool,
        is_root: bool,
        output: &mut O,
        counts: &mut (usize, usize),
    ) -> io::Result<()> {
        let lines = self.index.subtotal(dir);
        if lines == 0 {
            return Ok(());
        }

        output.output_node(name, lines, true, is_last, prefix, is_root)?;
        counts.0 += 1;

        // A directory that disappeared after collection keeps its own line
        let Some(children) = visible_children(self.source, self.index, self.filter, dir) else {
            return Ok(());
        };

        let child_prefix = continuation_prefix(prefix, is_last);
        let last = children.len().saturating_sub(1);

        for (i, child) in children.iter().enumerate() {
            let child_is_last = i == last;
            if child.is_dir {
                self.render_dir(
                    &child.path,
                    &child.name,
                    &child_prefix,
                    child_is_last,
                    false,
                    output,
                    counts,
                )?;
            } else {
                output.output_node(
                    &child.name,
                    child.lines,
                    false,
                    child_is_last,
                    &child_prefix,
                    false,
                )?;
                counts.1 += 1;
            }
        }

        Ok(())
    }
}
