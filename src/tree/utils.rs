//! Shared utility functions for tree walking

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use crate::collect::EntryFilter;
use crate::file_utils::{DirEntry, DirSource};
use crate::index::FileIndex;

/// A child that survived pruning, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisibleChild {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Subtotal for directories, own count for files
    pub lines: usize,
}

/// Compare two names ignoring ASCII case.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_lowercase())
        .cmp(b.bytes().map(|c| c.to_ascii_lowercase()))
}

/// Sort entries by name ignoring case. Equal names keep enumeration order.
pub fn sort_entries(entries: &mut [DirEntry]) {
    entries.sort_by(|a, b| compare_names(&a.name.to_string_lossy(), &b.name.to_string_lossy()));
}

/// List, sort and prune the children of `dir`.
///
/// Returns `None` if the directory cannot be listed. Non-matching files and
/// ignored entries are dropped, directories with a zero subtotal are pruned,
/// matching files are always kept.
pub fn visible_children<S: DirSource + ?Sized>(
    source: &S,
    index: &FileIndex,
    filter: &EntryFilter,
    dir: &Path,
) -> Option<Vec<VisibleChild>> {
    let mut entries = match source.list_entries(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(path = %dir.display(), error = %e, "cannot list directory while rendering");
            return None;
        }
    };
    sort_entries(&mut entries);

    let children = entries
        .into_iter()
        .filter(|entry| !filter.is_ignored(&entry.name))
        .filter_map(|entry| {
            let path = dir.join(&entry.name);
            let lines = if entry.is_dir {
                let subtotal = index.subtotal(&path);
                if subtotal == 0 {
                    return None;
                }
                subtotal
            } else if filter.extension().matches(&entry.name) {
                index.line_count_of(&path).unwrap_or(0)
            } else {
                return None;
            };
            Some(VisibleChild {
                name: entry.display_name(),
                path,
                is_dir: entry.is_dir,
                lines,
            })
        })
        .collect();

    Some(children)
}
