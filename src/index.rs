//! Collected files, their line counts and per-directory subtotals
//!
//! The index is filled once by the collector, its counts are set once by the
//! scanner, and from then on it is only queried. Directory subtotals are not
//! stored: every query walks the records again, so results always agree with
//! the current counts.

use std::collections::HashSet;
use std::path::{Path, PathBuf, is_separator};

/// One collected source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub line_count: usize,
}

/// Collected files in discovery order.
#[derive(Debug, Default, Clone)]
pub struct FileIndex {
    records: Vec<FileRecord>,
    seen: HashSet<PathBuf>,
}

/// `path` equals `dir` or lies anywhere beneath it, ignoring ASCII case.
///
/// The byte after the matched prefix must be a separator (or the end), so
/// `/src/foobar/x.go` is not inside `/src/foo`.
fn is_within(path: &Path, dir: &Path) -> bool {
    let path = path.as_os_str().as_encoded_bytes();
    let dir = dir.as_os_str().as_encoded_bytes();

    if path.len() < dir.len() || !path[..dir.len()].eq_ignore_ascii_case(dir) {
        return false;
    }
    match path.get(dir.len()) {
        None => true,
        Some(&next) => {
            is_separator(next as char) || dir.last().is_some_and(|&b| is_separator(b as char))
        }
    }
}

impl FileIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a file with a zero count. Returns `false` if the path was
    /// already present.
    pub fn push(&mut self, path: PathBuf) -> bool {
        if !self.seen.insert(path.clone()) {
            return false;
        }
        self.records.push(FileRecord {
            path,
            line_count: 0,
        });
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter()
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Set the line count of the record at `idx`.
    pub fn set_line_count(&mut self, idx: usize, lines: usize) {
        if let Some(record) = self.records.get_mut(idx) {
            record.line_count = lines;
        }
    }

    /// Sum of all line counts.
    pub fn total_lines(&self) -> usize {
        self.records.iter().map(|r| r.line_count).sum()
    }

    /// Sum of line counts of every file at or below `dir`.
    pub fn subtotal(&self, dir: &Path) -> usize {
        self.records
            .iter()
            .filter(|r| is_within(&r.path, dir))
            .map(|r| r.line_count)
            .sum()
    }

    /// Whether anything under `dir` has a positive line count.
    pub fn has_contributor(&self, dir: &Path) -> bool {
        self.subtotal(dir) > 0
    }

    /// Line count of the file at `path`, compared ignoring ASCII case.
    pub fn line_count_of(&self, path: &Path) -> Option<usize> {
        let wanted = path.as_os_str().as_encoded_bytes();
        self.records
            .iter()
            .find(|r| r.path.as_os_str().as_encoded_bytes().eq_ignore_ascii_case(wanted))
            .map(|r| r.line_count)
    }
}
