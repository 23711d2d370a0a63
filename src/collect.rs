//! Source file discovery
//!
//! The collector walks a directory tree depth-first and records every file
//! whose name ends with the configured extension. Unreadable directories are
//! treated as empty and symlinked directories are never entered, so the walk
//! always terminates.

use std::ffi::OsStr;
use std::path::Path;

use glob::Pattern;

use crate::Result;
use crate::error::LocError;
use crate::file_utils::DirSource;
use crate::index::FileIndex;

/// Case-insensitive file name suffix match, e.g. `.go`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionFilter {
    suffix: String,
}

impl ExtensionFilter {
    /// Create a filter for `ext`; a leading dot is optional.
    pub fn new(ext: &str) -> Self {
        let ext = ext.trim().trim_start_matches('.');
        Self {
            suffix: format!(".{}", ext.to_ascii_lowercase()),
        }
    }

    /// The suffix including its leading dot.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// A name matches when it is longer than the suffix and ends with it,
    /// ignoring ASCII case. A file named exactly `.go` does not match.
    pub fn matches(&self, name: &OsStr) -> bool {
        let name = name.as_encoded_bytes();
        let suffix = self.suffix.as_bytes();
        name.len() > suffix.len() && name[name.len() - suffix.len()..].eq_ignore_ascii_case(suffix)
    }
}

impl Default for ExtensionFilter {
    fn default() -> Self {
        Self::new("go")
    }
}

/// Which directory entries take part in collection and rendering.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    extension: ExtensionFilter,
    ignore: Vec<Pattern>,
}

impl EntryFilter {
    pub fn new(extension: ExtensionFilter) -> Self {
        Self {
            extension,
            ignore: Vec::new(),
        }
    }

    /// Skip entries whose name matches `pattern`.
    pub fn ignore(mut self, pattern: &str) -> Result<Self> {
        let pat = Pattern::new(pattern).map_err(|e| LocError::InvalidGlob {
            pattern: pattern.to_string(),
            message: e.to_string(),
        })?;
        self.ignore.push(pat);
        Ok(self)
    }

    /// Add multiple ignore patterns.
    pub fn ignore_many<S: AsRef<str>>(mut self, patterns: &[S]) -> Result<Self> {
        for pattern in patterns {
            self = self.ignore(pattern.as_ref())?;
        }
        Ok(self)
    }

    pub fn extension(&self) -> &ExtensionFilter {
        &self.extension
    }

    pub fn is_ignored(&self, name: &OsStr) -> bool {
        if self.ignore.is_empty() {
            return false;
        }
        let name = name.to_string_lossy();
        self.ignore.iter().any(|p| p.matches(&name))
    }

    /// A file entry that should be counted.
    pub fn is_source_file(&self, name: &OsStr) -> bool {
        !self.is_ignored(name) && self.extension.matches(name)
    }
}

/// Walks a tree and builds the [`FileIndex`].
pub struct FileCollector<'a, S: DirSource + ?Sized> {
    source: &'a S,
    filter: &'a EntryFilter,
}

impl<'a, S: DirSource + ?Sized> FileCollector<'a, S> {
    pub fn new(source: &'a S, filter: &'a EntryFilter) -> Self {
        Self { source, filter }
    }

    /// Collect all matching files under `root` (any depth).
    pub fn collect(&self, root: &Path) -> FileIndex {
        let mut index = FileIndex::new();
        self.walk(root, &mut index);
        tracing::debug!(root = %root.display(), files = index.len(), "collection finished");
        index
    }

    fn walk(&self, dir: &Path, index: &mut FileIndex) {
        let entries = match self.source.list_entries(dir) {
            Ok(entries) => entries,
            Err(source) => {
                let err = LocError::Traversal {
                    path: dir.to_path_buf(),
                    source,
                };
                tracing::debug!(error = %err, "skipping subtree");
                return;
            }
        };

        for entry in entries {
            if self.filter.is_ignored(&entry.name) {
                continue;
            }

            let path = dir.join(&entry.name);
            if entry.is_dir {
                if entry.is_symlink {
                    tracing::debug!(path = %path.display(), "not following directory symlink");
                    continue;
                }
                self.walk(&path, index);
            } else if self.filter.extension.matches(&entry.name) {
                index.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file_utils::OsDirSource;
    use crate::test_utils::TestTree;

    fn collect_names(tree: &TestTree, filter: &EntryFilter) -> Vec<String> {
        let index = FileCollector::new(&OsDirSource, filter).collect(tree.path());
        let mut names: Vec<String> = index
            .iter()
            .map(|r| {
                r.path
                    .strip_prefix(tree.path())
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect();
        names.sort();
        names
    }

    #[test]
    fn test_extension_filter_case_insensitive() {
        let filter = ExtensionFilter::new("go");
        assert!(filter.matches(OsStr::new("main.go")));
        assert!(filter.matches(OsStr::new("MAIN.GO")));
        assert!(filter.matches(OsStr::new("x.Go")));
        assert!(!filter.matches(OsStr::new("main.golang")));
        assert!(!filter.matches(OsStr::new("maingo")));
        assert!(!filter.matches(OsStr::new("main.rs")));
    }

    #[test]
    fn test_extension_filter_requires_stem() {
        let filter = ExtensionFilter::new(".go");
        assert_eq!(filter.suffix(), ".go");
        assert!(!filter.matches(OsStr::new(".go")));
        assert!(filter.matches(OsStr::new("a.go")));
    }

    #[test]
    fn test_extension_filter_normalizes_input() {
        assert_eq!(ExtensionFilter::new("RS").suffix(), ".rs");
        assert_eq!(ExtensionFilter::new(" .C ").suffix(), ".c");
        assert_eq!(ExtensionFilter::default().suffix(), ".go");
    }

    #[test]
    fn test_ignore_patterns() {
        let filter = EntryFilter::new(ExtensionFilter::new("go"))
            .ignore_many(&["vendor", "*_test.go"])
            .unwrap();
        assert!(filter.is_ignored(OsStr::new("vendor")));
        assert!(filter.is_ignored(OsStr::new("main_test.go")));
        assert!(!filter.is_source_file(OsStr::new("main_test.go")));
        assert!(filter.is_source_file(OsStr::new("main.go")));
    }

    #[test]
    fn test_invalid_ignore_pattern() {
        let err = EntryFilter::default().ignore("[unclosed").unwrap_err();
        assert!(matches!(err, LocError::InvalidGlob { .. }));
        assert!(err.is_fatal());
    }

    #[test]
    fn test_collects_nested_matching_files() {
        let tree = TestTree::new();
        tree.add_file("main.go", "package main\n");
        tree.add_file("pkg/util/strings.go", "package util\n");
        tree.add_file("pkg/README.md", "# docs\n");
        tree.add_file("cmd/tool/Main.GO", "package main\n");
        tree.add_dir("empty");

        let names = collect_names(&tree, &EntryFilter::default());
        assert_eq!(
            names,
            vec!["cmd/tool/Main.GO", "main.go", "pkg/util/strings.go"]
        );
    }

    #[test]
    fn test_collect_skips_ignored_directories() {
        let tree = TestTree::new();
        tree.add_file("main.go", "package main\n");
        tree.add_file("vendor/dep/dep.go", "package dep\n");

        let filter = EntryFilter::default().ignore("vendor").unwrap();
        assert_eq!(collect_names(&tree, &filter), vec!["main.go"]);
    }

    #[test]
    fn test_collect_missing_root_is_empty() {
        let tree = TestTree::new();
        let filter = EntryFilter::default();
        let index =
            FileCollector::new(&OsDirSource, &filter).collect(&tree.path().join("missing"));
        assert!(index.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_collect_does_not_follow_dir_symlinks() {
        let tree = TestTree::new();
        tree.add_file("sub/file.go", "package sub\n");
        std::os::unix::fs::symlink("..", tree.path().join("sub/parent")).unwrap();

        let names = collect_names(&tree, &EntryFilter::default());
        assert_eq!(names, vec!["sub/file.go"]);
    }
}
