//! Treeloc - counts non-comment source lines and shows them as a directory tree
//!
//! The pipeline runs in three phases:
//!
//! 1. [`FileCollector`] walks the root and fills a [`FileIndex`] with every
//!    file whose name ends in the chosen extension.
//! 2. [`Scanner`] reads each file, removes comments and literal contents with
//!    [`strip_comments`], and stores the count of non-blank lines.
//! 3. [`StreamingWalker`] (console) or [`TreeWalker`] (JSON) renders the tree,
//!    pruning directories whose subtotal is zero.
//!
//! ```
//! let stripped = treeloc::strip_comments(b"a // note\nb\n");
//! assert_eq!(treeloc::count_non_blank_lines(&stripped), 2);
//! ```

pub mod collect;
pub mod error;
pub mod file_utils;
pub mod index;
pub mod lines;
pub mod output;
pub mod scan;
pub mod strip;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use collect::{EntryFilter, ExtensionFilter, FileCollector};
pub use error::LocError;
pub use file_utils::{DirEntry, DirSource, OsDirSource, display_basename, resolve_absolute_path};
pub use index::{FileIndex, FileRecord};
pub use lines::count_non_blank_lines;
pub use output::{
    OutputConfig, ProgressBar, StreamingFormatter, TreeFormatter, clear_screen, print_json,
};
pub use scan::{NoProgress, ScanProgress, ScanSummary, Scanner, scan_file};
pub use strip::{ScanState, Stripper, strip_comments};
pub use tree::{StreamingOutput, StreamingWalker, TreeNode, TreeWalker};

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, LocError>;
