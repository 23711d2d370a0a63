//! Directory tree rendering
//!
//! Both walkers apply the same rules to every directory: list it, sort the
//! entries case-insensitively, drop non-matching files, prune directories
//! whose subtotal is zero, then descend.
//!
//! - `StreamingWalker`: streams nodes to a `StreamingOutput`, used for console output
//! - `TreeWalker`: builds a `TreeNode` tree in memory, required for JSON output

mod json_types;
mod streaming;
mod utils;
mod walker;

// Re-export public types
pub use json_types::TreeNode;
pub use streaming::{StreamingOutput, StreamingWalker, continuation_prefix};
pub use utils::{VisibleChild, compare_names, sort_entries, visible_children};
pub use walker::TreeWalker;
