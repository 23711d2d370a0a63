//! JSON output formatting

use std::io;

use crate::tree::TreeNode;

/// Serialize a tree node as pretty-printed JSON.
pub fn to_json_string(node: &TreeNode) -> io::Result<String> {
    serde_json::to_string_pretty(node).map_err(io::Error::other)
}

/// Print tree node as pretty-printed JSON to stdout.
pub fn print_json(node: &TreeNode) -> io::Result<()> {
    let json = to_json_string(node)?;
    println!("{}", json);
    Ok(())
}
