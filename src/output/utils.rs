//! Shared utility functions for output formatting

/// Connector drawn before a non-root node.
pub fn connector(is_last: bool) -> &'static str {
    if is_last { "└── " } else { "├── " }
}

/// Line printed before the tree.
pub fn header_line(total_files: usize) -> String {
    format!("Total {} files:", total_files)
}

/// Suffix printed after every node name.
pub fn lines_label(lines: usize) -> String {
    format!("  {} lines", lines)
}

/// Plain text of one tree line, without the trailing newline.
pub fn node_line(name: &str, lines: usize, is_last: bool, prefix: &str, is_root: bool) -> String {
    if is_root {
        format!("{}{}", name, lines_label(lines))
    } else {
        format!("{}{}{}{}", prefix, connector(is_last), name, lines_label(lines))
    }
}
