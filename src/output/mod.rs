//! Tree formatting and display
//!
//! This module provides formatters for outputting line-count trees:
//! - Console output with colors (streaming or buffered)
//! - JSON output
//! - The scan progress bar
//!
//! # Module Structure
//!
//! - `config` - Output configuration types
//! - `utils` - Shared line-building helpers (connectors, labels)
//! - `tree` - Buffered plain-text formatter
//! - `streaming` - Streaming formatter for console output
//! - `progress` - Progress bar and screen clearing
//! - `json` - JSON output

mod config;
mod json;
mod progress;
mod streaming;
mod tree;
mod utils;

// Re-export public types and functions
pub use config::OutputConfig;
pub use json::{print_json, to_json_string};
pub use progress::{ProgressBar, clear_screen, render_bar};
pub use streaming::{StreamingFormatter, color_choice};
pub use tree::TreeFormatter;

pub use utils::{connector, header_line, lines_label, node_line};
