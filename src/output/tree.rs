//! Tree formatter for buffered output
//!
//! `TreeFormatter` collects the rendered tree as plain text instead of
//! writing to the terminal. Useful for tests and for embedding the output.

use std::io;

use crate::tree::StreamingOutput;

use super::utils::{header_line, node_line};

/// Buffered, uncoloured tree formatter.
#[derive(Debug, Default)]
pub struct TreeFormatter {
    output: String,
}

impl TreeFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// The text rendered so far.
    pub fn output(&self) -> &str {
        &self.output
    }

    pub fn into_output(self) -> String {
        self.output
    }
}

impl StreamingOutput for TreeFormatter {
    fn begin(&mut self, total_files: usize) -> io::Result<()> {
        self.output.push_str(&header_line(total_files));
        self.output.push_str("\n\n");
        Ok(())
    }

    fn output_node(
        &mut self,
        name: &str,
        lines: usize,
        _is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        self.output
            .push_str(&node_line(name, lines, is_last, prefix, is_root));
        self.output.push('\n');
        Ok(())
    }

    fn finish(&mut self, _dir_count: usize, _file_count: usize) -> io::Result<()> {
        Ok(())
    }
}
