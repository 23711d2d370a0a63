//! Streaming output formatter
//!
//! This module provides `StreamingFormatter` which outputs tree content
//! directly to stdout without buffering, for use with `StreamingWalker`.

use std::io::{self, Write};
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::StreamingOutput;

use super::config::OutputConfig;
use super::utils::{connector, header_line, lines_label};

/// Streaming output formatter - outputs directly to stdout without buffering.
/// Implements the StreamingOutput trait for use with StreamingWalker.
pub struct StreamingFormatter {
    stdout: StandardStream,
}

/// Terminal colour choice for a resolved config.
///
/// The caller has already consulted `NO_COLOR`, `TERM` and the TTY, so an
/// enabled config always emits colour.
pub fn color_choice(config: &OutputConfig) -> ColorChoice {
    if config.use_color {
        ColorChoice::Always
    } else {
        ColorChoice::Never
    }
}

impl StreamingFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            stdout: StandardStream::stdout(color_choice(&config)),
        }
    }

    fn write_lines_label(&mut self, lines: usize) -> io::Result<()> {
        self.stdout
            .set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
        write!(self.stdout, "{}", lines_label(lines))?;
        self.stdout.reset()?;
        writeln!(self.stdout)
    }
}

impl StreamingOutput for StreamingFormatter {
    fn begin(&mut self, total_files: usize) -> io::Result<()> {
        writeln!(self.stdout, "{}", header_line(total_files))?;
        writeln!(self.stdout)
    }

    fn output_node(
        &mut self,
        name: &str,
        lines: usize,
        is_dir: bool,
        is_last: bool,
        prefix: &str,
        is_root: bool,
    ) -> io::Result<()> {
        if !is_root {
            write!(self.stdout, "{}{}", prefix, connector(is_last))?;
        }

        if is_dir {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        } else {
            self.stdout
                .set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
        }
        write!(self.stdout, "{}", name)?;
        self.stdout.reset()?;

        self.write_lines_label(lines)
    }

    fn finish(&mut self, dir_count: usize, file_count: usize) -> io::Result<()> {
        tracing::debug!(dirs = dir_count, files = file_count, "tree rendered");
        self.stdout.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_color_is_not_second_guessed() {
        let choice = color_choice(&OutputConfig { use_color: true });
        assert_eq!(choice, ColorChoice::Always);
    }

    #[test]
    fn test_disabled_color() {
        let choice = color_choice(&OutputConfig { use_color: false });
        assert_eq!(choice, ColorChoice::Never);
    }
}
