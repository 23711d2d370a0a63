//! Terminal progress bar for the scan phase

use std::io::{self, Write};
use std::path::Path;

use crate::scan::ScanProgress;

const BAR_WIDTH: usize = 50;
const CLEAR_WIDTH: usize = 80;

/// Render one frame of the progress bar, without the leading carriage return.
pub fn render_bar(current: usize, total: usize, file_name: &str) -> String {
    let ratio = if total == 0 {
        1.0
    } else {
        current as f64 / total as f64
    };
    let pos = (BAR_WIDTH as f64 * ratio) as usize;

    let mut bar = String::with_capacity(BAR_WIDTH + file_name.len() + 16);
    bar.push('[');
    for i in 0..BAR_WIDTH {
        bar.push(match i.cmp(&pos) {
            std::cmp::Ordering::Less => '=',
            std::cmp::Ordering::Equal => '>',
            std::cmp::Ordering::Greater => ' ',
        });
    }
    bar.push_str(&format!(
        "] {:>3}%  {}/{}  ({})",
        (ratio * 100.0) as usize,
        current,
        total,
        file_name
    ));
    bar
}

/// Progress bar redrawn in place on a single terminal line.
pub struct ProgressBar<W: Write> {
    out: W,
    suffix: String,
}

impl ProgressBar<io::Stdout> {
    /// Progress bar on stdout for files ending in `suffix` (e.g. ".go").
    pub fn stdout(suffix: &str) -> Self {
        Self::new(io::stdout(), suffix)
    }
}

impl<W: Write> ProgressBar<W> {
    pub fn new(out: W, suffix: &str) -> Self {
        Self {
            out,
            suffix: suffix.to_string(),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_frame(&mut self, current: usize, total: usize, path: &Path) -> io::Result<()> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        write!(self.out, "\r{:width$}\r", "", width = CLEAR_WIDTH)?;
        write!(self.out, "{}", render_bar(current, total, &name))?;
        self.out.flush()
    }
}

// Progress is cosmetic: terminal write failures are logged and otherwise ignored
impl<W: Write> ScanProgress for ProgressBar<W> {
    fn on_start(&mut self, _total: usize) {
        if let Err(e) = writeln!(self.out, "Loading {} files...", self.suffix) {
            tracing::debug!(error = %e, "progress output failed");
        }
    }

    fn on_file(&mut self, current: usize, total: usize, path: &Path) {
        if let Err(e) = self.write_frame(current, total, path) {
            tracing::debug!(error = %e, "progress output failed");
        }
    }

    fn on_finish(&mut self) {
        if let Err(e) = writeln!(self.out, "\nDone.").and_then(|_| self.out.flush()) {
            tracing::debug!(error = %e, "progress output failed");
        }
    }
}

/// Clear the terminal and move the cursor home.
pub fn clear_screen() -> io::Result<()> {
    let mut stdout = io::stdout();
    stdout.write_all(b"\x1b[2J\x1b[H")?;
    stdout.flush()
}
