//! Line counting pipeline: read, strip comments, count non-blank lines
//!
//! [`Scanner`] fills the counts of a collected [`FileIndex`]. A file that
//! cannot be read is logged and keeps a zero count; only fatal errors (a
//! failed buffer allocation) stop the run.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rayon::prelude::*;

use crate::Result;
use crate::file_utils::DirSource;
use crate::index::FileIndex;
use crate::lines::count_non_blank_lines;
use crate::strip::strip_comments;

/// Count the non-blank, non-comment lines of one file.
pub fn scan_file<S: DirSource + ?Sized>(source: &S, path: &Path) -> Result<usize> {
    let bytes = source.read_all_bytes(path)?;
    let stripped = strip_comments(&bytes);
    Ok(count_non_blank_lines(&stripped))
}

/// Callback for scan progress, called once per file in index order.
pub trait ScanProgress {
    fn on_start(&mut self, _total: usize) {}

    fn on_file(&mut self, current: usize, total: usize, path: &Path);

    fn on_finish(&mut self) {}
}

/// Progress sink that reports nothing.
#[derive(Debug, Default)]
pub struct NoProgress;

impl ScanProgress for NoProgress {
    fn on_file(&mut self, _current: usize, _total: usize, _path: &Path) {}
}

/// Outcome of a scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub files: usize,
    pub total_lines: usize,
    /// Files that could not be read and were counted as zero
    pub failed: usize,
}

/// Scans every file of an index and stores its line count.
pub struct Scanner<'a, S: DirSource + Sync + ?Sized> {
    source: &'a S,
    /// Number of parallel workers.
    /// 0 = auto-detect (use all available cores)
    /// 1 = sequential (no parallelism)
    /// N = use N worker threads
    jobs: usize,
}

impl<'a, S: DirSource + Sync + ?Sized> Scanner<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source, jobs: 1 }
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn scan<P: ScanProgress>(&self, index: &mut FileIndex, progress: &mut P) -> Result<ScanSummary> {
        let started = Instant::now();
        let summary = if self.jobs == 1 {
            self.scan_sequential(index, progress)?
        } else {
            self.scan_parallel(index, progress)?
        };
        tracing::debug!(
            files = summary.files,
            lines = summary.total_lines,
            failed = summary.failed,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "scan finished"
        );
        Ok(summary)
    }

    fn scan_sequential<P: ScanProgress>(
        &self,
        index: &mut FileIndex,
        progress: &mut P,
    ) -> Result<ScanSummary> {
        let total = index.len();
        let mut summary = ScanSummary {
            files: total,
            ..Default::default()
        };
        progress.on_start(total);

        for i in 0..total {
            let path = index.records()[i].path.clone();
            let lines = settle(scan_file(self.source, &path), &mut summary)?;
            index.set_line_count(i, lines);
            summary.total_lines += lines;
            progress.on_file(i + 1, total, &path);
        }

        progress.on_finish();
        Ok(summary)
    }

    /// Scan all files in parallel, then fan the results back in by position.
    fn scan_parallel<P: ScanProgress>(
        &self,
        index: &mut FileIndex,
        progress: &mut P,
    ) -> Result<ScanSummary> {
        let paths: Vec<PathBuf> = index.iter().map(|r| r.path.clone()).collect();
        let total = paths.len();
        progress.on_start(total);

        let source = self.source;
        let scan_all = || -> Vec<Result<usize>> {
            paths.par_iter().map(|path| scan_file(source, path)).collect()
        };

        let results = if self.jobs == 0 {
            scan_all()
        } else {
            match rayon::ThreadPoolBuilder::new().num_threads(self.jobs).build() {
                Ok(pool) => pool.install(scan_all),
                Err(e) => {
                    tracing::debug!(error = %e, "falling back to global thread pool");
                    scan_all()
                }
            }
        };

        let mut summary = ScanSummary {
            files: total,
            ..Default::default()
        };
        for (i, (result, path)) in results.into_iter().zip(&paths).enumerate() {
            let lines = settle(result, &mut summary)?;
            index.set_line_count(i, lines);
            summary.total_lines += lines;
            progress.on_file(i + 1, total, path);
        }

        progress.on_finish();
        Ok(summary)
    }
}

/// Turn a per-file result into a count, logging and absorbing non-fatal errors.
fn settle(result: Result<usize>, summary: &mut ScanSummary) -> Result<usize> {
    match result {
        Ok(lines) => Ok(lines),
        Err(e) if e.is_fatal() => Err(e),
        Err(e) => {
            tracing::warn!(error = %e, "counting file as zero lines");
            summary.failed += 1;
            Ok(0)
        }
    }
}
