//! File system access used by the collector, the scanner and the renderer
//!
//! Everything that touches the operating system goes through [`DirSource`]:
//! listing a directory and reading a file's bytes. [`OsDirSource`] is the
//! `std::fs` implementation used by the binary.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use crate::Result;
use crate::error::LocError;

/// One entry of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: OsString,
    pub is_dir: bool,
    /// The entry itself is a symbolic link (its target decides `is_dir`).
    pub is_symlink: bool,
}

impl DirEntry {
    pub fn file(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: false,
            is_symlink: false,
        }
    }

    pub fn dir(name: impl Into<OsString>) -> Self {
        Self {
            name: name.into(),
            is_dir: true,
            is_symlink: false,
        }
    }

    /// Entry name for display and comparison.
    pub fn display_name(&self) -> String {
        self.name.to_string_lossy().into_owned()
    }
}

/// Directory listing and file reading.
pub trait DirSource {
    /// List the immediate children of `dir` in enumeration order.
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>>;

    /// Read a file's full contents.
    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>>;
}

/// [`DirSource`] backed by the local file system.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsDirSource;

impl DirSource for OsDirSource {
    fn list_entries(&self, dir: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();

        for entry in std::fs::read_dir(dir)? {
            let Ok(entry) = entry else {
                continue;
            };
            let Ok(file_type) = entry.file_type() else {
                continue;
            };

            let is_symlink = file_type.is_symlink();
            let is_dir = if is_symlink {
                // Dangling links have nothing to count
                match std::fs::metadata(entry.path()) {
                    Ok(meta) => meta.is_dir(),
                    Err(e) => {
                        tracing::debug!(path = %entry.path().display(), error = %e, "skipping dangling symlink");
                        continue;
                    }
                }
            } else {
                file_type.is_dir()
            };

            entries.push(DirEntry {
                name: entry.file_name(),
                is_dir,
                is_symlink,
            });
        }

        Ok(entries)
    }

    fn read_all_bytes(&self, path: &Path) -> Result<Vec<u8>> {
        let read_err = |source: io::Error| LocError::FileRead {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::open(path).map_err(read_err)?;
        let size = file.metadata().map_err(read_err)?.len();

        let mut buf = Vec::new();
        let capacity = usize::try_from(size).map_err(|_| LocError::Allocation {
            path: path.to_path_buf(),
            size,
        })?;
        buf.try_reserve_exact(capacity)
            .map_err(|_| LocError::Allocation {
                path: path.to_path_buf(),
                size,
            })?;

        file.read_to_end(&mut buf).map_err(read_err)?;
        Ok(buf)
    }
}

/// Resolve `path` to an absolute, canonical path.
pub fn resolve_absolute_path(path: &Path) -> Result<PathBuf> {
    std::fs::canonicalize(path).map_err(|source| LocError::PathResolve {
        path: path.to_path_buf(),
        source,
    })
}

/// Last path component for display, or the whole path when there is none (`/`).
pub fn display_basename(path: &Path) -> String {
    path.file_name()
        .map(OsStr::to_string_lossy)
        .map(|s| s.into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
