//! Error types for treeloc

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while collecting, scanning or rendering.
///
/// [`LocError::PathResolve`], [`LocError::InvalidGlob`] and
/// [`LocError::Allocation`] are fatal.
/// Read failures are reported per file and the run continues; traversal
/// failures are swallowed by the collector and the renderer.
#[derive(Error, Debug)]
pub enum LocError {
    /// The root path could not be resolved to an absolute path
    #[error("failed to resolve path '{path}': {source}")]
    PathResolve {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to open or read a source file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Could not reserve a buffer for a file's contents
    #[error("memory allocation failed for '{path}' ({size} bytes)")]
    Allocation { path: PathBuf, size: u64 },

    /// Invalid ignore pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// A directory could not be listed
    #[error("failed to list directory '{path}': {source}")]
    Traversal {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl LocError {
    /// Whether this error must abort the whole run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            LocError::PathResolve { .. }
                | LocError::InvalidGlob { .. }
                | LocError::Allocation { .. }
        )
    }
}
