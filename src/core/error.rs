//! Error types shared by the collector, the CLI and the sinks

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop (or be reported by) a grepcat run.
///
/// Configuration and traversal errors abort the run before any output is
/// produced. Clipboard errors are only reported; the pipeline keeps going.
#[derive(Debug, Error)]
pub enum GrabError {
    /// `~` could not be expanded because no home directory is known.
    #[error("failed to resolve the home directory")]
    HomeResolution,

    #[error("directory does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("invalid max depth {0} (expected -1 or a non-negative integer)")]
    InvalidDepth(i64),

    #[error("invalid extension {0:?}")]
    InvalidExtension(String),

    #[error("{0}")]
    InvalidFormat(String),

    #[error("{0}")]
    InvalidAction(String),

    /// An entry under a root could not be read while walking.
    #[error("failed to walk directory {root}: {source}")]
    Traversal {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("failed to copy to clipboard: {0}")]
    Clipboard(String),

    #[error("failed to copy to clipboard: {0}")]
    ClipboardIo(#[from] std::io::Error),
}
