//! Error types for truffula

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TruffulaError>;

/// Failures surfaced by `TruffulaPrinter::print_tree`.
#[derive(Error, Debug)]
pub enum TruffulaError {
    /// No root directory was configured
    #[error("root directory must be set")]
    MissingRoot,

    #[error("cannot access '{path}': No such file or directory")]
    RootNotFound { path: PathBuf },

    #[error("'{path}' is not a directory")]
    NotADirectory { path: PathBuf },

    /// Listing a directory failed part way through the walk
    #[error("cannot read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing to the output sink failed
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
}

impl TruffulaError {
    /// True for the configuration errors detected before any output is written.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot | Self::RootNotFound { .. } | Self::NotADirectory { .. }
        )
    }
}
