//! Configuration types for tree printing

use std::path::{Path, PathBuf};

use crate::error::{Result, TruffulaError};

/// Options for a single tree print.
///
/// The root is optional so an unset root can be reported as an error when
/// the tree is printed rather than when the options are built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub root: Option<PathBuf>,
    /// Include hidden entries and descend into hidden directories
    pub show_hidden: bool,
    /// Cycle colors by depth; otherwise every line uses the neutral color
    pub use_color: bool,
}

impl TreeOptions {
    pub fn new(root: impl Into<PathBuf>, show_hidden: bool, use_color: bool) -> Self {
        Self {
            root: Some(root.into()),
            show_hidden,
            use_color,
        }
    }

    /// Validate the root and return it.
    pub fn root_dir(&self) -> Result<&Path> {
        let root = self.root.as_deref().ok_or(TruffulaError::MissingRoot)?;

        if !root.exists() {
            return Err(TruffulaError::RootNotFound {
                path: root.to_path_buf(),
            });
        }
        if !root.is_dir() {
            return Err(TruffulaError::NotADirectory {
                path: root.to_path_buf(),
            });
        }

        Ok(root)
    }
}
