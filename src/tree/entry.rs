//! Filesystem entries visited during a walk

use std::fs::{DirEntry, FileType};
use std::io;
use std::path::{Path, PathBuf};

use super::filter::HiddenProbe;
use super::utils::display_name;

/// A file or directory found while walking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub path: PathBuf,
    /// Base name only
    pub name: String,
    /// Symlinks are never directories here, even when they point at one
    pub is_dir: bool,
    pub is_hidden: bool,
}

impl Entry {
    /// Build the entry for the walk root.
    pub fn root(path: &Path, probe: &dyn HiddenProbe) -> Self {
        let name = display_name(path);
        Self {
            path: path.to_path_buf(),
            is_dir: true,
            is_hidden: probe.is_hidden(path, &name),
            name,
        }
    }

    /// Build an entry from a directory listing item.
    ///
    /// Fails when the entry's type cannot be read.
    pub fn from_dir_entry(entry: &DirEntry, probe: &dyn HiddenProbe) -> io::Result<Self> {
        let name = entry.file_name().to_string_lossy().to_string();
        Self::with_file_type(entry.path(), name, entry.file_type(), probe)
    }

    pub(crate) fn with_file_type(
        path: PathBuf,
        name: String,
        file_type: io::Result<FileType>,
        probe: &dyn HiddenProbe,
    ) -> io::Result<Self> {
        let is_dir = file_type?.is_dir();
        let is_hidden = probe.is_hidden(&path, &name);
        Ok(Self {
            path,
            name,
            is_dir,
            is_hidden,
        })
    }
}
