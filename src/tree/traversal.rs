//! Directory listing used by the walker.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{Result, TruffulaError};

use super::entry::Entry;
use super::filter::HiddenProbe;
use super::utils::compare_names;

/// Read, filter, and sort the direct children of a directory.
///
/// The listing handle is drained and dropped before returning, so a caller
/// that recurses afterwards holds at most one open handle at a time.
pub fn read_children(path: &Path, show_hidden: bool, probe: &dyn HiddenProbe) -> Result<Vec<Entry>> {
    let read_err = |source: io::Error| TruffulaError::ReadDir {
        path: path.to_path_buf(),
        source,
    };

    let mut children = Vec::new();
    for item in fs::read_dir(path).map_err(read_err)? {
        let entry = Entry::from_dir_entry(&item.map_err(read_err)?, probe).map_err(read_err)?;
        if entry.is_hidden && !show_hidden {
            log::trace!("skipping hidden entry {}", entry.path.display());
            continue;
        }
        children.push(entry);
    }

    children.sort_by(|a, b| compare_names(&a.name, &b.name));
    Ok(children)
}
