//! TreeWalker - depth-first, pre-order directory walk

use std::path::Path;

use crate::error::Result;

use super::entry::Entry;
use super::filter::{HiddenProbe, PlatformProbe};
use super::traversal::read_children;

/// Receives entries from the walker, in output order.
pub trait TreeVisitor {
    fn visit(&mut self, entry: &Entry, depth: usize) -> Result<()>;
}

/// Walks a directory tree and reports each entry with its depth.
///
/// The root is always reported first at depth 0, whatever its own hidden
/// status. Siblings are reported in `compare_names` order and a directory is
/// reported before its contents. Symlinked directories are reported but not
/// descended into.
pub struct TreeWalker {
    show_hidden: bool,
    probe: Box<dyn HiddenProbe>,
}

impl TreeWalker {
    pub fn new(show_hidden: bool) -> Self {
        Self {
            show_hidden,
            probe: Box::new(PlatformProbe),
        }
    }

    pub fn with_hidden_probe(mut self, probe: Box<dyn HiddenProbe>) -> Self {
        self.probe = probe;
        self
    }

    pub fn walk<V: TreeVisitor + ?Sized>(&self, root: &Path, visitor: &mut V) -> Result<()> {
        let root_entry = Entry::root(root, self.probe.as_ref());
        visitor.visit(&root_entry, 0)?;
        self.walk_dir(root, 1, visitor)
    }

    fn walk_dir<V: TreeVisitor + ?Sized>(&self, path: &Path, depth: usize, visitor: &mut V) -> Result<()> {
        log::debug!("listing {} at depth {}", path.display(), depth);
        let children = read_children(path, self.show_hidden, self.probe.as_ref())?;

        for child in &children {
            visitor.visit(child, depth)?;
            if child.is_dir {
                self.walk_dir(&child.path, depth + 1, visitor)?;
            }
        }

        Ok(())
    }
}
