//! Test utilities for building temporary directory trees.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory holding a named root folder.
///
/// The root lives one level below the temp dir so its display name is
/// predictable. Everything is removed when dropped.
pub struct TestTree {
    dir: TempDir,
    root: PathBuf,
}

impl TestTree {
    /// Create an empty root folder called `name`.
    pub fn new(name: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let root = dir.path().join(name);
        fs::create_dir(&root).expect("Failed to create root dir");
        Self { dir, root }
    }

    /// The root folder being printed.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The temp dir containing the root.
    pub fn parent(&self) -> &Path {
        self.dir.path()
    }

    /// Add an empty file, creating parent directories as needed.
    pub fn add_file(&self, path: &str) -> PathBuf {
        self.write_file(path, "")
    }

    /// Add a file with content, creating parent directories as needed.
    pub fn write_file(&self, path: &str, content: &str) -> PathBuf {
        let full_path = self.root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        full_path
    }

    /// Add a directory (and its parents).
    pub fn add_dir(&self, path: &str) -> PathBuf {
        let full_path = self.root.join(path);
        fs::create_dir_all(&full_path).expect("Failed to create dir");
        full_path
    }

    /// Mark an entry hidden in the platform's own way.
    ///
    /// On Unix the leading dot already hides it, so only Windows needs the attribute.
    pub fn mark_hidden(&self, path: &str) {
        #[cfg(windows)]
        {
            let full_path = self.root.join(path);
            std::process::Command::new("attrib")
                .arg("+h")
                .arg(&full_path)
                .output()
                .expect("Failed to set hidden attribute");
        }
        #[cfg(not(windows))]
        let _ = path;
    }

    /// Build a tree with `width` files and `width` subdirectories per level.
    pub fn generate(name: &str, depth: usize, width: usize) -> Self {
        let tree = Self::new(name);
        tree.fill(Path::new(""), depth, width);
        tree
    }

    fn fill(&self, rel: &Path, depth: usize, width: usize) {
        for i in 0..width {
            let file = rel.join(format!("file_{}.txt", i));
            self.add_file(&file.to_string_lossy());
            if depth > 0 {
                let sub = rel.join(format!("dir_{}", i));
                self.add_dir(&sub.to_string_lossy());
                self.fill(&sub, depth - 1, width);
            }
        }
    }
}

/// A `folder/` tree whose nested folder holds a hidden file and a hidden directory.
pub fn nested_folder_tree() -> TestTree {
    let tree = TestTree::new("folder");
    tree.add_file("image.png");
    tree.add_file("text.txt");
    tree.add_file("nested-folder/not-hidden.txt");
    tree.add_file("nested-folder/.hidden.txt");
    tree.add_file("nested-folder/.hidden-folder/42.png");
    tree.mark_hidden("nested-folder/.hidden.txt");
    tree.mark_hidden("nested-folder/.hidden-folder");
    tree
}
