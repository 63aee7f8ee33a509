//! Hidden-entry detection for tree walking
//!
//! What counts as hidden depends on the platform: Unix uses the leading-dot
//! convention, Windows additionally has a hidden file attribute. The walker
//! only sees the `HiddenProbe` trait.

use std::path::Path;

/// Decides whether a filesystem entry is hidden.
pub trait HiddenProbe {
    fn is_hidden(&self, path: &Path, name: &str) -> bool;
}

/// Names starting with `.` are hidden.
#[derive(Debug, Clone, Copy, Default)]
pub struct DotfileProbe;

impl HiddenProbe for DotfileProbe {
    fn is_hidden(&self, _path: &Path, name: &str) -> bool {
        name.starts_with('.')
    }
}

/// Entries carrying the Windows `FILE_ATTRIBUTE_HIDDEN` bit are hidden.
#[cfg(windows)]
#[derive(Debug, Clone, Copy, Default)]
pub struct AttributeProbe;

#[cfg(windows)]
impl HiddenProbe for AttributeProbe {
    fn is_hidden(&self, path: &Path, _name: &str) -> bool {
        use std::os::windows::fs::MetadataExt;
        const FILE_ATTRIBUTE_HIDDEN: u32 = 2;

        std::fs::symlink_metadata(path)
            .map(|m| m.file_attributes() & FILE_ATTRIBUTE_HIDDEN != 0)
            .unwrap_or(false)
    }
}

/// The native rule for the current platform.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlatformProbe;

impl HiddenProbe for PlatformProbe {
    #[cfg(windows)]
    fn is_hidden(&self, path: &Path, name: &str) -> bool {
        DotfileProbe.is_hidden(path, name) || AttributeProbe.is_hidden(path, name)
    }

    #[cfg(not(windows))]
    fn is_hidden(&self, path: &Path, name: &str) -> bool {
        DotfileProbe.is_hidden(path, name)
    }
}

impl<F> HiddenProbe for F
where
    F: Fn(&Path, &str) -> bool,
{
    fn is_hidden(&self, path: &Path, name: &str) -> bool {
        self(path, name)
    }
}
