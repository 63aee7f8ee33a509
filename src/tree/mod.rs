//! Directory tree walking logic
//!
//! `TreeWalker` lists each directory once, drops hidden entries unless asked
//! to keep them, sorts siblings with `compare_names`, and hands every entry
//! with its depth to a `TreeVisitor`.

mod config;
mod entry;
mod filter;
mod traversal;
mod utils;
mod walker;

pub use config::TreeOptions;
pub use entry::Entry;
#[cfg(windows)]
pub use filter::AttributeProbe;
pub use filter::{DotfileProbe, HiddenProbe, PlatformProbe};
pub use utils::{compare_names, display_name};
pub use walker::{TreeVisitor, TreeWalker};
