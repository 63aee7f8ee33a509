//! Truffula - print a directory as an indented tree, colored by depth

pub mod color;
pub mod error;
pub mod output;
pub mod printer;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use color::{ColorPrinter, ConsoleColor, LINE_SEPARATOR};
pub use error::{Result, TruffulaError};
pub use output::{LineRenderer, RenderLine};
pub use printer::TruffulaPrinter;
pub use tree::{DotfileProbe, Entry, HiddenProbe, PlatformProbe, TreeOptions, TreeVisitor, TreeWalker};
