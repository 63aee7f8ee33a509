//! TruffulaPrinter - prints a directory tree to a writer

use std::io::Write;

use crate::color::ColorPrinter;
use crate::error::Result;
use crate::output::LineRenderer;
use crate::tree::{HiddenProbe, TreeOptions, TreeWalker};

/// Prints the tree described by `TreeOptions` to a writer.
///
/// Each line is the entry name indented three spaces per level, wrapped in
/// the escape code of its depth color and a reset code:
///
/// ```text
/// \x1b[0;37mfolder/\n\x1b[0m
/// \x1b[0;35m   image.png\n\x1b[0m
/// \x1b[0;35m   nested-folder/\n\x1b[0m
/// \x1b[0;33m      not-hidden.txt\n\x1b[0m
/// ```
pub struct TruffulaPrinter<W: Write> {
    options: TreeOptions,
    walker: TreeWalker,
    renderer: LineRenderer<W>,
}

impl<W: Write> TruffulaPrinter<W> {
    pub fn new(options: TreeOptions, out: W) -> Self {
        let walker = TreeWalker::new(options.show_hidden);
        let renderer = LineRenderer::new(ColorPrinter::new(out), options.use_color);
        Self {
            options,
            walker,
            renderer,
        }
    }

    /// Turn escape codes off to write plain indented text.
    pub fn with_escapes(mut self, escapes: bool) -> Self {
        let printer = ColorPrinter::new(self.renderer.into_inner()).with_escapes(escapes);
        self.renderer = LineRenderer::new(printer, self.options.use_color);
        self
    }

    /// Replace the platform's hidden-file rule.
    pub fn with_hidden_probe(mut self, probe: Box<dyn HiddenProbe>) -> Self {
        self.walker = self.walker.with_hidden_probe(probe);
        self
    }

    /// Print the whole tree.
    ///
    /// The root is validated before anything is written, so a bad root
    /// leaves the writer untouched. A directory that cannot be listed aborts
    /// the print; lines already written stay written.
    pub fn print_tree(&mut self) -> Result<()> {
        let root = self.options.root_dir()?;
        log::debug!(
            "printing {} (show_hidden={}, use_color={})",
            root.display(),
            self.options.show_hidden,
            self.options.use_color
        );

        self.renderer.reset();
        self.walker.walk(root, &mut self.renderer)
    }

    pub fn get_ref(&self) -> &W {
        self.renderer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.renderer.into_inner()
    }
}
