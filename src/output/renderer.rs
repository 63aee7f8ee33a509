//! Line renderer
//!
//! `LineRenderer` turns each walked entry into one indented, colored line and
//! writes it through a `ColorPrinter`. Implements `TreeVisitor` so the walker
//! can drive it directly.

use std::io::Write;
use std::path::MAIN_SEPARATOR;

use crate::color::{ColorPrinter, ConsoleColor};
use crate::error::Result;
use crate::tree::{Entry, TreeVisitor};

use super::palette::{depth_color, indentation};

/// Everything needed to print one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderLine {
    /// Display name, with a trailing separator for directories
    pub text: String,
    pub depth: usize,
    pub color: ConsoleColor,
}

impl RenderLine {
    pub fn for_entry(entry: &Entry, depth: usize, use_color: bool) -> Self {
        let text = if entry.is_dir {
            format!("{}{}", entry.name, MAIN_SEPARATOR)
        } else {
            entry.name.clone()
        };
        Self {
            text,
            depth,
            color: depth_color(depth, use_color),
        }
    }
}

pub struct LineRenderer<W: Write> {
    printer: ColorPrinter<W>,
    use_color: bool,
}

impl<W: Write> LineRenderer<W> {
    pub fn new(printer: ColorPrinter<W>, use_color: bool) -> Self {
        Self { printer, use_color }
    }

    /// Clear color state left over from an earlier run.
    pub fn reset(&mut self) {
        self.printer.reset_state();
    }

    pub fn render(&mut self, line: &RenderLine) -> Result<()> {
        self.printer.set_current_color(line.color);
        let text = format!("{}{}", indentation(line.depth), line.text);
        self.printer.println(&text)?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        self.printer.get_ref()
    }

    pub fn into_inner(self) -> W {
        self.printer.into_inner()
    }
}

impl<W: Write> TreeVisitor for LineRenderer<W> {
    fn visit(&mut self, entry: &Entry, depth: usize) -> Result<()> {
        log::trace!("render {} at depth {}", entry.path.display(), depth);
        let line = RenderLine::for_entry(entry, depth, self.use_color);
        self.render(&line)
    }
}
