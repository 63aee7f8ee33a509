//! ANSI color printing
//!
//! `ColorPrinter` wraps a writer and surrounds every piece of text with the
//! escape code of its current color and, unless asked not to, a reset code.

use std::fmt;
use std::io::{self, Write};

/// Line terminator appended by the `println` family.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Terminal colors with their ANSI escape codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ConsoleColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    #[default]
    White,
    Reset,
}

impl ConsoleColor {
    pub fn code(self) -> &'static str {
        match self {
            Self::Black => "\x1b[0;30m",
            Self::Red => "\x1b[0;31m",
            Self::Green => "\x1b[0;32m",
            Self::Yellow => "\x1b[0;33m",
            Self::Blue => "\x1b[0;34m",
            Self::Purple => "\x1b[0;35m",
            Self::Cyan => "\x1b[0;36m",
            Self::White => "\x1b[0;37m",
            Self::Reset => "\x1b[0m",
        }
    }
}

impl fmt::Display for ConsoleColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Writes text wrapped in the escape codes of a current color.
///
/// The color start code is written on every call, even when the previous
/// call left the color open. Callers that want to skip a redundant start
/// code track `current_color` themselves.
pub struct ColorPrinter<W: Write> {
    out: W,
    current_color: ConsoleColor,
    escapes: bool,
}

impl<W: Write> ColorPrinter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            current_color: ConsoleColor::default(),
            escapes: true,
        }
    }

    /// Turn escape codes on or off. With escapes off only the text is written.
    pub fn with_escapes(mut self, escapes: bool) -> Self {
        self.escapes = escapes;
        self
    }

    pub fn current_color(&self) -> ConsoleColor {
        self.current_color
    }

    pub fn set_current_color(&mut self, color: ConsoleColor) {
        self.current_color = color;
    }

    /// Forget any color chosen by a previous run.
    pub fn reset_state(&mut self) {
        self.current_color = ConsoleColor::default();
    }

    pub fn print(&mut self, text: &str) -> io::Result<()> {
        self.print_with_reset(text, true)
    }

    pub fn print_with_reset(&mut self, text: &str, reset: bool) -> io::Result<()> {
        self.write_colored(text, false, reset)
    }

    pub fn println(&mut self, text: &str) -> io::Result<()> {
        self.println_with_reset(text, true)
    }

    /// Like `print_with_reset`, with the line terminator placed before the reset code.
    pub fn println_with_reset(&mut self, text: &str, reset: bool) -> io::Result<()> {
        self.write_colored(text, true, reset)
    }

    pub fn get_ref(&self) -> &W {
        &self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    // Exactly one write_all per call.
    fn write_colored(&mut self, text: &str, newline: bool, reset: bool) -> io::Result<()> {
        if text.is_empty() {
            return Ok(());
        }

        let mut buf = String::with_capacity(text.len() + 16);
        if self.escapes {
            buf.push_str(self.current_color.code());
        }
        buf.push_str(text);
        if newline {
            buf.push_str(LINE_SEPARATOR);
        }
        if self.escapes && reset {
            buf.push_str(ConsoleColor::Reset.code());
        }

        self.out.write_all(buf.as_bytes())
    }
}
