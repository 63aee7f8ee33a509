//! Depth-based color selection

use crate::color::ConsoleColor;

/// Colors cycled through by depth, starting at the root.
pub const DEPTH_PALETTE: [ConsoleColor; 3] =
    [ConsoleColor::White, ConsoleColor::Purple, ConsoleColor::Yellow];

/// Color used for every line when color is turned off.
pub const NEUTRAL_COLOR: ConsoleColor = ConsoleColor::White;

/// Width of one indentation level.
pub const INDENT: &str = "   ";

pub fn depth_color(depth: usize, use_color: bool) -> ConsoleColor {
    if use_color {
        DEPTH_PALETTE[depth % DEPTH_PALETTE.len()]
    } else {
        NEUTRAL_COLOR
    }
}

pub fn indentation(depth: usize) -> String {
    INDENT.repeat(depth)
}
