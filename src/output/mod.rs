//! Tree line formatting
//!
//! - `palette` - depth to color mapping and indentation
//! - `renderer` - writes one line per entry through a `ColorPrinter`

mod palette;
mod renderer;

pub use palette::{DEPTH_PALETTE, INDENT, NEUTRAL_COLOR, depth_color, indentation};
pub use renderer::{LineRenderer, RenderLine};
