//! Pixel rasterization: Bresenham lines and scanline polygon fill
//!
//! Everything here paints through [`Surface::set_pixel`]; a fill span is just
//! a line whose endpoints share a row.

mod line;
mod scanline;

pub use line::{draw_line, rasterize, Line};
pub use scanline::{fill, row_intersections};

use crate::color::Color;

/// A drawable pixel target
pub trait Surface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// Paint one pixel; implementations drop out-of-range writes
    fn set_pixel(&mut self, x: i32, y: i32, color: Color);
}
