//! Click-to-place polygon editor
//!
//! Outlines are drawn with integer Bresenham lines and interiors with a
//! scanline even-odd fill. Everything paints through [`raster::Surface`], so
//! the core runs the same against the SDL2 window or a plain [`display::PixelBuffer`].

pub mod color;
pub mod config;
pub mod display;
pub mod editor;
pub mod error;
pub mod geometry;
pub mod polygon;
pub mod raster;
pub mod ui;
pub mod util;

pub use color::Color;
pub use editor::{Action, PolygonEditor};
pub use error::{EditorError, Result};
pub use polygon::{OrderingPolicy, Point, Rect, Vertex, VertexStore};
pub use raster::Surface;
