mod font;
mod pixel_buffer;
#[cfg(feature = "window")]
mod window;

pub use font::{draw_char_scaled, draw_text_scaled, text_width_scaled, GLYPH_HEIGHT, GLYPH_WIDTH};
pub use pixel_buffer::PixelBuffer;
#[cfg(feature = "window")]
pub use window::{Display, InputEvent, MouseButtonKind, RenderTarget};

pub const DEFAULT_WIDTH: u32 = 800;
pub const DEFAULT_HEIGHT: u32 = 600;
