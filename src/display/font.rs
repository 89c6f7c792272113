//! 8x8 bitmap text for button labels and the vertex counter

use font8x8::{UnicodeFonts, BASIC_FONTS, LATIN_FONTS};

use super::PixelBuffer;
use crate::color::Color;

pub const GLYPH_WIDTH: u32 = 8;
pub const GLYPH_HEIGHT: u32 = 8;

/// Draw one character scaled by `scale`; unknown glyphs draw nothing
/// Returns false when no glyph exists for `c`
pub fn draw_char_scaled(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    c: char,
    scale: u32,
    color: Color,
) -> bool {
    let Some(bitmap) = BASIC_FONTS.get(c).or_else(|| LATIN_FONTS.get(c)) else {
        return false;
    };

    for (row, bits) in bitmap.iter().enumerate() {
        for col in 0..8 {
            if bits & (1 << col) != 0 {
                buffer.fill_rect(
                    x + (col * scale) as i32,
                    y + (row as u32 * scale) as i32,
                    scale,
                    scale,
                    color,
                );
            }
        }
    }
    true
}

/// Draw a string left to right starting at (x, y)
pub fn draw_text_scaled(
    buffer: &mut PixelBuffer,
    x: i32,
    y: i32,
    text: &str,
    scale: u32,
    color: Color,
) {
    let advance = (GLYPH_WIDTH * scale) as i32;
    for (i, c) in text.chars().enumerate() {
        draw_char_scaled(buffer, x + i as i32 * advance, y, c, scale, color);
    }
}

/// Width in pixels of `text` at `scale`
pub fn text_width_scaled(text: &str, scale: u32) -> u32 {
    text.chars().count() as u32 * GLYPH_WIDTH * scale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_draws_nothing() {
        let mut buffer = PixelBuffer::with_size(16, 16);
        assert!(draw_char_scaled(&mut buffer, 0, 0, ' ', 1, Color::WHITE));
        assert_eq!(buffer.count_pixels(Color::WHITE), 0);
    }

    #[test]
    fn test_digit_draws_pixels_inside_cell() {
        let mut buffer = PixelBuffer::with_size(32, 32);
        draw_text_scaled(&mut buffer, 4, 4, "7", 2, Color::WHITE);
        let lit = buffer.count_pixels(Color::WHITE);
        assert!(lit > 0);
        for y in 0..32 {
            for x in 0..32 {
                if buffer.get_pixel(x, y) == Some(Color::WHITE) {
                    assert!((4..20).contains(&x) && (4..20).contains(&y));
                }
            }
        }
    }

    #[test]
    fn test_text_width() {
        assert_eq!(text_width_scaled("Clear", 2), 80);
        assert_eq!(text_width_scaled("", 3), 0);
    }
}
