use super::{DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::color::Color;
use crate::raster::Surface;

// ============================================================================
// Utility Functions
// ============================================================================

/// Write ABGR pixel to slice (RGBA8888 little-endian byte order)
#[inline]
fn write_pixel(dest: &mut [u8], color: Color) {
    dest[0] = 255; // A
    dest[1] = color.b; // B
    dest[2] = color.g; // G
    dest[3] = color.r; // R
}

// ============================================================================
// PixelBuffer
// ============================================================================

/// RGBA8888 pixel buffer for software rendering
/// This is the canvas the editor draws into; the window uploads it each frame
#[derive(Debug, Clone)]
pub struct PixelBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl PixelBuffer {
    /// Create a new pixel buffer with default resolution (800x600)
    pub fn new() -> Self {
        Self::with_size(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }

    /// Create a new pixel buffer with custom resolution
    pub fn with_size(width: u32, height: u32) -> Self {
        Self {
            pixels: vec![0; (width * height * 4) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check if coordinates are within bounds
    #[inline]
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width as i32 && y >= 0 && y < self.height as i32
    }

    /// Calculate byte offset for pixel at (x, y)
    #[inline]
    fn pixel_index(&self, x: u32, y: u32) -> usize {
        ((y * self.width + x) * 4) as usize
    }

    /// Clear to a solid color
    pub fn clear(&mut self, color: Color) {
        for chunk in self.pixels.chunks_exact_mut(4) {
            write_pixel(chunk, color);
        }
    }

    /// Set a single pixel (bounds checked)
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            write_pixel(&mut self.pixels[idx..idx + 4], color);
        }
    }

    /// Read a pixel from the buffer (bounds checked)
    /// Returns None if coordinates are out of bounds
    #[inline]
    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        if self.in_bounds(x, y) {
            let idx = self.pixel_index(x as u32, y as u32);
            Some(Color::rgb(
                self.pixels[idx + 3], // R
                self.pixels[idx + 2], // G
                self.pixels[idx + 1], // B
            ))
        } else {
            None
        }
    }

    /// Number of pixels currently holding `color` (alpha ignored)
    pub fn count_pixels(&self, color: Color) -> usize {
        self.pixels
            .chunks_exact(4)
            .filter(|p| p[3] == color.r && p[2] == color.g && p[1] == color.b)
            .count()
    }

    /// Draw a horizontal line, clipped to the buffer
    pub fn hline(&mut self, x1: i32, x2: i32, y: i32, color: Color) {
        if y < 0 || y >= self.height as i32 {
            return;
        }
        let (x1, x2) = if x1 <= x2 { (x1, x2) } else { (x2, x1) };
        let start = x1.max(0);
        let end = x2.min(self.width as i32 - 1);
        if start > end {
            return;
        }

        // Compute starting index once, then increment by 4 per pixel
        let mut idx = self.pixel_index(start as u32, y as u32);
        for _ in start..=end {
            write_pixel(&mut self.pixels[idx..idx + 4], color);
            idx += 4;
        }
    }

    /// Fill a rectangle
    pub fn fill_rect(&mut self, x: i32, y: i32, w: u32, h: u32, color: Color) {
        if w == 0 {
            return;
        }
        for row in 0..h as i32 {
            self.hline(x, x + w as i32 - 1, y + row, color);
        }
    }

    /// Draw a filled circle using horizontal spans
    pub fn fill_circle(&mut self, cx: i32, cy: i32, radius: i32, color: Color) {
        if radius <= 0 {
            if radius == 0 {
                self.set_pixel(cx, cy, color);
            }
            return;
        }

        // Midpoint circle algorithm with span filling
        let mut x = radius;
        let mut y = 0;
        let mut err = 1 - radius;

        while x >= y {
            // Fill horizontal spans for 4 quadrants, avoiding duplicates
            self.hline(cx - x, cx + x, cy + y, color);
            if y != 0 {
                self.hline(cx - x, cx + x, cy - y, color);
            }
            if x != y {
                self.hline(cx - y, cx + y, cy + x, color);
                if y != 0 {
                    self.hline(cx - y, cx + y, cy - x, color);
                }
            }

            y += 1;
            if err < 0 {
                err += 2 * y + 1;
            } else {
                x -= 1;
                err += 2 * (y - x) + 1;
            }
        }
    }

    /// Get raw pixel data (for texture upload)
    pub fn as_bytes(&self) -> &[u8] {
        &self.pixels
    }
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Surface for PixelBuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Color) {
        PixelBuffer::set_pixel(self, x, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get_pixel() {
        let mut buffer = PixelBuffer::with_size(4, 3);
        buffer.set_pixel(2, 1, Color::rgb(10, 20, 30));
        assert_eq!(buffer.get_pixel(2, 1), Some(Color::rgb(10, 20, 30)));
        assert_eq!(buffer.get_pixel(0, 0), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(4, 0), None);
        assert_eq!(buffer.get_pixel(0, -1), None);
    }

    #[test]
    fn test_out_of_bounds_writes_are_dropped() {
        let mut buffer = PixelBuffer::with_size(4, 4);
        buffer.set_pixel(-1, 0, Color::RED);
        buffer.set_pixel(0, 4, Color::RED);
        buffer.hline(-10, -1, 0, Color::RED);
        assert_eq!(buffer.count_pixels(Color::RED), 0);
    }

    #[test]
    fn test_byte_layout_is_abgr() {
        let mut buffer = PixelBuffer::with_size(1, 1);
        buffer.set_pixel(0, 0, Color::rgb(1, 2, 3));
        assert_eq!(buffer.as_bytes(), &[255, 3, 2, 1]);
    }

    #[test]
    fn test_fill_rect_clips() {
        let mut buffer = PixelBuffer::with_size(10, 10);
        buffer.fill_rect(8, 8, 5, 5, Color::GREEN);
        assert_eq!(buffer.count_pixels(Color::GREEN), 4);
    }

    #[test]
    fn test_fill_circle_symmetric() {
        let mut buffer = PixelBuffer::with_size(40, 40);
        buffer.fill_circle(20, 20, 5, Color::BLUE);
        assert_eq!(buffer.get_pixel(15, 20), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(25, 20), Some(Color::BLUE));
        assert_eq!(buffer.get_pixel(20, 14), Some(Color::BLACK));
        assert_eq!(buffer.get_pixel(26, 20), Some(Color::BLACK));
    }

    #[test]
    fn test_clear() {
        let mut buffer = PixelBuffer::with_size(3, 3);
        buffer.clear(Color::RAYWHITE);
        assert_eq!(buffer.count_pixels(Color::RAYWHITE), 9);
    }
}
