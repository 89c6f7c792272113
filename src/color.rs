//! RGBA colors and the editor palette

use serde::{Deserialize, Serialize};

use crate::util::Rng;

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RAYWHITE: Color = Color::rgb(245, 245, 245);
    pub const LIGHTGRAY: Color = Color::rgb(200, 200, 200);
    pub const DARKGRAY: Color = Color::rgb(80, 80, 80);
    pub const RED: Color = Color::rgb(230, 41, 55);
    pub const BLUE: Color = Color::rgb(0, 121, 241);
    pub const GREEN: Color = Color::rgb(0, 228, 48);
    pub const ORANGE: Color = Color::rgb(255, 161, 0);
    pub const PURPLE: Color = Color::rgb(200, 122, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Random opaque color with every channel in `[50, 255]`
    ///
    /// Keeps vertex markers visible against the light board.
    pub fn random(rng: &mut Rng) -> Self {
        Self::rgb(
            rng.range_i32(50, 255) as u8,
            rng.range_i32(50, 255) as u8,
            rng.range_i32(50, 255) as u8,
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::DARKGRAY
    }
}

/// Fill colors offered by the toolbar swatches
pub const PALETTE: [Color; 5] = [
    Color::DARKGRAY,
    Color::RED,
    Color::GREEN,
    Color::ORANGE,
    Color::PURPLE,
];
