use image::Rgb;
use serde::{Deserialize, Serialize};

/// Color palette for the rendered canvas
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorPalette {
    /// Canvas background color (RGBA, 0.0-1.0)
    pub background: [f32; 4],
    /// Text color
    pub foreground: [f32; 4],
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::paper()
    }
}

impl ColorPalette {
    /// Black ink on white paper
    pub fn paper() -> Self {
        Self {
            background: [1.0, 1.0, 1.0, 1.0],
            foreground: [0.0, 0.0, 0.0, 1.0],
        }
    }

    /// Light text on a deep blue-purple background
    pub fn dark() -> Self {
        Self {
            background: [0.09, 0.09, 0.13, 1.0], // #16161D
            foreground: [0.76, 0.78, 0.84, 1.0], // #C0CAF5
        }
    }

    /// Background as an 8-bit pixel. Alpha is dropped, the canvas is opaque.
    pub fn background_rgb(&self) -> Rgb<u8> {
        to_rgb8(self.background)
    }

    pub fn foreground_rgb(&self) -> Rgb<u8> {
        to_rgb8(self.foreground)
    }
}

fn to_rgb8(color: [f32; 4]) -> Rgb<u8> {
    let channel = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
    Rgb([channel(color[0]), channel(color[1]), channel(color[2])])
}
