use image::{Rgb, RgbImage};

use crate::font::{FontManager, Glyph};

/// Rasterizes placed text lines into an RGB canvas
pub(crate) struct TextRasterizer {
    baseline_offset: f32,
}

impl TextRasterizer {
    /// `baseline_offset` is the distance from a line's top edge to its baseline
    pub fn new(baseline_offset: f32) -> Self {
        Self { baseline_offset }
    }

    /// Draw one line with its top-left corner at `(x, y)`
    pub fn draw_line(
        &self,
        canvas: &mut RgbImage,
        font_manager: &mut FontManager,
        text: &str,
        x: u32,
        y: u32,
        fg: Rgb<u8>,
    ) -> usize {
        let baseline_y = y as f32 + self.baseline_offset;
        let mut pen_x = x as f32;
        let mut drawn = 0;

        for c in text.chars() {
            let glyph = font_manager.glyph(c);

            if !c.is_whitespace() && !glyph.coverage.is_empty() {
                // Glyph position using baseline alignment
                let glyph_x = pen_x + glyph.xmin as f32;
                let glyph_y = baseline_y - (glyph.height as f32 + glyph.ymin as f32);
                Self::draw_glyph(canvas, glyph, glyph_x, glyph_y, fg);
                drawn += 1;
            }

            pen_x += glyph.advance;
        }

        drawn
    }

    /// Blend a single glyph's coverage over the canvas
    fn draw_glyph(canvas: &mut RgbImage, glyph: &Glyph, glyph_x: f32, glyph_y: f32, fg: Rgb<u8>) {
        let (width, height) = canvas.dimensions();

        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let px = glyph_x.round() as i64 + gx as i64;
                let py = glyph_y.round() as i64 + gy as i64;

                // Bounds check
                if px < 0 || py < 0 || px >= width as i64 || py >= height as i64 {
                    continue;
                }

                let coverage = glyph.coverage[gy * glyph.width + gx];
                if coverage == 0 {
                    continue;
                }

                let alpha = coverage as f32 / 255.0;
                let pixel = canvas.get_pixel_mut(px as u32, py as u32);
                for channel in 0..3 {
                    let existing = pixel[channel] as f32;
                    let blended = existing + (fg[channel] as f32 - existing) * alpha;
                    pixel[channel] = blended.round() as u8;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);

    fn ink_pixels(canvas: &RgbImage) -> usize {
        canvas.pixels().filter(|p| **p != WHITE).count()
    }

    #[test]
    fn test_spaces_draw_nothing() {
        let mut canvas = RgbImage::from_pixel(100, 20, WHITE);
        let mut font = FontManager::blocks(12.0);
        let rasterizer = TextRasterizer::new(font.ascent());

        let drawn = rasterizer.draw_line(&mut canvas, &mut font, "    ", 0, 0, BLACK);
        assert_eq!(drawn, 0);
        assert_eq!(ink_pixels(&canvas), 0);
    }

    #[test]
    fn test_block_glyphs_are_blended() {
        let mut canvas = RgbImage::from_pixel(100, 20, WHITE);
        let mut font = FontManager::blocks(12.0);
        let rasterizer = TextRasterizer::new(font.ascent());

        let drawn = rasterizer.draw_line(&mut canvas, &mut font, "a b", 2, 2, BLACK);
        assert_eq!(drawn, 2);
        // Two 6x7 boxes at coverage 160
        assert_eq!(ink_pixels(&canvas), 2 * 6 * 7);
        let sample = canvas
            .pixels()
            .find(|p| **p != WHITE)
            .copied()
            .unwrap();
        // 255 + (0 - 255) * 160/255 = 95
        assert_eq!(sample, Rgb([95, 95, 95]));
    }

    #[test]
    fn test_glyphs_outside_canvas_are_clipped() {
        let mut canvas = RgbImage::from_pixel(10, 10, WHITE);
        let mut font = FontManager::blocks(12.0);
        let rasterizer = TextRasterizer::new(font.ascent());

        // Runs far past the right edge without panicking
        rasterizer.draw_line(&mut canvas, &mut font, &"x".repeat(50), 5, 0, BLACK);
        assert!(ink_pixels(&canvas) > 0);
    }
}
