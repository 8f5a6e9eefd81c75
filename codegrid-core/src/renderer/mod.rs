mod text_rasterizer;
pub mod theme;

use anyhow::{Context, Result};
use image::RgbImage;
use log::{debug, info};
use std::path::Path;

use crate::font::FontManager;
use crate::layout::PlacedLine;
use text_rasterizer::TextRasterizer;
pub use theme::ColorPalette;

/// CPU renderer drawing placed lines onto a single canvas
pub struct Renderer {
    font_manager: FontManager,
    text_rasterizer: TextRasterizer,
    color_palette: ColorPalette,
}

impl Renderer {
    pub fn new(font_manager: FontManager, color_palette: ColorPalette) -> Self {
        let text_rasterizer = TextRasterizer::new(font_manager.ascent());
        Self {
            font_manager,
            text_rasterizer,
            color_palette,
        }
    }

    /// Draw every placed line onto a `width` x `height` canvas.
    ///
    /// Lines are consumed as they are drawn and not kept afterwards.
    pub fn render<'a>(
        &mut self,
        lines: impl IntoIterator<Item = PlacedLine<'a>>,
        width: u32,
        height: u32,
    ) -> RgbImage {
        info!("Rendering {}x{} canvas", width, height);

        let mut canvas = RgbImage::from_pixel(width, height, self.color_palette.background_rgb());
        let fg = self.color_palette.foreground_rgb();

        let mut line_count = 0;
        let mut glyph_count = 0;
        for line in lines {
            glyph_count += self.text_rasterizer.draw_line(
                &mut canvas,
                &mut self.font_manager,
                line.text,
                line.x,
                line.y,
                fg,
            );
            line_count += 1;
        }

        debug!("Drew {} glyphs on {} lines", glyph_count, line_count);
        canvas
    }

    /// Encode the canvas; the format follows the file extension
    pub fn save(canvas: &RgbImage, path: &Path) -> Result<()> {
        canvas
            .save(path)
            .with_context(|| format!("Failed to write image to {}", path.display()))?;
        info!("Image saved to {}", path.display());
        Ok(())
    }
}
