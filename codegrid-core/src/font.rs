use fontdue::{Font, FontSettings};
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

use crate::constants::{CELL_PROBE, DEFAULT_FONT_SIZE, FALLBACK_CELL_HEIGHT, FALLBACK_CELL_WIDTH};
use crate::error::LayoutError;
use crate::layout::CellMetrics;

/// Monospace fonts tried when no usable font was configured
const SYSTEM_FONT_PATHS: &[&str] = &[
    "/usr/share/fonts/truetype/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/TTF/DejaVuSansMono.ttf",
    "/usr/share/fonts/dejavu/DejaVuSansMono.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationMono-Regular.ttf",
    "/usr/share/fonts/truetype/ubuntu/UbuntuMono-R.ttf",
    "/System/Library/Fonts/Monaco.ttf",
    "/System/Library/Fonts/Menlo.ttc",
    "C:\\Windows\\Fonts\\consola.ttf",
];

/// Where glyphs come from
enum FontFace {
    Outline(Font),
    /// No font could be loaded: every visible character is a shaded box
    Blocks,
}

/// A rasterized glyph, coverage is one byte per pixel
#[derive(Debug, Clone)]
pub struct Glyph {
    pub xmin: i32,
    pub ymin: i32,
    pub width: usize,
    pub height: usize,
    pub advance: f32,
    pub coverage: Vec<u8>,
}

/// Manages font loading, cell metrics and glyph rasterization
pub struct FontManager {
    face: FontFace,
    font_size: f32,
    degraded: bool,
    /// Cache of rasterized glyphs by character
    glyph_cache: HashMap<char, Glyph>,
}

impl FontManager {
    /// Load the configured font, falling back to system fonts and finally to
    /// block glyphs. Never fails; fallbacks are logged as warnings.
    pub fn load(path: Option<&Path>, font_size: f32) -> Self {
        info!("Loading font at size {}", font_size);

        if let Some(path) = path {
            match Self::load_file(path, font_size) {
                Ok(manager) => {
                    info!("Loaded font from: {}", path.display());
                    return manager;
                }
                Err(e) => {
                    warn!(
                        "Font {} could not be loaded ({}). Falling back to a default font; columns may not line up exactly.",
                        path.display(),
                        e
                    );
                }
            }
        }

        let mut manager = Self::load_default_font(font_size);
        manager.degraded |= path.is_some();
        manager
    }

    /// Parse a font from raw file contents
    pub fn from_bytes(data: &[u8], font_size: f32) -> anyhow::Result<Self> {
        let font = Font::from_bytes(data, FontSettings::default())
            .map_err(|e| anyhow::anyhow!("Failed to parse font: {}", e))?;
        Ok(Self::with_face(FontFace::Outline(font), font_size, false))
    }

    /// Block glyph renderer used when no font file is usable
    pub fn blocks(font_size: f32) -> Self {
        Self::with_face(FontFace::Blocks, font_size, true)
    }

    fn with_face(face: FontFace, font_size: f32, degraded: bool) -> Self {
        Self {
            face,
            font_size,
            degraded,
            glyph_cache: HashMap::new(),
        }
    }

    fn load_file(path: &Path, font_size: f32) -> anyhow::Result<Self> {
        let data = std::fs::read(path)?;
        Self::from_bytes(&data, font_size)
    }

    /// Try the well-known system monospace fonts, then block glyphs
    fn load_default_font(font_size: f32) -> Self {
        for path in SYSTEM_FONT_PATHS {
            if let Ok(manager) = Self::load_file(Path::new(path), font_size) {
                info!("Loaded font from: {}", path);
                return manager;
            }
        }

        warn!("No usable font found; drawing characters as blocks");
        Self::blocks(font_size)
    }

    /// True when the configured font could not be used
    pub fn is_degraded(&self) -> bool {
        self.degraded
    }

    /// Get the cell dimensions for this font, measured on the probe glyphs
    pub fn cell_metrics(&self) -> Result<CellMetrics, LayoutError> {
        match &self.face {
            FontFace::Outline(font) => {
                let probe: Vec<fontdue::Metrics> = CELL_PROBE
                    .chars()
                    .map(|ch| font.metrics(ch, self.font_size))
                    .collect();
                let width =
                    probe.iter().map(|m| m.advance_width).sum::<f32>() / probe.len() as f32;
                // ymin is negative for glyphs reaching below the baseline
                let descent = probe.iter().map(|m| m.ymin as f32).fold(0.0, f32::min);
                let height = (self.ascent() - descent).ceil();
                CellMetrics::new(width, height)
            }
            FontFace::Blocks => {
                let scale = self.font_size / DEFAULT_FONT_SIZE;
                CellMetrics::new(
                    (FALLBACK_CELL_WIDTH * scale).ceil(),
                    (FALLBACK_CELL_HEIGHT * scale).ceil(),
                )
            }
        }
    }

    /// Distance from the top of a line to its baseline
    pub fn ascent(&self) -> f32 {
        match &self.face {
            FontFace::Outline(font) => match font.horizontal_line_metrics(self.font_size) {
                Some(line) => line.ascent,
                None => CELL_PROBE
                    .chars()
                    .map(|ch| {
                        let m = font.metrics(ch, self.font_size);
                        m.height as f32 + m.ymin as f32
                    })
                    .fold(0.0, f32::max),
            },
            FontFace::Blocks => {
                (FALLBACK_CELL_HEIGHT * self.font_size / DEFAULT_FONT_SIZE).ceil() * 0.8
            }
        }
    }

    /// Get or rasterize a glyph
    pub fn glyph(&mut self, ch: char) -> &Glyph {
        let face = &self.face;
        let font_size = self.font_size;
        self.glyph_cache
            .entry(ch)
            .or_insert_with(|| Self::rasterize(face, ch, font_size))
    }

    fn rasterize(face: &FontFace, ch: char, font_size: f32) -> Glyph {
        match face {
            FontFace::Outline(font) => {
                let (metrics, coverage) = font.rasterize(ch, font_size);
                Glyph {
                    xmin: metrics.xmin,
                    ymin: metrics.ymin,
                    width: metrics.width,
                    height: metrics.height,
                    advance: metrics.advance_width,
                    coverage,
                }
            }
            FontFace::Blocks => {
                let scale = font_size / DEFAULT_FONT_SIZE;
                let advance = (FALLBACK_CELL_WIDTH * scale).ceil();
                if ch.is_whitespace() || ch.is_control() {
                    return Glyph {
                        xmin: 0,
                        ymin: 0,
                        width: 0,
                        height: 0,
                        advance,
                        coverage: Vec::new(),
                    };
                }
                // A box covering the x-height band, one pixel narrower than the cell
                let width = (advance as usize).saturating_sub(1).max(1);
                let height = ((FALLBACK_CELL_HEIGHT * scale * 0.5).round() as usize).max(1);
                Glyph {
                    xmin: 0,
                    ymin: 0,
                    width,
                    height,
                    advance,
                    coverage: vec![160; width * height],
                }
            }
        }
    }
}
