/// Layout and rendering defaults shared across the wrapper, the layout search
/// and the renderer.
///
/// The renderer and the grid positioner must agree on these values, otherwise
/// the computed image size no longer matches where lines are drawn.

/// Padding around the canvas and between columns, in pixels
pub const IMAGE_PADDING: u32 = 10;

/// Extra vertical pixels added below each line's cell height
pub const LINE_SPACING: u32 = 2;

/// Default maximum characters per wrapped line
pub const DEFAULT_LINE_CHAR_LIMIT: usize = 150;

/// Smallest accepted character limit
pub const MIN_LINE_CHAR_LIMIT: usize = 40;

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Default width:height ratio the column search aims for
pub const DEFAULT_TARGET_ASPECT_RATIO: f64 = 1.0;

/// Tab stops used when expanding tabs before wrapping
pub const DEFAULT_TAB_WIDTH: usize = 8;

/// Glyph pair measured to derive the monospace cell
pub const CELL_PROBE: &str = "Tg";

/// Cell size used by the block-glyph fallback when no font could be loaded
pub const FALLBACK_CELL_WIDTH: f32 = 7.0;
pub const FALLBACK_CELL_HEIGHT: f32 = 14.0;
