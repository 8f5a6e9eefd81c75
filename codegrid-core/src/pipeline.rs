//! One rendering pass: text in, image file out.

use anyhow::Result;
use log::info;

use crate::config::Config;
use crate::font::FontManager;
use crate::layout::{place, GridGeometry, LayoutPlan, LineWrapper};
use crate::renderer::Renderer;

/// What a rendering pass produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSummary {
    pub wrapped_lines: usize,
    pub columns: usize,
    pub lines_per_column: usize,
    pub width: u32,
    pub height: u32,
    /// The configured font was unusable and a fallback was drawn instead
    pub degraded_font: bool,
}

/// Wrap, lay out and draw `text`, writing the image to `config.output.path`
pub fn render(text: &str, config: &Config) -> Result<RenderSummary> {
    config.validate()?;

    let font_manager = FontManager::load(config.font.path.as_deref(), config.font.size);
    render_with_font(text, config, font_manager)
}

/// Same as [`render`] with an already loaded font
pub fn render_with_font(
    text: &str,
    config: &Config,
    font_manager: FontManager,
) -> Result<RenderSummary> {
    config.validate()?;
    let layout = &config.layout;

    let cell = font_manager.cell_metrics()?;
    let geometry =
        GridGeometry::from_cell(cell, layout.line_char_limit, layout.line_spacing, layout.padding);

    let wrapper = LineWrapper::new(layout.line_char_limit, layout.tab_width)?;
    let lines = wrapper.wrap(text);

    let plan = LayoutPlan::optimize(lines.len(), &geometry, layout.target_aspect_ratio);
    let (width, height) = geometry.image_size(&plan);
    info!(
        "Laid out {} lines in {} columns of {} lines ({}x{} px)",
        lines.len(),
        plan.columns,
        plan.lines_per_column,
        width,
        height
    );

    let degraded_font = font_manager.is_degraded();
    let mut renderer = Renderer::new(font_manager, config.appearance.palette);
    let canvas = renderer.render(place(&lines, plan, geometry), width, height);
    Renderer::save(&canvas, &config.output.path)?;

    Ok(RenderSummary {
        wrapped_lines: lines.len(),
        columns: plan.columns,
        lines_per_column: plan.lines_per_column,
        width,
        height,
        degraded_font,
    })
}
