//! Column grid geometry and line placement
//!
//! Maps the wrapped line sequence onto a column-major grid:
//! - Pixel size of one character cell and one full-width line
//! - The chosen column count and lines per column
//! - Top-left pixel position of every line, and the canvas size
//!
//! Column 0 fills top to bottom before column 1 begins. Columns are separated
//! by the padding, which also surrounds the whole grid.

use crate::error::LayoutError;

use super::columns::optimal_columns;

/// Pixel size of one monospace character cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub width: f32,
    pub height: f32,
}

impl CellMetrics {
    /// Both dimensions must be strictly positive
    pub fn new(width: f32, height: f32) -> Result<Self, LayoutError> {
        // Written as negated comparisons so NaN is rejected too
        if !(width > 0.0) || !(height > 0.0) {
            return Err(LayoutError::NonPositiveCellMetric { width, height });
        }
        Ok(Self { width, height })
    }
}

/// Pixel geometry shared by the layout search, the positioner and the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Width of a full-length line
    pub line_width: u32,
    /// Vertical distance between consecutive lines
    pub line_height: u32,
    /// Outer margin and column gutter
    pub padding: u32,
}

impl GridGeometry {
    pub fn new(line_width: u32, line_height: u32, padding: u32) -> Self {
        Self {
            line_width,
            line_height,
            padding,
        }
    }

    /// Derive line sizes from the cell metrics and the wrap limit
    pub fn from_cell(
        cell: CellMetrics,
        line_char_limit: usize,
        line_spacing: u32,
        padding: u32,
    ) -> Self {
        let line_width = (cell.width * line_char_limit as f32).ceil() as u32;
        let line_height = cell.height.ceil() as u32 + line_spacing;
        Self::new(line_width, line_height, padding)
    }

    /// Top-left pixel of the given grid slot
    #[inline]
    pub fn grid_to_pixels(&self, column: usize, row: usize) -> (u32, u32) {
        let x = column as u32 * (self.line_width + self.padding) + self.padding;
        let y = row as u32 * self.line_height + self.padding;
        (x, y)
    }

    /// Canvas size needed for the plan
    pub fn image_size(&self, plan: &LayoutPlan) -> (u32, u32) {
        let columns = plan.columns as u32;
        let width = columns * self.line_width + self.padding * (columns + 1);
        let height = plan.lines_per_column as u32 * self.line_height + self.padding * 2;
        (width, height)
    }
}

/// Column count and column length for one rendering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutPlan {
    pub columns: usize,
    pub lines_per_column: usize,
}

impl LayoutPlan {
    /// Build a plan for `total_lines` spread over at most `columns` columns.
    ///
    /// Columns that would stay empty are dropped, so every column holds at
    /// least one line unless there are no lines at all.
    pub fn new(total_lines: usize, columns: usize) -> Self {
        if total_lines == 0 {
            return Self {
                columns: 1,
                lines_per_column: 1,
            };
        }
        let columns = columns.clamp(1, total_lines);
        let lines_per_column = total_lines.div_ceil(columns);
        Self {
            columns: total_lines.div_ceil(lines_per_column),
            lines_per_column,
        }
    }

    /// Search the column count closest to `target_ratio` and build the plan
    pub fn optimize(total_lines: usize, geometry: &GridGeometry, target_ratio: f64) -> Self {
        let columns = optimal_columns(
            geometry.line_width as f64,
            geometry.line_height as f64,
            total_lines,
            target_ratio,
        );
        Self::new(total_lines, columns)
    }

    /// Grid slot `(column, row)` of the line at `index`
    #[inline]
    pub fn slot(&self, index: usize) -> (usize, usize) {
        (index / self.lines_per_column, index % self.lines_per_column)
    }
}

/// A wrapped line with its grid slot and pixel position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlacedLine<'a> {
    pub text: &'a str,
    pub column: usize,
    pub row: usize,
    pub x: u32,
    pub y: u32,
}

/// Lazily place every line in order, column-major
pub fn place<'a, S: AsRef<str>>(
    lines: &'a [S],
    plan: LayoutPlan,
    geometry: GridGeometry,
) -> impl Iterator<Item = PlacedLine<'a>> + 'a {
    lines.iter().enumerate().map(move |(index, line)| {
        let (column, row) = plan.slot(index);
        let (x, y) = geometry.grid_to_pixels(column, row);
        PlacedLine {
            text: line.as_ref(),
            column,
            row,
            x,
            y,
        }
    })
}
