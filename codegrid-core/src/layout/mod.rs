//! Text layout: wrapping, column search and grid placement
mod columns;
mod grid;
mod wrap;

pub use columns::{aspect_ratio, optimal_columns};
pub use grid::{place, CellMetrics, GridGeometry, LayoutPlan, PlacedLine};
pub use wrap::LineWrapper;
