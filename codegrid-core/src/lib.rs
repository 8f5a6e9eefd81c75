pub mod config;
pub mod constants;
pub mod corpus;
pub mod error;
pub mod font;
pub mod layout;
pub mod pipeline;
pub mod renderer;

pub use config::Config;
pub use corpus::{assemble, FileLister, GitLister};
pub use error::{CorpusError, LayoutError};
pub use font::FontManager;
pub use layout::{optimal_columns, place, CellMetrics, GridGeometry, LayoutPlan, LineWrapper};
pub use pipeline::{render, RenderSummary};
pub use renderer::{ColorPalette, Renderer};
