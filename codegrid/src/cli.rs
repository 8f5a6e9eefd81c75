use clap::Parser;
use codegrid_core::{ColorPalette, Config};
use std::path::PathBuf;

/// Render every tracked file of a repository into one image of text columns
#[derive(Parser, Debug)]
#[command(name = "codegrid", version, about)]
pub struct Cli {
    #[arg(help = "Repository directory to visualize", default_value = ".")]
    pub repo: PathBuf,

    #[arg(help = "Visualize a single text file instead of a repository", long, value_name = "FILE")]
    pub text: Option<PathBuf>,

    #[arg(help = "Output image path", short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[arg(help = "Configuration file (TOML)", long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[arg(help = "Font file to render with", long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    #[arg(help = "Font size in pixels", long)]
    pub font_size: Option<f32>,

    #[arg(help = "Maximum characters per line (at least 40)", long)]
    pub line_chars: Option<usize>,

    #[arg(help = "Target width:height ratio of the image", long)]
    pub aspect: Option<f64>,

    #[arg(help = "Light text on a dark background", long, default_value_t = false)]
    pub dark: bool,

    #[arg(help = "Print the effective configuration and exit", long, default_value_t = false)]
    pub print_config: bool,
}

impl Cli {
    /// Command line values win over the loaded configuration
    pub fn apply(&self, config: &mut Config) {
        if let Some(output) = &self.output {
            config.output.path = output.clone();
        }
        if let Some(font) = &self.font {
            config.font.path = Some(font.clone());
        }
        if let Some(size) = self.font_size {
            config.font.size = size;
        }
        if let Some(limit) = self.line_chars {
            config.layout.line_char_limit = limit;
        }
        if let Some(aspect) = self.aspect {
            config.layout.target_aspect_ratio = aspect;
        }
        if self.dark {
            config.appearance.palette = ColorPalette::dark();
        }
    }
}
