use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_FONT_SIZE, DEFAULT_LINE_CHAR_LIMIT, DEFAULT_TAB_WIDTH, DEFAULT_TARGET_ASPECT_RATIO,
    IMAGE_PADDING, LINE_SPACING, MIN_LINE_CHAR_LIMIT,
};
use crate::error::LayoutError;
use crate::renderer::theme::ColorPalette;

/// Configuration for one codegrid run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub layout: LayoutConfig,
    pub font: FontConfig,
    pub appearance: AppearanceConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Maximum characters per wrapped line (at least 40)
    pub line_char_limit: usize,
    /// Desired image width:height ratio
    pub target_aspect_ratio: f64,
    /// Canvas padding and column gutter in pixels
    pub padding: u32,
    /// Pixels added below each line
    pub line_spacing: u32,
    /// Tab stop width used when expanding tabs
    pub tab_width: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FontConfig {
    /// Font file to load; falls back to system fonts when missing or unreadable
    pub path: Option<PathBuf>,
    /// Font size in pixels
    pub size: f32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub palette: ColorPalette,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Image file to write; the format follows the extension
    pub path: PathBuf,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            line_char_limit: DEFAULT_LINE_CHAR_LIMIT,
            target_aspect_ratio: DEFAULT_TARGET_ASPECT_RATIO,
            padding: IMAGE_PADDING,
            line_spacing: LINE_SPACING,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            path: None,
            size: DEFAULT_FONT_SIZE,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("codegrid.png"),
        }
    }
}

impl Config {
    /// Load configuration from file.
    ///
    /// An explicit path must exist. Without one, the default location is used
    /// when present, otherwise built-in defaults.
    pub fn load(path: Option<PathBuf>) -> anyhow::Result<Self> {
        let config_path = match path {
            Some(p) => p,
            None => match default_config_path() {
                Some(p) if p.exists() => p,
                _ => return Ok(Config::default()),
            },
        };

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            anyhow::anyhow!("Failed to read config {}: {}", config_path.display(), e)
        })?;
        let config: Config = toml::from_str(&contents)?;
        log::info!("Loaded configuration from {}", config_path.display());
        Ok(config)
    }

    /// Serialize the configuration as TOML
    pub fn to_toml(&self) -> anyhow::Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Reject values the layout cannot work with
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.layout.line_char_limit < MIN_LINE_CHAR_LIMIT {
            return Err(LayoutError::LineCharLimitTooSmall {
                limit: self.layout.line_char_limit,
                minimum: MIN_LINE_CHAR_LIMIT,
            });
        }
        let ratio = self.layout.target_aspect_ratio;
        if !(ratio.is_finite() && ratio > 0.0) {
            return Err(LayoutError::InvalidAspectRatio(ratio));
        }
        let size = self.font.size;
        if !(size.is_finite() && size > 0.0) {
            return Err(LayoutError::InvalidFontSize(size));
        }
        Ok(())
    }
}

/// `codegrid/config.toml` under the platform config directory
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("codegrid").join("config.toml"))
}
