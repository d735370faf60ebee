//! Configuration system
//!
//! Settings for glyph cell size, draw defaults and icon asset naming. Files
//! are read as TOML or RON depending on their extension.

pub use serde::{Serialize, Deserialize};

use crate::foundation::math::Vec4;
use crate::gizmo::alignment::TextAlignment;

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        let config = Self::from_str_with_format(&contents, path)?;
        log::info!("Loaded configuration from {}", path);
        Ok(config)
    }

    /// Parse configuration text, picking the format from the file name
    fn from_str_with_format(contents: &str, path: &str) -> Result<Self, ConfigError> {
        if path.ends_with(".toml") {
            toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Default glyph cell width in screen units, the native width of the baked images
pub const DEFAULT_CELL_WIDTH: f32 = 8.0;

/// Default glyph cell height in screen units, the native height of the baked images
pub const DEFAULT_CELL_HEIGHT: f32 = 11.0;

/// Default icon path prefix; the character and extension are appended
pub const DEFAULT_ICON_PREFIX: &str = "TextGizmo/CharacterImages/text_";

/// Default icon file extension
pub const DEFAULT_ICON_EXTENSION: &str = ".png";

/// Size of one glyph cell on screen
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    /// Horizontal advance per glyph
    pub width: f32,
    /// Vertical advance per line
    pub height: f32,
}

impl Default for CellSize {
    fn default() -> Self {
        Self {
            width: DEFAULT_CELL_WIDTH,
            height: DEFAULT_CELL_HEIGHT,
        }
    }
}

/// Text gizmo settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextGizmoConfig {
    /// Glyph cell size in screen units
    pub cell: CellSize,

    /// Alignment used when a draw call does not pass one
    pub default_alignment: TextAlignment,

    /// Color used when a draw call does not pass one (RGBA).
    ///
    /// Zero, i.e. transparent black, unless configured otherwise.
    pub default_color: Vec4,

    /// Icon asset path prefix
    pub icon_prefix: String,

    /// Icon asset file extension
    pub icon_extension: String,
}

impl Default for TextGizmoConfig {
    fn default() -> Self {
        Self {
            cell: CellSize::default(),
            default_alignment: TextAlignment::default(),
            default_color: Vec4::zeros(),
            icon_prefix: DEFAULT_ICON_PREFIX.to_string(),
            icon_extension: DEFAULT_ICON_EXTENSION.to_string(),
        }
    }
}

impl Config for TextGizmoConfig {}
