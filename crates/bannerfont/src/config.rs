//! Renderer configuration, read from TOML.
//!
//! ```toml
//! font_dir = "banners"
//! extension = "txt"
//! default_banner = "standard"
//! cache_fonts = false
//! missing_glyph = "empty"
//! ```

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    error::{RenderError, Result},
    glyph::{MissingGlyph, RenderOptions},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory holding the banner font resources
    pub font_dir: PathBuf,
    /// File extension of a font resource, without the dot
    pub extension: String,
    /// Banner used when the caller names none
    pub default_banner: String,
    /// Keep loaded fonts in memory between renders
    pub cache_fonts: bool,
    /// Handling of glyph rows past the end of a font
    pub missing_glyph: MissingGlyph,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            font_dir: PathBuf::from("banners"),
            extension: "txt".to_string(),
            default_banner: "standard".to_string(),
            cache_fonts: false,
            missing_glyph: MissingGlyph::default(),
        }
    }
}

impl Config {
    /// Read a config file. A relative `font_dir` is resolved against the
    /// directory containing the file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RenderError::Config(format!("{}: {e}", path.display())))?;
        let mut config = Self::from_toml_str(&content)?;
        if config.font_dir.is_relative() {
            if let Some(parent) = path.parent() {
                config.font_dir = parent.join(&config.font_dir);
            }
        }
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| RenderError::Config(e.to_string()))
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            missing_glyph: self.missing_glyph,
        }
    }
}
