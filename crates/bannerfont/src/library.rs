//! Named access to a directory of banner fonts.
use std::{
    collections::HashMap,
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, PoisonError},
};

use crate::{
    config::Config,
    error::{RenderError, Result},
    font::BannerFont,
    glyph::RenderOptions,
    render::{render_text, validate_text},
};

/// Resolves banner names to `<dir>/<name>.<extension>` and renders with them.
///
/// Without a cache every call re-reads the font resource, so edits on disk
/// show up on the next render. With the cache enabled each font is read once
/// and shared as an immutable `Arc<BannerFont>`.
pub struct FontLibrary {
    dir: PathBuf,
    extension: String,
    options: RenderOptions,
    cache: Option<Mutex<HashMap<String, Arc<BannerFont>>>>,
}

impl FontLibrary {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: "txt".to_string(),
            options: RenderOptions::default(),
            cache: None,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.font_dir)
            .with_extension(&config.extension)
            .with_options(config.render_options())
            .with_cache(config.cache_fonts)
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }

    pub fn with_cache(mut self, enabled: bool) -> Self {
        self.cache = enabled.then(|| Mutex::new(HashMap::new()));
        self
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Path of the resource for `name`. Names that could escape the font
    /// directory are refused.
    pub fn font_path(&self, name: &str) -> Result<PathBuf> {
        if name.is_empty() || name == "." || name == ".." || name.contains(['/', '\\', '\0']) {
            return Err(RenderError::InvalidFontName(name.to_string()));
        }
        Ok(self.dir.join(format!("{name}.{}", self.extension)))
    }

    pub fn load(&self, name: &str) -> Result<Arc<BannerFont>> {
        let path = self.font_path(name)?;
        let Some(cache) = &self.cache else {
            return Ok(Arc::new(BannerFont::load(&path)?));
        };
        if let Some(font) = cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
        {
            log::trace!("banner '{name}' served from cache");
            return Ok(Arc::clone(font));
        }
        // Loaded outside the lock; a concurrent load of the same font is harmless.
        let font = Arc::new(BannerFont::load(&path)?);
        cache
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.to_string(), Arc::clone(&font));
        Ok(font)
    }

    /// Render `text` with the banner called `name`.
    ///
    /// The text is checked before any font access, so bad input is reported
    /// as such even when the banner does not exist.
    pub fn render(&self, text: &str, name: &str) -> Result<String> {
        validate_text(text)?;
        let font = self.load(name)?;
        render_text(&font, text, &self.options)
    }

    /// Sorted names of all banners in the directory.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries =
            fs::read_dir(&self.dir).map_err(|e| RenderError::font_read("", &self.dir, e))?;
        let mut names = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|e| RenderError::font_read("", &self.dir, e))?
                .path();
            if !path.is_file() {
                continue;
            }
            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Drop every cached font. No-op without a cache.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.lock().unwrap_or_else(PoisonError::into_inner).clear();
        }
    }
}
