use std::{io, path::PathBuf};

use thiserror::Error;

/// Why a piece of input text was refused before rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("text is empty")]
    Empty,
    #[error("non-ASCII character {ch:?} at position {position}")]
    NonAscii { ch: char, position: usize },
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),
    #[error("failed to read banner '{name}' from {}: {source}", path.display())]
    FontRead {
        name: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid banner name: {0:?}")]
    InvalidFontName(String),
    #[error("invalid banner data: {0}")]
    InvalidFontData(String),
    #[error("banner has no row {row} for {ch:?}")]
    GlyphNotFound { ch: char, row: usize },
    #[error("render target error: {0}")]
    Target(String),
    #[error("configuration error: {0}")]
    Config(String),
}

/// Coarse classification used by adapters to pick a client or server failure.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller's text was rejected.
    InvalidInput,
    /// The banner could not be found, read or decoded.
    FontRead,
}

impl RenderError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::InvalidInput(_) => ErrorKind::InvalidInput,
            RenderError::FontRead { .. }
            | RenderError::InvalidFontName(_)
            | RenderError::InvalidFontData(_)
            | RenderError::GlyphNotFound { .. }
            | RenderError::Target(_)
            | RenderError::Config(_) => ErrorKind::FontRead,
        }
    }

    pub(crate) fn font_read(name: &str, path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::FontRead {
            name: name.to_string(),
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, RenderError>;
