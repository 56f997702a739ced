//! bannerfont: large ASCII art banners from flat, line-addressed fonts.
//!
//! A banner font is a plain text file. Line 1 is a header; from line 2 on,
//! every printable ASCII character owns a block of nine consecutive lines.
//! Rendering looks up each character's rows and concatenates them left to
//! right, one nine-row block per line of input text.

pub mod config;
mod error;
mod font;
mod glyph;
pub mod library;
pub mod render;
pub use config::Config;
pub use error::{ErrorKind, InputError, RenderError, Result};
pub use font::BannerFont;
pub use glyph::{
    glyph_line, Glyph, MissingGlyph, RenderOptions, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR,
};
pub use library::FontLibrary;
pub use render::{render_text, render_to};

// Test utilities
pub mod test_support;

/// Sink for rendered banner output.
///
/// The renderer emits fragments for the current output line and calls
/// [`next_line`](BannerTarget::next_line) for every line break it writes.
pub trait BannerTarget {
    type Error;
    fn push_fragment(&mut self, fragment: &str) -> std::result::Result<(), Self::Error>;
    fn next_line(&mut self) -> std::result::Result<(), Self::Error>;
}

/// Collects output into a single newline-joined string.
#[derive(Debug, Default)]
pub struct StringTarget {
    out: String,
}

impl StringTarget {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_string(self) -> String {
        self.out
    }
}

impl BannerTarget for StringTarget {
    type Error = std::convert::Infallible;

    fn push_fragment(&mut self, fragment: &str) -> std::result::Result<(), Self::Error> {
        self.out.push_str(fragment);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.out.push('\n');
        Ok(())
    }
}
