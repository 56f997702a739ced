//! Test support utilities for bannerfont.
//!
//! This module provides helper types and functions that are useful for testing
//! banner rendering, but are not part of the public API.

use crate::{
    glyph::{FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR},
    BannerFont, BannerTarget, RenderError,
};

/// A memory buffer target useful for tests.
///
/// Captures every output line separately so rows can be inspected.
pub struct BufferTarget {
    pub lines: Vec<String>,
}

impl BufferTarget {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
        }
    }
}

impl Default for BufferTarget {
    fn default() -> Self {
        Self::new()
    }
}

impl BannerTarget for BufferTarget {
    type Error = RenderError;

    fn push_fragment(&mut self, fragment: &str) -> std::result::Result<(), Self::Error> {
        if let Some(line) = self.lines.last_mut() {
            line.push_str(fragment);
        }
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.lines.push(String::new());
        Ok(())
    }
}

/// Row `row` of `ch` in the synthetic font, e.g. `[A3]`. The last row is
/// blank, as in real banner fonts.
pub fn synthetic_row(ch: char, row: usize) -> String {
    if row + 1 == GLYPH_HEIGHT {
        String::new()
    } else {
        format!("[{ch}{row}]")
    }
}

/// Full text of a font resource whose glyph rows are [`synthetic_row`]s for
/// every printable ASCII character.
pub fn synthetic_font_text() -> String {
    let mut out = String::from("synthetic banner\n");
    for ch in (FIRST_CHAR..=LAST_CHAR).filter_map(char::from_u32) {
        for row in 0..GLYPH_HEIGHT {
            out.push_str(&synthetic_row(ch, row));
            out.push('\n');
        }
    }
    out
}

pub fn synthetic_font(name: &str) -> BannerFont {
    BannerFont::from_lines(name, synthetic_font_text().lines())
}

/// The nine-row block the synthetic font renders for one line of text.
pub fn synthetic_block(text: &str) -> Vec<String> {
    (0..GLYPH_HEIGHT)
        .map(|row| text.chars().map(|ch| synthetic_row(ch, row)).collect())
        .collect()
}
