use serde::{Deserialize, Serialize};

/// Number of rows in every glyph block.
pub const GLYPH_HEIGHT: usize = 9;
/// First code point with a glyph block (space).
pub const FIRST_CHAR: u32 = 32;
/// Last printable ASCII code point (`~`).
pub const LAST_CHAR: u32 = 126;
// Line number of row 0 of the space glyph; line 1 is the font header.
const GLYPH_OFFSET: usize = 2;

/// 1-based font line holding `row` of the glyph for `ch`.
///
/// Returns `None` for control characters and rows outside the glyph block,
/// neither of which can be addressed inside a font resource.
pub fn glyph_line(ch: char, row: usize) -> Option<usize> {
    let code = ch as u32;
    if code < FIRST_CHAR || row >= GLYPH_HEIGHT {
        return None;
    }
    Some(GLYPH_OFFSET + GLYPH_HEIGHT * (code - FIRST_CHAR) as usize + row)
}

#[derive(Clone, Debug, Default)]
pub struct RenderOptions {
    pub missing_glyph: MissingGlyph,
}

impl RenderOptions {
    pub fn lenient() -> Self {
        RenderOptions::default()
    }

    pub fn strict() -> Self {
        Self {
            missing_glyph: MissingGlyph::Error,
        }
    }
}

/// What to do when a glyph row lies past the end of the font resource.
#[derive(Copy, Clone, Default, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingGlyph {
    /// Contribute an empty fragment and keep going.
    #[default]
    Empty,
    /// Abort with `RenderError::GlyphNotFound`.
    Error,
}

/// The rows of one character, borrowed from a loaded font.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph<'a> {
    pub ch: char,
    pub rows: [&'a str; GLYPH_HEIGHT],
}

impl Glyph<'_> {
    /// Widest row, in characters.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| r.chars().count()).max().unwrap_or(0)
    }
}
