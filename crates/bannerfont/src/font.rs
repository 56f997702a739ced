#[cfg(feature = "zip")]
use std::io::{Cursor, Read};
use std::{fs, path::Path};

use crate::{
    error::{RenderError, Result},
    glyph::{glyph_line, Glyph, FIRST_CHAR, GLYPH_HEIGHT, LAST_CHAR},
};

/// A banner font: the full line sequence of one font resource.
///
/// Lines are addressed 1-based, exactly as a line scanner would count them
/// from the start of the resource. The first line is a header that never
/// takes part in rendering; glyph blocks follow in ascending code point order
/// (see [`glyph_line`]).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BannerFont {
    name: String,
    lines: Vec<String>,
}

impl BannerFont {
    pub fn from_lines<I, S>(name: impl Into<String>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Load a font resource from disk. The font is named after the file stem.
    pub fn load(path: &Path) -> Result<Self> {
        let name = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let bytes = fs::read(path).map_err(|e| RenderError::font_read(&name, path, e))?;
        let font = Self::from_bytes(name, &bytes)?;
        log::debug!(
            "loaded banner '{}' from {} ({} lines)",
            font.name,
            path.display(),
            font.lines.len()
        );
        Ok(font)
    }

    /// Decode a font resource. Zip archives (`PK\x03\x04`) are searched for
    /// their first `.txt` member.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Result<Self> {
        let name = name.into();
        #[cfg(feature = "zip")]
        if bytes.len() >= 4 && &bytes[0..4] == b"PK\x03\x04" {
            let content = Self::unzip_content(bytes)?;
            return Ok(Self::parse_content(name, &content));
        }
        let content = std::str::from_utf8(bytes)
            .map_err(|e| RenderError::InvalidFontData(format!("utf8 error: {e}")))?;
        Ok(Self::parse_content(name, content))
    }

    #[cfg(feature = "zip")]
    fn unzip_content(bytes: &[u8]) -> Result<String> {
        let mut archive = zip::ZipArchive::new(Cursor::new(bytes))
            .map_err(|e| RenderError::InvalidFontData(format!("zip open error: {e}")))?;
        for i in 0..archive.len() {
            let mut file = archive
                .by_index(i)
                .map_err(|e| RenderError::InvalidFontData(format!("zip entry error: {e}")))?;
            if file.name().ends_with(".txt") {
                let mut buf = String::new();
                file.read_to_string(&mut buf)
                    .map_err(|e| RenderError::InvalidFontData(format!("zip read error: {e}")))?;
                return Ok(buf);
            }
        }
        Err(RenderError::InvalidFontData(
            "zip archive contained no .txt".into(),
        ))
    }

    fn parse_content(name: String, content: &str) -> Self {
        let lines = content
            .lines()
            .map(|l| l.strip_suffix('\r').unwrap_or(l).to_string())
            .collect();
        Self { name, lines }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Line 1 of the resource, if any.
    pub fn header(&self) -> Option<&str> {
        self.line(1)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Content of the 1-based line `number`, or `None` past the end.
    pub fn line(&self, number: usize) -> Option<&str> {
        number
            .checked_sub(1)
            .and_then(|idx| self.lines.get(idx))
            .map(String::as_str)
    }

    pub fn has_char(&self, ch: char) -> bool {
        glyph_line(ch, GLYPH_HEIGHT - 1).is_some_and(|last| last <= self.lines.len())
    }

    /// The full glyph block for `ch`, or `None` when any of its rows is missing.
    pub fn glyph(&self, ch: char) -> Option<Glyph<'_>> {
        if !self.has_char(ch) {
            return None;
        }
        let mut rows = [""; GLYPH_HEIGHT];
        for (row, slot) in rows.iter_mut().enumerate() {
            *slot = self.line(glyph_line(ch, row)?)?;
        }
        Some(Glyph { ch, rows })
    }

    /// Number of printable ASCII characters with a complete glyph block.
    pub fn glyph_count(&self) -> usize {
        (FIRST_CHAR..=LAST_CHAR)
            .filter_map(char::from_u32)
            .filter(|&ch| self.has_char(ch))
            .count()
    }

    /// Printable ASCII characters whose glyph block is incomplete.
    pub fn missing_chars(&self) -> Vec<char> {
        (FIRST_CHAR..=LAST_CHAR)
            .filter_map(char::from_u32)
            .filter(|&ch| !self.has_char(ch))
            .collect()
    }
}
