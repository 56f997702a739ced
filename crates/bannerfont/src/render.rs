//! Text to banner composition.
use crate::{
    error::{InputError, RenderError, Result},
    font::BannerFont,
    glyph::{glyph_line, MissingGlyph, RenderOptions, GLYPH_HEIGHT},
    BannerTarget, StringTarget,
};

/// Accept only non-empty, pure ASCII text.
pub fn validate_text(text: &str) -> std::result::Result<(), InputError> {
    if text.is_empty() {
        return Err(InputError::Empty);
    }
    match text.char_indices().find(|(_, ch)| !ch.is_ascii()) {
        Some((position, ch)) => Err(InputError::NonAscii { ch, position }),
        None => Ok(()),
    }
}

/// Split text on `\n`. A `\r` directly before a `\n` belongs to the line
/// break; any other `\r` stays in its line.
pub fn split_text_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len() - 1;
    lines
        .into_iter()
        .enumerate()
        .map(|(i, l)| match l.strip_suffix('\r') {
            Some(stripped) if i < last => stripped,
            _ => l,
        })
        .collect()
}

/// Render `text` with `font` into a single string.
///
/// Nothing is returned unless the whole text rendered.
pub fn render_text(font: &BannerFont, text: &str, options: &RenderOptions) -> Result<String> {
    let mut target = StringTarget::new();
    render_to(font, &mut target, text, options)?;
    Ok(target.into_string())
}

/// Render `text` onto an arbitrary target.
///
/// A non-empty text line becomes [`GLYPH_HEIGHT`] rows with a line break
/// between rows. A line break follows every text line but the last, and an
/// empty text line is a bare line break. The empty line left by a terminal
/// line break is skipped. In banner fonts row 8 of every glyph is blank, so
/// consecutive blocks end up one blank line apart.
pub fn render_to<T>(
    font: &BannerFont,
    target: &mut T,
    text: &str,
    options: &RenderOptions,
) -> Result<()>
where
    T: BannerTarget,
    T::Error: std::fmt::Display,
{
    validate_text(text)?;
    let lines = split_text_lines(text);
    let last = lines.len() - 1;
    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            if i > 0 && i == last {
                continue;
            }
            next_line(target)?;
            continue;
        }
        let glyphs = line
            .chars()
            .map(|ch| glyph_rows(font, ch, options))
            .collect::<Result<Vec<_>>>()?;
        for row in 0..GLYPH_HEIGHT {
            for rows in &glyphs {
                target
                    .push_fragment(rows[row])
                    .map_err(|e| RenderError::Target(e.to_string()))?;
            }
            if row + 1 < GLYPH_HEIGHT {
                next_line(target)?;
            }
        }
        if i < last {
            next_line(target)?;
        }
    }
    Ok(())
}

fn next_line<T>(target: &mut T) -> Result<()>
where
    T: BannerTarget,
    T::Error: std::fmt::Display,
{
    target
        .next_line()
        .map_err(|e| RenderError::Target(e.to_string()))
}

// Rows of `ch`, with absent rows empty or fatal per the missing-glyph policy.
fn glyph_rows<'f>(
    font: &'f BannerFont,
    ch: char,
    options: &RenderOptions,
) -> Result<[&'f str; GLYPH_HEIGHT]> {
    if let Some(glyph) = font.glyph(ch) {
        return Ok(glyph.rows);
    }
    let mut rows = [""; GLYPH_HEIGHT];
    for (row, slot) in rows.iter_mut().enumerate() {
        match glyph_line(ch, row).and_then(|n| font.line(n)) {
            Some(fragment) => *slot = fragment,
            None if options.missing_glyph == MissingGlyph::Empty => {}
            None => return Err(RenderError::GlyphNotFound { ch, row }),
        }
    }
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_rejects_empty_and_non_ascii() {
        assert_eq!(validate_text(""), Err(InputError::Empty));
        assert_eq!(
            validate_text("ab\u{e9}"),
            Err(InputError::NonAscii {
                ch: '\u{e9}',
                position: 2
            })
        );
        assert_eq!(validate_text("plain ~ text\n"), Ok(()));
        assert_eq!(validate_text("\u{7f}"), Ok(()));
    }

    #[test]
    fn split_keeps_every_segment() {
        assert_eq!(split_text_lines("A"), vec!["A"]);
        assert_eq!(split_text_lines("A\n"), vec!["A", ""]);
        assert_eq!(split_text_lines("A\n\n"), vec!["A", "", ""]);
        assert_eq!(split_text_lines("\n"), vec!["", ""]);
    }

    #[test]
    fn split_strips_only_crlf_carriage_returns() {
        assert_eq!(split_text_lines("A\r\nB\r\n"), vec!["A", "B", ""]);
        assert_eq!(split_text_lines("\r\n"), vec!["", ""]);
        assert_eq!(split_text_lines("A\r"), vec!["A\r"]);
        assert_eq!(split_text_lines("A\rB\n"), vec!["A\rB", ""]);
    }
}
