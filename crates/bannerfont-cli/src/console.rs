use bannerfont::{render_to, BannerFont, BannerTarget, RenderOptions, Result};

/// Builds terminal output, optionally wrapping every row in a 256-color
/// foreground escape.
pub struct ConsoleRenderer {
    out: String,
    fg: Option<u8>,
    line_open: bool,
}

impl ConsoleRenderer {
    pub fn new(fg: Option<u8>) -> Self {
        Self {
            out: String::new(),
            fg,
            line_open: false,
        }
    }

    fn close_line(&mut self) {
        if self.line_open && self.fg.is_some() {
            self.out.push_str("\x1B[0m");
        }
        self.line_open = false;
    }

    pub fn into_string(mut self) -> String {
        self.close_line();
        self.out
    }
}

impl BannerTarget for ConsoleRenderer {
    type Error = std::fmt::Error;

    fn push_fragment(&mut self, fragment: &str) -> std::result::Result<(), Self::Error> {
        if fragment.is_empty() {
            return Ok(());
        }
        if !self.line_open {
            if let Some(fg) = self.fg {
                self.out.push_str(&format!("\x1B[38;5;{fg}m"));
            }
            self.line_open = true;
        }
        self.out.push_str(fragment);
        Ok(())
    }

    fn next_line(&mut self) -> std::result::Result<(), Self::Error> {
        self.close_line();
        self.out.push('\n');
        Ok(())
    }
}

/// Convenience: render text into a String, colored when `fg` is set.
pub fn render_to_console(
    font: &BannerFont,
    text: &str,
    options: &RenderOptions,
    fg: Option<u8>,
) -> Result<String> {
    let mut renderer = ConsoleRenderer::new(fg);
    render_to(font, &mut renderer, text, options)?;
    Ok(renderer.into_string())
}
