//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text.

use anyhow::Result;
use serde::Serialize;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich, plain and JSON output
pub struct TerminalRenderer {
    mode: OutputMode,
    skin: MadSkin,
}

/// How results are written to stdout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Rich,
    Plain,
    Json,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(mode: OutputMode) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { mode, skin }
    }

    pub fn mode(&self) -> OutputMode {
        self.mode
    }

    /// Render a result: markdown from its Display output, or its JSON form
    pub fn render<M, J>(&self, markdown: &M, json: &J) -> Result<()>
    where
        M: std::fmt::Display + ?Sized,
        J: Serialize + ?Sized,
    {
        match self.mode {
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(json)?);
            }
            OutputMode::Rich => {
                for line in markdown.to_string().lines() {
                    if line.starts_with('#') {
                        println!("\x1b[34m{line}\x1b[0m");
                    } else {
                        self.skin.print_inline(line);
                        println!();
                    }
                }
            }
            OutputMode::Plain => {
                print!("{markdown}");
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(OutputMode::Rich)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(OutputMode::Plain);
        assert_eq!(renderer.mode(), OutputMode::Plain);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert_eq!(renderer.mode(), OutputMode::Rich);
    }

    #[test]
    fn test_render_plain_and_json() {
        let renderer = TerminalRenderer::new(OutputMode::Plain);
        assert!(renderer.render("# Header\n", &["a", "b"]).is_ok());

        let renderer = TerminalRenderer::new(OutputMode::Json);
        assert!(renderer.render("ignored", &serde_json::json!({"id": 1})).is_ok());
    }
}
