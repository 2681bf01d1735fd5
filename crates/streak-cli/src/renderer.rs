//! Terminal rendering for markdown output and operation statuses.
//!
//! Uses termimad for rich output with a plain-text fallback.

use anyhow::Result;
use streak_core::OperationStatus;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::AnsiValue(208));
        skin.bold.set_fg(Color::AnsiValue(215));
        skin.italic.set_fg(Color::Cyan);

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if let Some(header) = line.strip_prefix("# ") {
                    println!("\x1b[1;38;5;208m{header}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{}", Self::plain(markdown));
        }
        Ok(())
    }

    /// Print a successful status on stdout. Failures go to stderr.
    pub fn render_status(&self, status: &OperationStatus) -> Result<()> {
        match status.as_pair() {
            (true, message) => self.render(&format!("{message}\n")),
            (false, message) => {
                if self.rich_enabled {
                    eprintln!("\x1b[31m{message}\x1b[0m");
                } else {
                    eprintln!("{message}");
                }
                Ok(())
            }
        }
    }

    /// Strips bold markers and header hashes.
    fn plain(markdown: &str) -> String {
        markdown
            .lines()
            .map(|line| {
                let line = line.trim_start_matches("# ");
                format!("{}\n", line.replace("**", ""))
            })
            .collect()
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_plain_strips_markup() {
        assert_eq!(
            TerminalRenderer::plain("# Ada's habits\n\n1. **Read** 🔥\n"),
            "Ada's habits\n\n1. Read 🔥\n"
        );
    }
}
