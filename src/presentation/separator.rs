//! Watch-run separator line
//!
//! After every watch-triggered run a full-width line of dashes is printed:
//! green when the run passed, reverse-video red when it failed.

use crossterm::style::Stylize;

/// Terminal width used when the real width cannot be determined
pub const DEFAULT_WIDTH: usize = 80;

/// How separators are drawn; built once at startup from the terminal
/// capabilities and handed to the watcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparatorStyle {
    pub width: usize,
    pub color: bool,
}

impl Default for SeparatorStyle {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            color: false,
        }
    }
}

impl SeparatorStyle {
    pub fn new(width: usize, color: bool) -> Self {
        let width = if width == 0 { DEFAULT_WIDTH } else { width };
        Self { width, color }
    }

    /// Render the separator line (without trailing newline)
    pub fn render(&self, success: bool) -> String {
        let line = "-".repeat(self.width);
        if !self.color {
            return line;
        }
        if success {
            format!("{}", line.as_str().green())
        } else {
            format!("{}", line.as_str().red().reverse())
        }
    }
}
