use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use goldrun::application::WatchEvent;
use goldrun::presentation::SeparatorStyle;

/// Renders watch events to the terminal: optional screen clear before each
/// run and a pass/fail separator after it.
pub struct WatchPrinter<W: Write> {
    out: W,
    style: SeparatorStyle,
    clear: bool,
}

impl<W: Write> WatchPrinter<W> {
    pub fn new(out: W, style: SeparatorStyle, clear: bool) -> Self {
        Self { out, style, clear }
    }

    pub fn handle(&mut self, event: &WatchEvent) -> io::Result<()> {
        match event {
            WatchEvent::Changed { .. } if self.clear => {
                queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
                self.out.flush()
            }
            WatchEvent::RunFinished { success } => {
                writeln!(self.out, "{}", self.style.render(*success))?;
                self.out.flush()
            }
            WatchEvent::Started { .. } | WatchEvent::Changed { .. } | WatchEvent::PollFailed { .. } => {
                Ok(())
            }
        }
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }
}
