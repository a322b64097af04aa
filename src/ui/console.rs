// Console output - colored status lines, screen clearing and key presses
//
// The controller writes through the `Console` trait; `TerminalConsole` is the
// crossterm-backed implementation used by the binary.

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use std::io::{self, IsTerminal, Stdout};

/// Severity of a console line, rendered as a color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Info,
    Success,
    Warning,
    Error,
}

impl Tone {
    pub fn color(self) -> Color {
        match self {
            Self::Info => Color::Cyan,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// The interactive surface the controller talks to.
#[cfg_attr(test, mockall::automock)]
pub trait Console {
    fn write_line(&mut self, message: &str, tone: Tone);
    fn blank_line(&mut self);
    fn clear(&mut self);
    /// Block until the user presses a key
    fn wait_for_key(&mut self);
}

/// Console backed by the real terminal.
///
/// Output failures are logged and otherwise ignored; a broken terminal should
/// not stop files from being processed.
pub struct TerminalConsole {
    out: Stdout,
}

impl TerminalConsole {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }

    fn read_line_fallback() {
        let mut line = String::new();
        if let Err(e) = io::stdin().read_line(&mut line) {
            tracing::warn!("Failed to read from stdin: {}", e);
        }
    }
}

impl Default for TerminalConsole {
    fn default() -> Self {
        Self::new()
    }
}

impl Console for TerminalConsole {
    fn write_line(&mut self, message: &str, tone: Tone) {
        let result = execute!(
            self.out,
            SetForegroundColor(tone.color()),
            Print(message),
            ResetColor,
            Print("\n")
        );

        if let Err(e) = result {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }

    fn blank_line(&mut self) {
        if let Err(e) = execute!(self.out, Print("\n")) {
            tracing::warn!("Failed to write to console: {}", e);
        }
    }

    fn clear(&mut self) {
        if let Err(e) = execute!(self.out, Clear(ClearType::All), MoveTo(0, 0)) {
            tracing::warn!("Failed to clear console: {}", e);
        }
    }

    fn wait_for_key(&mut self) {
        // Piped or redirected stdin: a newline (or EOF) stands in for a key
        if !io::stdin().is_terminal() {
            Self::read_line_fallback();
            return;
        }

        if let Err(e) = terminal::enable_raw_mode() {
            tracing::debug!("Raw mode unavailable ({}), waiting for Enter instead", e);
            Self::read_line_fallback();
            return;
        }

        loop {
            match event::read() {
                Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => break,
                Ok(_) => continue,
                Err(e) => {
                    tracing::warn!("Failed to read key press: {}", e);
                    break;
                }
            }
        }

        if let Err(e) = terminal::disable_raw_mode() {
            tracing::warn!("Failed to restore terminal mode: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_colors() {
        assert_eq!(Tone::Info.color(), Color::Cyan);
        assert_eq!(Tone::Success.color(), Color::Green);
        assert_eq!(Tone::Warning.color(), Color::Yellow);
        assert_eq!(Tone::Error.color(), Color::Red);
    }
}
