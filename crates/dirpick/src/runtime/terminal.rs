use std::io;

use crossterm::cursor::Show;
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::runtime::TuiTerminal;

/// Restores terminal state on all exit paths after raw mode is enabled.
///
/// Cleanup runs from `Drop`, so early `?` returns and unwinding panics
/// leave the shell usable.
pub(crate) struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = restore_terminal();
    }
}

/// Enables raw mode, enters the alternate screen, and turns on bracketed paste
/// so pasted queries arrive as `Event::Paste`.
pub(crate) fn setup_terminal() -> io::Result<TuiTerminal> {
    enter_terminal()?;
    let backend = CrosstermBackend::new(io::stdout());

    Terminal::new(backend)
}

/// Hands the terminal back to the shell while an open command runs.
pub(crate) fn suspend_terminal() -> io::Result<()> {
    restore_terminal()
}

/// Takes the terminal back after [`suspend_terminal`] and forces a full
/// redraw on the next frame.
pub(crate) fn resume_terminal(terminal: &mut TuiTerminal) -> io::Result<()> {
    enter_terminal()?;

    terminal.clear()
}

fn enter_terminal() -> io::Result<()> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)
}

fn restore_terminal() -> io::Result<()> {
    let raw_mode_result = disable_raw_mode();
    let mut stdout = io::stdout();
    execute!(stdout, DisableBracketedPaste, LeaveAlternateScreen, Show)?;

    raw_mode_result
}
