//! Raw-mode terminal for the UI
//!
//! The UI draws on the alternate screen. Whatever happens (normal exit,
//! error or panic) the user's shell gets its screen, echo and cursor back.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::error::Result;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Take over the terminal
///
/// Raw mode is rolled back if the alternate screen cannot be entered.
pub fn setup_terminal() -> Result<Tui> {
    enable_raw_mode()?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e.into());
    }

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal(mut terminal: Tui) -> Result<()> {
    hand_back(terminal.backend_mut())?;
    Ok(())
}

/// Hand the terminal back before the default panic message prints
pub fn install_panic_hook() {
    let report = std::panic::take_hook();

    std::panic::set_hook(Box::new(move |info| {
        let _ = hand_back(&mut io::stdout());
        report(info);
    }));
}

fn hand_back<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, Show)?;
    disable_raw_mode()
}
