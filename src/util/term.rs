// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Terminal lifecycle.
//!
//! The application window is the terminal's alternate screen with mouse
//! capture enabled, so pointer motion, clicks and the wheel all arrive as
//! terminal events.

use std::io::{self, Stdout, Write};

use anyhow::{Context, Result};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::theme::Theme;

pub(crate) type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Prepares the terminal for the application window.
///
/// This function performs the following side effects:
/// * Sets the terminal background colour to the theme background.
/// * Enables raw mode to capture all keyboard input.
/// * Switches to the alternate screen buffer and enables mouse capture.
///
/// # Errors
///
/// Returns an error if raw mode cannot be enabled or if the alternate screen
/// cannot be entered.
pub(crate) fn setup_terminal(theme: &Theme) -> Result<Tui> {
    // Without this the window gets a thin outline in the terminal's own colour
    set_terminal_bg(&Theme::to_hex(theme.background_colour));

    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to enter alternate screen")?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;

    Ok(terminal)
}

/// Restores the terminal to its original state.
///
/// This is best-effort and never fails, it is called on the way out whether or
/// not the event loop returned an error.
pub(crate) fn restore_terminal(terminal: &mut Tui) {
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )
    .ok();
    reset_terminal_bg();
    terminal.show_cursor().ok();
}

fn set_terminal_bg(hex_color: &str) {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]11;{}\x07", hex_color).ok();
    stdout.flush().ok();
}

fn reset_terminal_bg() {
    let mut stdout = io::stdout();
    write!(stdout, "\x1b]111\x07").ok();
    stdout.flush().ok();
}
