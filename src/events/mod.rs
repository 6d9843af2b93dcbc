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

//! The main event loop.
//!
//! The loop is single-threaded and runs at a fixed tick rate. Each tick:
//!
//! 1. drains every pending terminal event and dispatches it synchronously,
//! 2. reconciles the player with the audio backend,
//! 3. redraws the whole window once,
//! 4. sleeps until the next tick boundary.
//!
//! A command that blocks (the folder chooser) blocks the whole loop, no
//! redraws or input happen for the main window until it returns.

mod handlers;

use std::{
    ops::ControlFlow,
    thread,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::{
    App,
    components::ButtonName,
    picker::{FolderPicker, TerminalFolderPicker},
    player::AudioOutput,
    render::draw,
    util::term::Tui,
};

use handlers::{handle_button, handle_pointer_event, handle_tick};

/// What a terminal event means to the application as a whole.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum AppEvent {
    Quit,
    Shortcut(ButtonName),
    /// A key with no meaning of its own; dismisses a notice.
    OtherKey,
    /// Mouse input, routed to the components.
    Pointer(Event),
    Ignored,
}

impl AppEvent {
    pub(crate) fn from_terminal(event: Event) -> Self {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => Self::from_key(key),
            Event::Mouse(_) => AppEvent::Pointer(event),
            _ => AppEvent::Ignored,
        }
    }

    fn from_key(key: KeyEvent) -> Self {
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => AppEvent::Quit,
            (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => AppEvent::Quit,
            (KeyCode::Char(c), _) => match ButtonName::from_shortcut(c) {
                Some(button) => AppEvent::Shortcut(button),
                None => AppEvent::OtherKey,
            },
            _ => AppEvent::OtherKey,
        }
    }
}

/// Runs the main application loop until a quit event arrives.
///
/// # Errors
///
/// Returns an error if the terminal cannot be read from or drawn to.
pub(crate) fn run_event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let tick = app.config.tick_duration();
    log::debug!("Event loop running, tick {:?}", tick);

    loop {
        let deadline = Instant::now() + tick;

        while event::poll(Duration::ZERO)? {
            let event = event::read()?;
            let mut picker = TerminalFolderPicker::new(terminal, app.theme);
            if process_event(app, &mut picker, event)?.is_break() {
                return Ok(());
            }
        }

        handle_tick(app);

        terminal.draw(|f| draw(f, app))?;

        thread::sleep(deadline.saturating_duration_since(Instant::now()));
    }
}

/// Applies one terminal event to the application.
///
/// While a notice is shown, a key or click only dismisses it.
fn process_event<A: AudioOutput>(
    app: &mut App<A>,
    picker: &mut dyn FolderPicker,
    event: Event,
) -> Result<ControlFlow<()>> {
    match AppEvent::from_terminal(event) {
        AppEvent::Quit => {
            log::info!("Quit requested");
            return Ok(ControlFlow::Break(()));
        }

        AppEvent::Shortcut(button) => {
            if app.notice.take().is_none() {
                handle_button(app, picker, button)?;
            }
        }

        AppEvent::OtherKey => {
            app.notice = None;
        }

        AppEvent::Pointer(event) => handle_pointer_event(app, picker, &event)?,

        AppEvent::Ignored => {}
    }

    Ok(ControlFlow::Continue(()))
}
