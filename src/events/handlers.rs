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

use anyhow::{Context, Result};
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};

use crate::{
    App, components::ButtonName, error::PlayerError, picker::FolderPicker, player::AudioOutput,
};

/// Runs the command bound to `button`.
pub(super) fn handle_button<A: AudioOutput>(
    app: &mut App<A>,
    picker: &mut dyn FolderPicker,
    button: ButtonName,
) -> Result<()> {
    log::debug!("Button {:?}", button);

    let result = match button {
        ButtonName::Play => app.player.play(),
        ButtonName::Pause => app.player.pause(),
        ButtonName::Stop => app.player.stop(),
        ButtonName::Next => app.player.next(),
        ButtonName::Prev => app.player.prev(),
        ButtonName::SelectFolder => handle_select_folder(app, picker),
    };

    report(app, result)
}

fn handle_select_folder<A: AudioOutput>(
    app: &mut App<A>,
    picker: &mut dyn FolderPicker,
) -> Result<(), PlayerError> {
    let start = app.picker_start_dir();

    // The pointer may be anywhere once the chooser closes
    app.button_panel.set_hovered(None);
    app.button_panel.pressed = None;

    let result = app.player.select_folder(picker, &start);
    if !matches!(result, Ok(false)) {
        app.playlist_view.reset();
    }
    result.map(|_| ())
}

/// Routes mouse input to the components.
///
/// While a notice is shown a click only dismisses it.
pub(super) fn handle_pointer_event<A: AudioOutput>(
    app: &mut App<A>,
    picker: &mut dyn FolderPicker,
    event: &Event,
) -> Result<()> {
    let is_click = matches!(
        event,
        Event::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            ..
        })
    );

    if app.notice.is_some() {
        if is_click {
            app.notice = None;
        } else {
            app.button_panel.process_event(event);
        }
        return Ok(());
    }

    if let Some(button) = app.button_panel.process_event(event) {
        handle_button(app, picker, button)?;
    }

    let len = app.player.playlist().len();
    app.playlist_view.process_event(event, len);

    Ok(())
}

/// Per-tick housekeeping before the redraw.
pub(super) fn handle_tick<A: AudioOutput>(app: &mut App<A>) {
    if let Err(e) = app.player.sync() {
        // sync never touches the terminal, so there is nothing fatal here
        let _ = report(app, Err(e));
    }
}

/// Turns a command result into a notice, log entry, or fatal error.
fn report<A: AudioOutput>(app: &mut App<A>, result: Result<(), PlayerError>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(PlayerError::EmptyPlaylist) => {
            log::debug!("Ignoring command, the playlist is empty");
            Ok(())
        }
        Err(PlayerError::Io(e)) => Err(e).context("Terminal failure while choosing a folder"),
        Err(e) => {
            log::warn!("{}", e);
            app.notice = e.notice();
            Ok(())
        }
    }
}
