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

//! # Folder Music Player.
//!
//! Pick a folder, see its tracks, and control playback with on-screen buttons.
//!
//! The window is drawn into the terminal with `ratatui` and driven by the
//! mouse: pointer motion highlights buttons, a click runs their command, and
//! the wheel scrolls the playlist. Audio is played by `libmpv`.
//!
//! ## Architecture
//!
//! The application follows a strict setup-run-teardown pattern so the terminal
//! is restored even when the event loop fails. Everything runs on the main
//! thread: the event loop polls input, dispatches it to the widgets and the
//! [`player::Player`], and redraws at a fixed rate.

mod components;
mod config;
mod error;
mod events;
mod model;
mod picker;
mod player;
mod render;
mod theme;
mod util;

use std::{env, path::PathBuf};

use anyhow::{Context, Result};
use ratatui::layout::{Position, Rect};

use crate::{
    components::{ButtonPanel, PlaylistView},
    config::AppConfig,
    error::Notice,
    events::run_event_loop,
    player::{AudioOutput, MpvOutput, Player},
    theme::Theme,
    util::term::{restore_terminal, setup_terminal},
};

const BUTTON_ORIGIN: Position = Position::new(2, 1);
const PLAYLIST_ORIGIN: Position = Position::new(2, 5);
const PLAYLIST_WIDTH: u16 = 75;
const STATUS_HEIGHT: u16 = 3;

/// Application state.
pub(crate) struct App<A: AudioOutput = MpvOutput> {
    pub config: AppConfig,
    pub theme: Theme,

    pub player: Player<A>,

    pub button_panel: ButtonPanel,
    pub playlist_view: PlaylistView,

    /// Shown over the window until the next click or key press.
    pub notice: Option<Notice>,
}

impl<A: AudioOutput> App<A> {
    /// Create a new instance of application state.
    pub fn new(config: AppConfig, audio: A) -> Self {
        let playlist_area = Rect::new(PLAYLIST_ORIGIN.x, PLAYLIST_ORIGIN.y, PLAYLIST_WIDTH, 0);

        Self {
            player: Player::new(audio, config.extension.clone()),
            button_panel: ButtonPanel::new(BUTTON_ORIGIN),
            playlist_view: PlaylistView::new(
                playlist_area,
                config.visible_items,
                config.scroll_speed,
            ),
            theme: Theme::default(),
            notice: None,
            config,
        }
    }

    /// Where the status lines go, just under the playlist.
    pub(crate) fn status_area(&self) -> Rect {
        let playlist = self.playlist_view.area;
        let y = playlist.bottom().saturating_add(1);
        Rect::new(playlist.x, y, playlist.width, STATUS_HEIGHT)
    }

    /// Where the folder chooser opens: the active folder, then the configured
    /// start folder, then the working directory.
    pub(crate) fn picker_start_dir(&self) -> PathBuf {
        self.player
            .playlist()
            .folder()
            .map(PathBuf::from)
            .or_else(|| self.config.start_dir())
            .or_else(|| env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("/"))
    }
}

/// The entry point of the application.
///
/// Loads the configuration, starts logging and the audio backend, then runs
/// the event loop inside a prepared terminal. Failing to initialise audio or
/// the terminal is fatal, a missing log file is not.
fn main() -> Result<()> {
    let config = config::load_config();

    util::logger::init_logger(&config);
    log::info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let audio = MpvOutput::new().context("Failed to initialise audio")?;
    let mut app = App::new(config, audio);

    let mut terminal = setup_terminal(&app.theme)?;
    let res = run_event_loop(&mut terminal, &mut app);

    if let Err(e) = app.player.stop() {
        log::warn!("Failed to stop playback on exit: {}", e);
    }
    restore_terminal(&mut terminal);

    log::info!("Exiting");
    res.context("Application error occurred")
}
